use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use encoding_rs::Encoding;
use serde::Deserialize;

use crate::difficulty::Difficulty;
use crate::Dice;

/// Settings for live play. Every field is optional in the file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct GameConfig {
    /// Built-in world id or path to a world script.
    pub world: Option<String>,
    /// Clamped into 0..=10 on load.
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
    /// Overrides the deck the world script sets up.
    pub deck: Vec<String>,
    pub dungeon: Option<String>,
}

impl GameConfig {
    /// YAML for `.yaml`/`.yml`, JSON for `.json`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_text_auto(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let cfg = match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&text)
                .with_context(|| format!("failed to parse config YAML: {}", path.display()))?,
            "json" => serde_json::from_str(&text)
                .with_context(|| format!("failed to parse config JSON: {}", path.display()))?,
            other => bail!("unsupported config extension '{}' (use yaml, yml or json)", other),
        };
        Ok(cfg)
    }

    pub fn dice(&self) -> Dice {
        match self.seed {
            Some(seed) => Dice::from_seed(seed),
            None => Dice::from_entropy(),
        }
    }
}

/// Reads a text file, honouring a UTF-8/UTF-16 BOM if present.
pub fn read_text_auto(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}
