//! Scripted test mode: a line-oriented command language driving a session,
//! with battle and export commands writing files next to the script.

mod command;
mod export;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

pub use command::Command;
pub use export::{player_lines, world_lines};

use crate::api::fight;
use crate::card::CardDefinition;
use crate::config::read_text_auto;
use crate::difficulty::Difficulty;
use crate::error::DeckError;
use crate::player::Player;
use crate::world::World;
use crate::Dice;

pub const SCRIPT_FILE: &str = "in.txt";

/// File a command asked to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutput {
    pub file: String,
    pub lines: Vec<String>,
}

impl ScriptOutput {
    /// Newline-terminated text, one entry per line.
    pub fn contents(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// The world plus the (optional) current player. Owned by whoever drives the
/// script; commands only ever touch this state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub world: World,
    pub player: Option<Player>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs script text that produces no files (world definitions).
    pub fn from_script_text(text: &str) -> Self {
        let mut session = Self::new();
        for output in session.run_text(text) {
            warn!(file = %output.file, "output ignored while loading a world script");
        }
        session
    }

    fn player_mut(&mut self) -> Result<&mut Player, DeckError> {
        self.player.as_mut().ok_or(DeckError::NoPlayer)
    }

    /// Applies one command. Battles in test mode always run at difficulty 0.
    pub fn execute(&mut self, command: Command) -> Result<Option<ScriptOutput>> {
        match command {
            Command::NewCard { name, damage, health, element } => {
                self.world.add_card(CardDefinition::new(&name, damage, health, element))?;
            }
            Command::NewLeader { name, base, boost } => {
                self.world.add_leader(&name, &base, boost)?;
            }
            Command::NewDungeon(dungeon) => self.world.add_dungeon(dungeon)?,
            Command::NewPlayer => self.player = Some(Player::new()),
            Command::Collect { card } => {
                let Session { world, player } = self;
                let player = player.as_mut().ok_or(DeckError::NoPlayer)?;
                player.add_from_world(world, &card)?;
            }
            Command::NewDeck { cards } => self.player_mut()?.set_deck(cards.as_slice())?,
            Command::Battle { dungeon, output } => {
                let Session { world, player } = self;
                let player = player.as_mut().ok_or(DeckError::NoPlayer)?;
                let mut dice = Dice::from_seed(0);
                let report = fight(world, player, &dungeon, Difficulty::NONE, &mut dice)?;
                return Ok(Some(ScriptOutput { file: output, lines: report.lines }));
            }
            Command::ExportWorld { output } => {
                return Ok(Some(ScriptOutput { file: output, lines: world_lines(&self.world) }));
            }
            Command::ExportPlayer { output } => {
                let lines = player_lines(self.player_mut()?);
                return Ok(Some(ScriptOutput { file: output, lines }));
            }
        }
        Ok(None)
    }

    /// Runs every non-blank line. A rejected line is logged and skipped;
    /// it leaves the session as it was.
    pub fn run_text(&mut self, text: &str) -> Vec<ScriptOutput> {
        let mut outputs = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let result = line
                .parse::<Command>()
                .map_err(anyhow::Error::from)
                .and_then(|command| self.execute(command));
            match result {
                Ok(Some(output)) => outputs.push(output),
                Ok(None) => {}
                Err(err) => warn!(line = idx + 1, text = line, "command rejected: {:#}", err),
            }
        }
        outputs
    }
}

/// Test mode: runs `dir/in.txt` and writes every requested file into `dir`.
/// Returns the written paths in order.
pub fn run_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let script = dir.join(SCRIPT_FILE);
    let text = read_text_auto(&script)
        .with_context(|| format!("failed to read script: {}", script.display()))?;

    let mut session = Session::new();
    let mut written = Vec::new();
    for output in session.run_text(&text) {
        let path = dir.join(&output.file);
        fs::write(&path, output.contents())
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), lines = output.lines.len(), "output written");
        written.push(path);
    }
    Ok(written)
}
