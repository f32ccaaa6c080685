use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::read_text_auto;
use crate::script::Session;

pub fn builtin_worlds() -> HashMap<&'static str, &'static str> {
    HashMap::from([("starter", include_str!("../content/worlds/starter.txt"))])
}

/// A built-in world id, or else a path to a world script.
pub fn load_world(id_or_path: &str) -> Result<Session> {
    if let Some(text) = builtin_worlds().get(id_or_path) {
        return Ok(Session::from_script_text(text));
    }
    let path = Path::new(id_or_path);
    let text = read_text_auto(path)
        .with_context(|| format!("'{}' is neither a built-in world nor a readable file", id_or_path))?;
    Ok(Session::from_script_text(&text))
}
