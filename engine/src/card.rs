use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::combat::CombatUnit;
use crate::element::Element;
use crate::error::{CatalogError, ScriptError};

pub const MAX_NAME_LEN: usize = 16;
pub const DAMAGE_RANGE: (i32, i32) = (2, 100);
pub const HEALTH_RANGE: (i32, i32) = (1, 100);

/// Cuts a name to at most `max` characters (not bytes).
pub(crate) fn truncate_name(name: &str, max: usize) -> String {
    name.trim().chars().take(max).collect()
}

/// Catalog names are keys: stored and looked up exactly as written, so they
/// are checked once on insertion instead of being shortened.
pub(crate) fn check_name(name: &str, max: usize) -> Result<(), CatalogError> {
    let reason = if name.is_empty() {
        "is empty"
    } else if !name.is_ascii() {
        "is not plain ASCII"
    } else if name.len() > max {
        return Err(CatalogError::NameTooLong {
            name: name.to_string(),
            max,
        });
    } else {
        return Ok(());
    };
    Err(CatalogError::InvalidName {
        name: name.to_string(),
        reason,
    })
}

/// A card as the world catalog and the player's collection store it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub name: String,
    pub damage: i32,
    pub health: i32,
    pub element: Element,
}

impl CardDefinition {
    pub fn new(name: &str, damage: i32, health: i32, element: Element) -> Self {
        Self {
            name: name.trim().to_string(),
            damage: damage.clamp(DAMAGE_RANGE.0, DAMAGE_RANGE.1),
            health: health.clamp(HEALTH_RANGE.0, HEALTH_RANGE.1),
            element,
        }
    }

    /// Leader built on top of this card, one stat doubled.
    pub fn leader(&self, name: &str, boost: LeaderBoost) -> Self {
        let (damage, health) = match boost {
            LeaderBoost::Damage => (self.damage * 2, self.health),
            LeaderBoost::Health => (self.damage, self.health * 2),
        };
        Self {
            name: name.trim().to_string(),
            damage,
            health,
            element: self.element,
        }
    }

    pub fn to_unit(&self, is_leader: bool) -> CombatUnit {
        CombatUnit::new(&self.name, self.damage, self.health, self.element, is_leader)
    }
}

impl fmt::Display for CardDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<16}  {:>3}/{:<3}  {}",
            self.name, self.damage, self.health, self.element
        )
    }
}

/// Which stat a leader doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderBoost {
    Damage,
    Health,
}

impl FromStr for LeaderBoost {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sebzes" | "damage" => Ok(LeaderBoost::Damage),
            "eletero" | "health" => Ok(LeaderBoost::Health),
            other => Err(ScriptError::UnknownToken {
                what: "leader boost",
                token: other.to_string(),
            }),
        }
    }
}
