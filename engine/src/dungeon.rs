use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::card::check_name;
use crate::combat::CombatUnit;
use crate::error::{CatalogError, ScriptError};
use crate::reward::RewardKind;
use crate::world::World;

pub const MAX_DUNGEON_NAME_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DungeonKind {
    /// Enemy cards only; a win upgrades a collection card.
    Small,
    /// Enemy cards plus a leader; a win upgrades a collection card.
    Medium,
    /// Enemy cards plus a leader; a win grants a new card.
    Large,
}

impl DungeonKind {
    pub fn script_token(self) -> &'static str {
        match self {
            DungeonKind::Small => "egyszeru",
            DungeonKind::Medium => "kis",
            DungeonKind::Large => "nagy",
        }
    }
}

impl FromStr for DungeonKind {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "egyszeru" | "small" => Ok(DungeonKind::Small),
            "kis" | "medium" => Ok(DungeonKind::Medium),
            "nagy" | "large" => Ok(DungeonKind::Large),
            other => Err(ScriptError::UnknownToken {
                what: "dungeon kind",
                token: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    pub name: String,
    pub kind: DungeonKind,
    pub enemies: Vec<String>,
    #[serde(default)]
    pub leader: Option<String>,
    #[serde(default)]
    pub reward: Option<RewardKind>,
}

impl Dungeon {
    pub fn new(
        name: &str,
        kind: DungeonKind,
        enemies: Vec<String>,
        leader: Option<String>,
        reward: Option<RewardKind>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            kind,
            enemies,
            leader,
            reward,
        }
    }

    /// Name and shape rules per kind. Name resolution is the catalog's job.
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_name(&self.name, MAX_DUNGEON_NAME_LEN)?;
        let fail = |reason: &'static str| -> Result<(), CatalogError> {
            Err(CatalogError::MalformedDungeon {
                name: self.name.clone(),
                reason,
            })
        };
        match self.kind {
            DungeonKind::Small if self.leader.is_some() => fail("a small dungeon has no leader"),
            DungeonKind::Medium | DungeonKind::Large if self.leader.is_none() => {
                fail("this dungeon kind needs a leader")
            }
            DungeonKind::Small | DungeonKind::Medium if self.reward.is_none() => {
                fail("this dungeon kind needs a reward kind")
            }
            DungeonKind::Large if self.reward.is_some() => {
                fail("a large dungeon grants a card, not a stat reward")
            }
            _ if self.enemies.is_empty() && self.leader.is_none() => fail("no enemies"),
            _ => Ok(()),
        }
    }

    /// Enemy battle queue: cards in listed order, leader last.
    pub fn enemy_queue(&self, world: &World) -> Result<Vec<CombatUnit>, CatalogError> {
        let mut queue = self
            .enemies
            .iter()
            .map(|name| world.card(name).map(|c| c.to_unit(false)))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(leader) = &self.leader {
            queue.push(world.leader(leader)?.to_unit(true));
        }
        Ok(queue)
    }
}
