use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::combat::BattleOutcome;
use crate::dungeon::{Dungeon, DungeonKind};
use crate::error::{CatalogError, ScriptError};
use crate::player::Player;
use crate::world::World;

pub const WIN_MARKER: &str = "jatekos nyert";
pub const LOSS_MARKER: &str = "jatekos vesztett";

/// Stat bump a small or medium dungeon hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Damage,
    Health,
}

impl RewardKind {
    pub fn script_token(self) -> &'static str {
        match self {
            RewardKind::Damage => "sebzes",
            RewardKind::Health => "eletero",
        }
    }
}

impl fmt::Display for RewardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.script_token())
    }
}

impl FromStr for RewardKind {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sebzes" | "damage" => Ok(RewardKind::Damage),
            "eletero" | "health" => Ok(RewardKind::Health),
            other => Err(ScriptError::UnknownToken {
                what: "reward kind",
                token: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Reward {
    /// The battle was lost.
    None,
    Upgraded { kind: RewardKind, card: String },
    NewCard { card: String },
    /// Large dungeon won, but the player already owns every catalog card.
    NothingLeft,
}

impl Reward {
    /// The closing line of a battle report.
    pub fn final_line(&self) -> String {
        match self {
            Reward::None => LOSS_MARKER.to_string(),
            Reward::Upgraded { kind, card } => format!("{};{};{}", WIN_MARKER, kind, card),
            Reward::NewCard { card } => format!("{};{}", WIN_MARKER, card),
            Reward::NothingLeft => WIN_MARKER.to_string(),
        }
    }
}

/// Applies the reward for `outcome` to the player's collection. A loss
/// changes nothing; a win changes the collection exactly once.
pub fn apply_reward(
    world: &World,
    player: &mut Player,
    dungeon: &Dungeon,
    outcome: &BattleOutcome,
) -> Result<Reward, CatalogError> {
    let Some(winner) = outcome.winning_attacker.as_deref().filter(|_| outcome.player_won()) else {
        return Ok(Reward::None);
    };

    let reward = match (dungeon.kind, dungeon.reward) {
        (DungeonKind::Large, _) => match world.first_unowned_card(player) {
            Some(card) => {
                let name = card.name.clone();
                player.add_from_world(world, &name)?;
                Reward::NewCard { card: name }
            }
            None => Reward::NothingLeft,
        },
        (DungeonKind::Small | DungeonKind::Medium, Some(kind)) => {
            let card = player.card_mut(winner)?;
            match kind {
                RewardKind::Damage => card.damage += 1,
                RewardKind::Health => card.health += 2,
            }
            Reward::Upgraded {
                kind,
                card: winner.to_string(),
            }
        }
        (_, None) => {
            return Err(CatalogError::MalformedDungeon {
                name: dungeon.name.clone(),
                reason: "this dungeon kind needs a reward kind",
            });
        }
    };

    info!(dungeon = %dungeon.name, ?reward, "reward applied");
    Ok(reward)
}
