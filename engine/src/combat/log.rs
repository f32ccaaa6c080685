use std::fmt;

use serde::{Deserialize, Serialize};

use super::unit::CombatUnit;

/// Which side of the battle acted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Dungeon,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Player => "jatekos",
            Side::Dungeon => "kazamata",
        })
    }
}

/// `<round>.kor;<side>;tamad;<attacker>;<damage>;<defender>;<defender hp left>`
///
/// Downstream harnesses diff this text, so the field order is frozen.
pub fn attack_line(
    round: u32,
    side: Side,
    attacker: &CombatUnit,
    damage: i32,
    defender: &CombatUnit,
) -> String {
    format!(
        "{}.kor;{};tamad;{};{};{};{}",
        round,
        side,
        attacker.name(),
        damage,
        defender.name(),
        defender.hit_points()
    )
}
