use serde::{Deserialize, Serialize};

use crate::{round_half_even, Dice};

pub const MAX_DIFFICULTY: u8 = 10;

/// Live-play difficulty, 0..=10. Level 0 makes every battle deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const NONE: Difficulty = Difficulty(0);

    /// Clamps into `0..=10`.
    pub fn new(level: i64) -> Self {
        Self(level.clamp(0, MAX_DIFFICULTY as i64) as u8)
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn is_deterministic(self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for Difficulty {
    fn from(level: i64) -> Self {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

/// Skews an enemy hit upward: `round(base * (1 + r * n/10))`, never below 1.
/// No randomness is drawn at difficulty 0.
pub fn enemy_damage(base: i32, difficulty: Difficulty, dice: &mut Dice) -> i32 {
    if difficulty.is_deterministic() {
        return base;
    }
    let r = dice.fraction();
    let factor = 1.0 + r * (difficulty.level() as f64 / 10.0);
    round_half_even(base as f64 * factor).max(1) as i32
}

/// Skews a player hit downward: `round(base * (1 - r * n/20))`, never below 0.
/// A hit may whiff completely at high difficulty.
pub fn player_damage(base: i32, difficulty: Difficulty, dice: &mut Dice) -> i32 {
    if difficulty.is_deterministic() {
        return base;
    }
    let r = dice.fraction();
    let factor = 1.0 - r * (difficulty.level() as f64 / 20.0);
    round_half_even(base as f64 * factor).max(0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_both_ends() {
        assert_eq!(Difficulty::new(-3).level(), 0);
        assert_eq!(Difficulty::new(4).level(), 4);
        assert_eq!(Difficulty::new(42).level(), 10);
    }

    #[test]
    fn level_zero_draws_nothing() {
        let mut used = Dice::from_seed(5);
        let mut fresh = Dice::from_seed(5);
        assert_eq!(enemy_damage(7, Difficulty::NONE, &mut used), 7);
        assert_eq!(player_damage(7, Difficulty::NONE, &mut used), 7);
        assert_eq!(used.fraction().to_bits(), fresh.fraction().to_bits());
    }

    #[test]
    fn deserializes_out_of_range_as_clamped() {
        let d: Difficulty = serde_json::from_str("15").unwrap();
        assert_eq!(d.level(), 10);
        let d: Difficulty = serde_json::from_str("-1").unwrap();
        assert_eq!(d, Difficulty::NONE);
    }
}
