use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, info};

use super::log::{attack_line, Side};
use super::unit::CombatUnit;
use crate::difficulty::{enemy_damage, player_damage, Difficulty};
use crate::element::adjusted_damage;
use crate::error::BattleError;
use crate::Dice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    PlayerWins,
    PlayerLoses,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BattleOutcome {
    pub verdict: Verdict,
    pub rounds: u32,
    /// One line per attack, in order.
    pub log: Vec<String>,
    /// Active player unit when the last enemy fell. `None` on a loss.
    pub winning_attacker: Option<String>,
    /// Units still standing on each side, front of the queue first.
    pub player_remaining: Vec<CombatUnit>,
    pub enemy_remaining: Vec<CombatUnit>,
}

impl BattleOutcome {
    pub fn player_won(&self) -> bool {
        self.verdict == Verdict::PlayerWins
    }
}

/// Runs one battle to its verdict.
///
/// Each round the front player unit strikes the front enemy unit; if the
/// enemy survives it strikes back. A unit that replaces a fallen one only
/// defends in the round it comes in. Empty queues are rejected before any
/// round is played.
pub fn resolve_battle(
    player: Vec<CombatUnit>,
    enemy: Vec<CombatUnit>,
    difficulty: Difficulty,
    dice: &mut Dice,
) -> Result<BattleOutcome, BattleError> {
    let mut player: VecDeque<CombatUnit> = player.into();
    let mut enemy: VecDeque<CombatUnit> = enemy.into();
    let Some(mut hero) = player.pop_front() else {
        return Err(BattleError::EmptyPlayerQueue);
    };
    let Some(mut foe) = enemy.pop_front() else {
        return Err(BattleError::EmptyEnemyQueue);
    };

    let mut log = Vec::new();
    let mut rounds = 0u32;

    debug!(
        player_units = player.len() + 1,
        enemy_units = enemy.len() + 1,
        difficulty = difficulty.level(),
        "battle starts"
    );

    let verdict = loop {
        rounds += 1;

        let base = adjusted_damage(hero.element(), foe.element(), hero.damage());
        let dealt = player_damage(base, difficulty, dice);
        let dropped = foe.take_hit(dealt);
        log.push(attack_line(rounds, Side::Player, &hero, dealt, &foe));
        debug!(round = rounds, attacker = hero.name(), defender = foe.name(), dealt, "player attack");

        if dropped {
            debug!(round = rounds, fallen = foe.name(), "enemy unit defeated");
            match enemy.pop_front() {
                // The replacement only defends this round.
                Some(next) => {
                    foe = next;
                    continue;
                }
                None => break Verdict::PlayerWins,
            }
        }

        let base = adjusted_damage(foe.element(), hero.element(), foe.damage());
        let dealt = enemy_damage(base, difficulty, dice);
        let dropped = hero.take_hit(dealt);
        log.push(attack_line(rounds, Side::Dungeon, &foe, dealt, &hero));
        debug!(round = rounds, attacker = foe.name(), defender = hero.name(), dealt, "enemy attack");

        if dropped {
            debug!(round = rounds, fallen = hero.name(), "player unit defeated");
            match player.pop_front() {
                Some(next) => hero = next,
                None => break Verdict::PlayerLoses,
            }
        }
    };

    let winning_attacker = match verdict {
        Verdict::PlayerWins => {
            let name = hero.name().to_string();
            player.push_front(hero);
            Some(name)
        }
        Verdict::PlayerLoses => {
            enemy.push_front(foe);
            None
        }
    };

    info!(?verdict, rounds, attacks = log.len(), "battle resolved");

    Ok(BattleOutcome {
        verdict,
        rounds,
        log,
        winning_attacker,
        player_remaining: player.into(),
        enemy_remaining: enemy.into(),
    })
}
