use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::combat::{resolve_battle, BattleOutcome};
use crate::difficulty::Difficulty;
use crate::player::Player;
use crate::reward::{apply_reward, Reward};
use crate::world::World;
use crate::Dice;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FightReport {
    pub dungeon: String,
    pub difficulty: Difficulty,
    pub outcome: BattleOutcome,
    pub reward: Reward,
    /// Battle log followed by the final line.
    pub lines: Vec<String>,
}

/// Builds both queues, runs the battle and applies the reward. Nothing is
/// mutated if the inputs are rejected.
pub fn fight(
    world: &World,
    player: &mut Player,
    dungeon_name: &str,
    difficulty: Difficulty,
    dice: &mut Dice,
) -> Result<FightReport> {
    let dungeon = world
        .dungeon(dungeon_name)
        .with_context(|| format!("cannot enter dungeon '{}'", dungeon_name))?;
    let enemy = dungeon
        .enemy_queue(world)
        .with_context(|| format!("failed to build enemy queue for '{}'", dungeon.name))?;
    let own = player.battle_queue().context("failed to build player queue")?;

    let outcome = resolve_battle(own, enemy, difficulty, dice)?;
    let reward = apply_reward(world, player, dungeon, &outcome)?;

    let mut lines = outcome.log.clone();
    lines.push(reward.final_line());

    Ok(FightReport {
        dungeon: dungeon.name.clone(),
        difficulty,
        outcome,
        reward,
        lines,
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationSummary {
    pub samples: u32,
    pub wins: u32,
    pub losses: u32,
    pub avg_rounds_on_win: f64,
    pub median_rounds_on_win: u32,
}

impl SimulationSummary {
    pub fn win_rate(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.wins as f64 / self.samples as f64
        }
    }
}

/// Runs `trials` battles against one dungeon; trial `i` uses `seed + i`.
/// Every trial starts from an untouched copy of the player.
pub fn simulate_many(
    world: &World,
    player: &Player,
    dungeon_name: &str,
    difficulty: Difficulty,
    seed: u64,
    trials: u32,
) -> Result<SimulationSummary> {
    let mut wins = 0u32;
    let mut win_rounds: Vec<u32> = Vec::with_capacity(trials as usize);

    for i in 0..trials {
        let mut scratch = player.clone();
        let mut dice = Dice::from_seed(seed.wrapping_add(i as u64));
        let report = fight(world, &mut scratch, dungeon_name, difficulty, &mut dice)?;
        if report.outcome.player_won() {
            wins += 1;
            win_rounds.push(report.outcome.rounds);
        }
    }

    win_rounds.sort_unstable();
    let avg_rounds_on_win = if win_rounds.is_empty() {
        0.0
    } else {
        win_rounds.iter().map(|&r| r as u64).sum::<u64>() as f64 / win_rounds.len() as f64
    };
    let median_rounds_on_win = if win_rounds.is_empty() {
        0
    } else {
        let m = win_rounds.len() / 2;
        if win_rounds.len() % 2 == 1 {
            win_rounds[m]
        } else {
            (win_rounds[m - 1] + win_rounds[m]) / 2
        }
    };

    let summary = SimulationSummary {
        samples: trials,
        wins,
        losses: trials - wins,
        avg_rounds_on_win,
        median_rounds_on_win,
    };
    info!(dungeon = dungeon_name, samples = trials, wins, "simulation finished");
    Ok(summary)
}
