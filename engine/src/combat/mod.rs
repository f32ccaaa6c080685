//! Battle resolution: combat units, the round loop and its event log.

mod log;
mod resolve;
mod unit;

pub use log::{attack_line, Side};
pub use resolve::{resolve_battle, BattleOutcome, Verdict};
pub use unit::CombatUnit;
