//! Arena balance simulator for Monte Carlo analysis.
//!
//! Runs many seeded campaigns of auto-played town battles to check:
//! - Win rate against each opponent in the town roster
//! - Battle length in turns
//! - XP and gold income, and how fast players level
//!
//! Every battle goes through the real `GameStore`, so the numbers match
//! what a player sees.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{EnemyStats, RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run, FightOutcome, FightResult};
