//! Battle balance simulator for Monte Carlo analysis.
//!
//! Runs batches of headless battles to analyze:
//! - Win/loss rates and average battle length
//! - Spin category distribution (triple/partial/no match)
//! - How often the enemy charms itself into re-rolls
//!
//! The simulator drives the same `BattleSession` state machine as real
//! gameplay, with every presentation pause collapsed to nothing.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{BattleStats, SimReport};
pub use runner::run_simulation;
