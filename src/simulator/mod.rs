//! Autoplay simulator for balance analysis.
//!
//! Plays many games with a fixed strategy to measure:
//! - How often the hunter wins, goes broke or wanders forever
//! - How many turns and towns a win takes
//! - How each difficulty mode shifts those numbers
//!
//! Games are driven through `Game::process`, so results follow the real rules.

mod config;
mod report;
mod runner;
mod strategy;

pub use config::SimConfig;
pub use report::{RunOutcome, RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
pub use strategy::choose_action;
