//! Simulation configuration.

use crate::game::GameMode;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to autoplay
    pub num_runs: u32,

    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,

    /// Difficulty every game is played on
    pub mode: GameMode,

    /// Turns per game before it is counted as timed out
    pub max_turns: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            mode: GameMode::Normal,
            max_turns: 500,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small batch for a quick look at one mode
    pub fn quick(mode: GameMode) -> Self {
        Self {
            num_runs: 100,
            mode,
            ..Default::default()
        }
    }

    /// Hard mode with a generous turn limit
    pub fn hard_mode_test() -> Self {
        Self {
            num_runs: 500,
            mode: GameMode::Hard,
            max_turns: 1000,
            ..Default::default()
        }
    }
}
