//! Treasure hunt balance simulator CLI.
//!
//! Autoplays many games to see how each difficulty mode plays out.
//!
//! Examples:
//!   cargo run --bin simulate                       # 1000 normal-mode runs
//!   cargo run --bin simulate -- -n 200 -m hard     # 200 hard-mode runs
//!   cargo run --bin simulate -- --seed 42 --json   # Reproducible, with JSON report
//!   cargo run --bin simulate -- --hard-test        # 500 hard-mode runs, 1000 turns each

use clap::Parser;
use treasure_hunter::logging;
use treasure_hunter::simulator::{run_simulation, SimConfig};
use treasure_hunter::GameMode;

#[derive(Debug, Parser)]
#[command(name = "simulate", about = "Treasure Hunter balance simulator")]
struct Args {
    /// Number of simulated games
    #[arg(short = 'n', long = "runs", default_value_t = 1000)]
    runs: u32,

    /// Difficulty to play on
    #[arg(short, long, value_enum, default_value_t = GameMode::Normal)]
    mode: GameMode,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Turns per game before it counts as timed out
    #[arg(short = 't', long = "turns", default_value_t = 500)]
    max_turns: u32,

    /// Log every run
    #[arg(short, long)]
    verbose: bool,

    /// Save a JSON report next to the text one
    #[arg(long)]
    json: bool,

    /// Quick check: 100 runs
    #[arg(long, conflicts_with = "runs")]
    quick: bool,

    /// Hard-mode stress test: 500 runs with a 1000 turn limit
    #[arg(long, conflicts_with_all = ["runs", "quick", "mode", "max_turns"])]
    hard_test: bool,
}

impl Args {
    fn to_config(&self) -> SimConfig {
        let verbosity = if self.verbose { 2 } else { 1 };
        if self.hard_test {
            return SimConfig {
                seed: self.seed,
                verbosity,
                ..SimConfig::hard_mode_test()
            };
        }
        let base = if self.quick {
            SimConfig::quick(self.mode)
        } else {
            SimConfig {
                num_runs: self.runs,
                mode: self.mode,
                ..Default::default()
            }
        };
        SimConfig {
            seed: self.seed,
            max_turns: self.max_turns,
            verbosity,
            ..base
        }
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    let config = args.to_config();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              TREASURE HUNTER BALANCE SIMULATOR                ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:       {}", config.num_runs);
    println!("  Mode:       {}", config.mode.name());
    println!("  Max Turns:  {}", config.max_turns);
    if let Some(seed) = config.seed {
        println!("  Seed:       {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if args.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_test_flag_uses_preset() {
        let args = Args::parse_from(["simulate", "--hard-test", "--seed", "3"]);
        let config = args.to_config();
        assert_eq!(config.mode, GameMode::Hard);
        assert_eq!(config.num_runs, 500);
        assert_eq!(config.max_turns, 1000);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_hard_test_conflicts_with_quick() {
        assert!(Args::try_parse_from(["simulate", "--hard-test", "--quick"]).is_err());
    }

    #[test]
    fn test_quick_keeps_chosen_mode() {
        let config = Args::parse_from(["simulate", "--quick", "-m", "easy"]).to_config();
        assert_eq!(config.num_runs, 100);
        assert_eq!(config.mode, GameMode::Easy);
        assert_eq!(config.max_turns, 500);
    }
}
