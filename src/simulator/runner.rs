//! Plays simulated games through the real `Game` driver.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use super::strategy::choose_action;
use crate::game::{Action, Game};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            info!(
                run = run_idx + 1,
                of = config.num_runs,
                outcome = ?run.outcome,
                turns = run.turns,
                towns = run.towns_visited,
                gold = run.final_gold,
                treasures = run.treasures,
                "run finished"
            );
        }
        all_runs.push(run);
    }

    let report = SimReport::from_runs(all_runs, config.mode);
    if config.verbosity >= 1 {
        info!(
            mode = config.mode.name(),
            runs = report.num_runs,
            win_rate = report.win_rate(),
            "simulation complete"
        );
    }
    report
}

/// Autoplays one game until it ends or hits the turn limit.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut game = Game::new("Simulated Hunter", config.mode, rng);
    // Dust leaves a town unsearched, so remember which town we already tried
    let mut hunted_in: Option<u32> = None;

    while !game.status().is_over() && game.turns() < config.max_turns {
        let town_id = game.towns_visited();
        let action = choose_action(&game, hunted_in == Some(town_id));
        if action == Action::Hunt {
            hunted_in = Some(town_id);
        }
        game.process(action, rng);
    }

    RunStats::from_game(&game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameMode;
    use crate::simulator::report::RunOutcome;

    #[test]
    fn test_same_seed_same_report() {
        let config = SimConfig {
            num_runs: 20,
            seed: Some(42),
            verbosity: 0,
            ..Default::default()
        };
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.losses, b.losses);
        assert_eq!(a.avg_turns, b.avg_turns);
    }

    #[test]
    fn test_every_run_is_accounted_for() {
        let config = SimConfig {
            num_runs: 30,
            seed: Some(7),
            verbosity: 0,
            ..Default::default()
        };
        let report = run_simulation(&config);
        assert_eq!(report.num_runs, 30);
        assert_eq!(report.wins + report.losses + report.timeouts, 30);
    }

    #[test]
    fn test_turn_limit_is_respected() {
        let config = SimConfig {
            num_runs: 1,
            seed: Some(1),
            max_turns: 3,
            verbosity: 0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let run = simulate_single_run(&config, &mut rng);
        assert!(run.turns <= 3);
        if run.outcome == RunOutcome::TimedOut {
            assert_eq!(run.turns, 3);
        }
    }

    #[test]
    fn test_outfitted_easy_hunter_usually_wins() {
        let config = SimConfig {
            num_runs: 50,
            seed: Some(11),
            mode: GameMode::Test,
            max_turns: 2000,
            verbosity: 0,
        };
        let report = run_simulation(&config);
        assert!(report.wins > 25, "only {} wins", report.wins);
    }
}
