//! Per-run statistics and the aggregated simulation report.

use crate::game::{Game, GameMode, GameStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    Won,
    Lost,
    TimedOut,
}

/// What one autoplayed game ended with.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub outcome: RunOutcome,
    pub turns: u32,
    pub towns_visited: u32,
    pub final_gold: i32,
    pub treasures: usize,
}

impl RunStats {
    pub fn from_game(game: &Game) -> Self {
        let outcome = match game.status() {
            GameStatus::Won => RunOutcome::Won,
            GameStatus::Lost => RunOutcome::Lost,
            GameStatus::Playing | GameStatus::Quit => RunOutcome::TimedOut,
        };
        Self {
            outcome,
            turns: game.turns(),
            towns_visited: game.towns_visited(),
            final_gold: game.hunter().gold(),
            treasures: game.hunter().chest().len(),
        }
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub mode: GameMode,
    pub num_runs: u32,
    pub wins: u32,
    pub losses: u32,
    pub timeouts: u32,

    pub avg_turns: f64,
    pub avg_turns_to_win: f64,
    pub avg_towns_visited: f64,
    pub avg_final_gold: f64,

    /// Index = treasures held when the run ended (0-3)
    pub treasure_distribution: [u32; 4],

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, mode: GameMode) -> Self {
        let count = |outcome: RunOutcome| runs.iter().filter(|r| r.outcome == outcome).count() as u32;
        let wins = count(RunOutcome::Won);
        let losses = count(RunOutcome::Lost);
        let timeouts = count(RunOutcome::TimedOut);

        let mut treasure_distribution = [0u32; 4];
        for run in &runs {
            treasure_distribution[run.treasures.min(3)] += 1;
        }

        Self {
            mode,
            num_runs: runs.len() as u32,
            wins,
            losses,
            timeouts,
            avg_turns: mean(runs.iter().map(|r| r.turns as f64)),
            avg_turns_to_win: mean(
                runs.iter()
                    .filter(|r| r.outcome == RunOutcome::Won)
                    .map(|r| r.turns as f64),
            ),
            avg_towns_visited: mean(runs.iter().map(|r| r.towns_visited as f64)),
            avg_final_gold: mean(runs.iter().map(|r| r.final_gold as f64)),
            treasure_distribution,
            run_stats: runs,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.num_runs == 0 {
            0.0
        } else {
            self.wins as f64 / self.num_runs as f64 * 100.0
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();
        let pct = |n: u32| {
            if self.num_runs == 0 {
                0.0
            } else {
                n as f64 / self.num_runs as f64 * 100.0
            }
        };

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 TREASURE HUNTER SIMULATION\n");
        report.push_str(&format!("                     ({} mode)\n", self.mode.name()));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Runs:        {}\n", self.num_runs));
        report.push_str(&format!("  Won:         {:>5} ({:.1}%)\n", self.wins, pct(self.wins)));
        report.push_str(&format!("  Went broke:  {:>5} ({:.1}%)\n", self.losses, pct(self.losses)));
        report.push_str(&format!("  Timed out:   {:>5} ({:.1}%)\n\n", self.timeouts, pct(self.timeouts)));

        report.push_str("── PACING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Turns:          {:.1}\n", self.avg_turns));
        report.push_str(&format!("  Avg Turns to Win:   {:.1}\n", self.avg_turns_to_win));
        report.push_str(&format!("  Avg Towns Visited:  {:.1}\n", self.avg_towns_visited));
        report.push_str(&format!("  Avg Final Gold:     {:.1}\n\n", self.avg_final_gold));

        report.push_str("── TREASURES HELD AT END ────────────────────────────────────────\n");
        for (held, runs) in self.treasure_distribution.iter().enumerate() {
            let share = pct(*runs);
            let bar = "█".repeat((share / 5.0) as usize);
            report.push_str(&format!("  {} held: {:>5.1}% {}\n", held, share, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
