//! Simulation report generation.

use super::config::{InputPolicy, SimConfig};
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub seed: u64,
    /// Ticks played, including the halting one.
    pub ticks: u64,
    pub score: u32,
    /// False when the tick cap ended the run.
    pub halted: bool,
    pub obstacles_spawned: u32,
    pub obstacles_retired: u32,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub policy: InputPolicy,
    pub max_ticks_per_run: u64,
    pub runs_halted: u32,
    pub runs_survived: u32,

    pub avg_score: f64,
    pub max_score: u32,
    pub avg_ticks: f64,
    pub avg_ticks_to_halt: f64,

    pub score_distribution: BTreeMap<u32, u32>,

    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let runs_halted = runs.iter().filter(|r| r.halted).count() as u32;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let max_score = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let avg_ticks = runs.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor;
        let avg_ticks_to_halt = runs
            .iter()
            .filter(|r| r.halted)
            .map(|r| r.ticks as f64)
            .sum::<f64>()
            / runs_halted.max(1) as f64;

        let mut score_distribution = BTreeMap::new();
        for run in &runs {
            *score_distribution.entry(run.score).or_insert(0) += 1;
        }

        Self {
            num_runs,
            policy: config.policy,
            max_ticks_per_run: config.max_ticks_per_run,
            runs_halted,
            runs_survived: num_runs - runs_halted,
            avg_score,
            max_score,
            avg_ticks,
            avg_ticks_to_halt,
            score_distribution,
            runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} halted, {} survived (cap {} ticks)\n",
            self.num_runs, self.runs_halted, self.runs_survived, self.max_ticks_per_run
        ));
        report.push_str(&format!("Policy: {}\n\n", self.policy));

        report.push_str("── OUTCOME ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:          {:.2}\n", self.avg_score));
        report.push_str(&format!("  Max Score:          {}\n", self.max_score));
        report.push_str(&format!("  Avg Ticks:          {:.0}\n", self.avg_ticks));
        report.push_str(&format!(
            "  Avg Ticks to Halt:  {:.0}\n\n",
            self.avg_ticks_to_halt
        ));

        report.push_str("── SCORE DISTRIBUTION ───────────────────────────────────────────\n");
        for (score, count) in &self.score_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar = "█".repeat((pct / 2.0) as usize);
            report.push_str(&format!("  {:>3}: {:>5.1}% {}\n", score, pct, bar));
        }

        report
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
