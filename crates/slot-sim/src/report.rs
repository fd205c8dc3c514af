//! Simulation reports

use std::path::Path;

use serde::{Deserialize, Serialize};

use slot_core::{Lottery, SessionStats};
use slot_stage::WinOutcome;

use crate::config::{SimConfig, StopOrder};
use crate::error::SimResult;

/// Result of one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub index: usize,
    /// Controller seed
    pub seed: u64,
    pub rounds_played: u64,
    pub final_balance: i64,
    /// Session ran out of credit before the round cap
    pub busted: bool,
    pub stats: SessionStats,
}

/// Observed vs. theoretical share of one outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeFrequency {
    pub outcome: WinOutcome,
    pub count: u64,
    /// Observed share, percent
    pub observed: f64,
    /// Lottery share, percent
    pub expected: f64,
}

/// Aggregated batch result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    pub seed: u64,
    pub sessions: usize,
    pub rounds_per_session: u64,
    pub stop_order: StopOrder,
    /// All sessions merged
    pub stats: SessionStats,
    pub rtp: f64,
    pub expected_rtp: f64,
    pub hit_rate: f64,
    pub busted_sessions: usize,
    pub mean_final_balance: f64,
    pub frequencies: Vec<OutcomeFrequency>,
}

impl SimReport {
    /// Merge session reports (in index order) into a batch report
    pub fn aggregate(config: &SimConfig, sessions: &[SessionReport]) -> Self {
        let mut stats = SessionStats::default();
        for session in sessions {
            stats.merge(&session.stats);
        }

        let completed = stats.rounds_completed;
        let frequencies = WinOutcome::ALL
            .iter()
            .map(|&outcome| {
                let count = stats.outcomes.get(outcome);
                OutcomeFrequency {
                    outcome,
                    count,
                    observed: percent(count, completed),
                    expected: Lottery::probability(outcome) * 100.0,
                }
            })
            .collect();

        let mean_final_balance = if sessions.is_empty() {
            0.0
        } else {
            sessions.iter().map(|s| s.final_balance as f64).sum::<f64>() / sessions.len() as f64
        };

        Self {
            seed: config.seed,
            sessions: sessions.len(),
            rounds_per_session: config.rounds,
            stop_order: config.stop_order,
            rtp: stats.rtp(),
            expected_rtp: Lottery::expected_return() * 100.0,
            hit_rate: stats.hit_rate(),
            busted_sessions: sessions.iter().filter(|s| s.busted).count(),
            mean_final_balance,
            frequencies,
            stats,
        }
    }

    pub fn frequency(&self, outcome: WinOutcome) -> Option<&OutcomeFrequency> {
        self.frequencies.iter().find(|f| f.outcome == outcome)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the pretty JSON report to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> SimResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("[SlotSim] Report written to {}", path.display());
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole > 0 {
        (part as f64 / whole as f64) * 100.0
    } else {
        0.0
    }
}
