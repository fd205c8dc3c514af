//! Session statistics collected by the round controller

use serde::{Deserialize, Serialize};

use slot_stage::{CutInOutcome, WinOutcome};

/// Per-outcome round counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub none: u64,
    pub cherry: u64,
    pub bell: u64,
    pub bonus: u64,
}

impl OutcomeCounts {
    pub fn get(&self, outcome: WinOutcome) -> u64 {
        match outcome {
            WinOutcome::None => self.none,
            WinOutcome::Cherry => self.cherry,
            WinOutcome::Bell => self.bell,
            WinOutcome::Bonus => self.bonus,
        }
    }

    pub fn record(&mut self, outcome: WinOutcome) {
        let slot = match outcome {
            WinOutcome::None => &mut self.none,
            WinOutcome::Cherry => &mut self.cherry,
            WinOutcome::Bell => &mut self.bell,
            WinOutcome::Bonus => &mut self.bonus,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u64 {
        WinOutcome::ALL.iter().map(|&o| self.get(o)).sum()
    }

    /// Credits these rounds paid out according to the payout table
    pub fn payout_total(&self) -> i64 {
        WinOutcome::ALL
            .iter()
            .map(|&o| self.get(o) as i64 * o.payout())
            .sum()
    }

    pub fn merge(&mut self, other: &Self) {
        self.none += other.none;
        self.cherry += other.cherry;
        self.bell += other.bell;
        self.bonus += other.bonus;
    }
}

/// Per-cut-in counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutInCounts {
    pub none: u64,
    pub normal: u64,
    pub hot: u64,
}

impl CutInCounts {
    pub fn get(&self, cut_in: CutInOutcome) -> u64 {
        match cut_in {
            CutInOutcome::None => self.none,
            CutInOutcome::Normal => self.normal,
            CutInOutcome::Hot => self.hot,
        }
    }

    pub fn record(&mut self, cut_in: CutInOutcome) {
        let slot = match cut_in {
            CutInOutcome::None => &mut self.none,
            CutInOutcome::Normal => &mut self.normal,
            CutInOutcome::Hot => &mut self.hot,
        };
        *slot += 1;
    }

    pub fn merge(&mut self, other: &Self) {
        self.none += other.none;
        self.normal += other.normal;
        self.hot += other.hot;
    }
}

/// Session statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds_started: u64,
    pub rounds_completed: u64,
    pub total_bet: i64,
    pub total_payout: i64,
    pub outcomes: OutcomeCounts,
    pub cut_ins: CutInCounts,
    /// Losing rounds that used the fixed fallback triple
    pub losing_fallbacks: u64,
    pub game_overs: u64,
}

impl SessionStats {
    /// Calculate RTP
    pub fn rtp(&self) -> f64 {
        if self.total_bet > 0 {
            (self.total_payout as f64 / self.total_bet as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Calculate hit rate over completed rounds
    pub fn hit_rate(&self) -> f64 {
        if self.rounds_completed > 0 {
            let wins = self.rounds_completed - self.outcomes.none;
            (wins as f64 / self.rounds_completed as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Payout minus bet
    pub fn net(&self) -> i64 {
        self.total_payout - self.total_bet
    }

    pub fn merge(&mut self, other: &Self) {
        self.rounds_started += other.rounds_started;
        self.rounds_completed += other.rounds_completed;
        self.total_bet += other.total_bet;
        self.total_payout += other.total_payout;
        self.outcomes.merge(&other.outcomes);
        self.cut_ins.merge(&other.cut_ins);
        self.losing_fallbacks += other.losing_fallbacks;
        self.game_overs += other.game_overs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_stats() {
        let stats = SessionStats::default();
        assert_eq!(stats.rtp(), 0.0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_rtp_and_hit_rate() {
        let mut stats = SessionStats {
            rounds_started: 4,
            rounds_completed: 4,
            total_bet: 4,
            ..Default::default()
        };
        for outcome in [WinOutcome::None, WinOutcome::Cherry, WinOutcome::Bell, WinOutcome::None] {
            stats.outcomes.record(outcome);
        }
        stats.total_payout = stats.outcomes.payout_total();

        assert_eq!(stats.total_payout, 4);
        assert_relative_eq!(stats.rtp(), 100.0);
        assert_relative_eq!(stats.hit_rate(), 50.0);
        assert_eq!(stats.net(), 0);
    }

    #[test]
    fn test_merge() {
        let mut a = SessionStats::default();
        a.rounds_completed = 2;
        a.outcomes.record(WinOutcome::Bonus);
        a.cut_ins.record(CutInOutcome::Hot);

        let mut b = a.clone();
        b.game_overs = 1;
        a.merge(&b);

        assert_eq!(a.rounds_completed, 4);
        assert_eq!(a.outcomes.bonus, 2);
        assert_eq!(a.cut_ins.get(CutInOutcome::Hot), 2);
        assert_eq!(a.game_overs, 1);
    }
}
