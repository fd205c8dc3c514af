//! Lottery: Two-stage weighted draw
//!
//! Stage one maps a uniform `u16` to a [`WinOutcome`]. Stage two maps a
//! uniform roll in `[0, 1)` to a cosmetic [`CutInOutcome`] conditioned on the
//! first result. Both mappings are pure; randomness is injected by the caller.

use rand::Rng;

use slot_stage::{CutInOutcome, WinOutcome};

/// Inclusive upper bound of the Bonus band (5.00%)
pub const BONUS_MAX: u16 = 3276;
/// Inclusive upper bound of the Bell band (45.00%)
pub const BELL_MAX: u16 = 32767;
/// Inclusive upper bound of the Cherry band (30.00%)
pub const CHERRY_MAX: u16 = 52428;

pub const BELL_MIN: u16 = BONUS_MAX + 1;
pub const CHERRY_MIN: u16 = BELL_MAX + 1;
/// Everything from here to `u16::MAX` loses (20.00%)
pub const NONE_MIN: u16 = CHERRY_MAX + 1;

/// Number of distinct draw values
pub const DRAW_SPACE: u32 = u16::MAX as u32 + 1;

/// Cut-in selection for one win outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutInRule {
    /// No roll, always this cut-in
    Fixed(CutInOutcome),
    /// Roll below `threshold` gives `below`, otherwise `at_or_above`
    Threshold {
        threshold: f64,
        below: CutInOutcome,
        at_or_above: CutInOutcome,
    },
}

/// Stateless draw tables
#[derive(Debug, Clone, Copy, Default)]
pub struct Lottery;

impl Lottery {
    pub fn new() -> Self {
        Self
    }

    // ═══════════════════════════════════════════════════════════════════════
    // WIN OUTCOME
    // ═══════════════════════════════════════════════════════════════════════

    /// Map a raw draw to its outcome band
    pub fn classify_draw(r: u16) -> WinOutcome {
        match r {
            0..=BONUS_MAX => WinOutcome::Bonus,
            BELL_MIN..=BELL_MAX => WinOutcome::Bell,
            CHERRY_MIN..=CHERRY_MAX => WinOutcome::Cherry,
            NONE_MIN..=u16::MAX => WinOutcome::None,
        }
    }

    /// Inclusive draw range for an outcome
    pub fn draw_range(outcome: WinOutcome) -> (u16, u16) {
        match outcome {
            WinOutcome::Bonus => (0, BONUS_MAX),
            WinOutcome::Bell => (BELL_MIN, BELL_MAX),
            WinOutcome::Cherry => (CHERRY_MIN, CHERRY_MAX),
            WinOutcome::None => (NONE_MIN, u16::MAX),
        }
    }

    /// How many of the 65536 draws land on `outcome`
    pub fn draw_count(outcome: WinOutcome) -> u32 {
        let (lo, hi) = Self::draw_range(outcome);
        u32::from(hi) - u32::from(lo) + 1
    }

    pub fn probability(outcome: WinOutcome) -> f64 {
        f64::from(Self::draw_count(outcome)) / f64::from(DRAW_SPACE)
    }

    /// Expected credits returned per credit bet
    pub fn expected_return() -> f64 {
        WinOutcome::ALL
            .iter()
            .map(|&o| Self::probability(o) * o.payout() as f64)
            .sum()
    }

    pub fn draw_win_outcome<R: Rng + ?Sized>(&self, rng: &mut R) -> WinOutcome {
        Self::classify_draw(rng.random::<u16>())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // CUT-IN
    // ═══════════════════════════════════════════════════════════════════════

    pub fn cut_in_rule(outcome: WinOutcome) -> CutInRule {
        match outcome {
            WinOutcome::Bonus => CutInRule::Threshold {
                threshold: 0.8,
                below: CutInOutcome::Hot,
                at_or_above: CutInOutcome::Normal,
            },
            WinOutcome::None => CutInRule::Threshold {
                threshold: 0.1,
                below: CutInOutcome::Normal,
                at_or_above: CutInOutcome::None,
            },
            WinOutcome::Bell | WinOutcome::Cherry => CutInRule::Fixed(CutInOutcome::None),
        }
    }

    /// Map a roll in `[0, 1)` to the cut-in for `outcome`
    pub fn classify_cut_in(outcome: WinOutcome, roll: f64) -> CutInOutcome {
        match Self::cut_in_rule(outcome) {
            CutInRule::Fixed(cut_in) => cut_in,
            CutInRule::Threshold {
                threshold,
                below,
                at_or_above,
            } => {
                if roll < threshold {
                    below
                } else {
                    at_or_above
                }
            }
        }
    }

    /// Second-stage draw. Fixed rules consume no randomness.
    pub fn draw_cut_in<R: Rng + ?Sized>(&self, outcome: WinOutcome, rng: &mut R) -> CutInOutcome {
        match Self::cut_in_rule(outcome) {
            CutInRule::Fixed(cut_in) => cut_in,
            CutInRule::Threshold { .. } => Self::classify_cut_in(outcome, rng.random::<f64>()),
        }
    }
}
