//! ReelResolver: Decides the three stop symbols for a round

use rand::Rng;

use slot_stage::{Symbol, WinOutcome};

use crate::symbols::{ReelStrips, ReelTriple};

/// Losing-combination search attempts before the fallback is used
pub const MAX_LOSING_ATTEMPTS: u32 = 10;

/// Returned when every attempt accidentally satisfied a payline.
/// Not checked against the configured strips.
pub const FALLBACK_LOSING_SYMBOLS: ReelTriple<Symbol> =
    ReelTriple::new(Symbol::Watermelon, Symbol::Grape, Symbol::Bell);

/// Result of one resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Middle-row symbol per reel
    pub symbols: ReelTriple<Symbol>,
    /// Search attempts used (0 for winning outcomes)
    pub attempts: u32,
    /// Losing search exhausted, fixed triple returned
    pub fallback: bool,
}

/// Maps a win outcome to stop symbols over the configured strips
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReelResolver {
    strips: ReelStrips,
}

impl ReelResolver {
    pub fn new(strips: ReelStrips) -> Self {
        Self { strips }
    }

    pub fn strips(&self) -> &ReelStrips {
        &self.strips
    }

    pub fn set_strips(&mut self, strips: ReelStrips) {
        self.strips = strips;
    }

    /// Stop symbols for `outcome`
    pub fn decide_stop_symbols<R: Rng + ?Sized>(
        &self,
        outcome: WinOutcome,
        rng: &mut R,
    ) -> ReelTriple<Symbol> {
        self.resolve(outcome, rng).symbols
    }

    /// Stop symbols plus search bookkeeping
    ///
    /// Winning outcomes line up their symbol on all three reels regardless of
    /// strip layout. A losing outcome draws a middle symbol per reel and
    /// keeps the first draw whose window satisfies no payline.
    pub fn resolve<R: Rng + ?Sized>(&self, outcome: WinOutcome, rng: &mut R) -> Resolution {
        if let Some(symbol) = outcome.winning_symbol() {
            return Resolution {
                symbols: ReelTriple::splat(symbol),
                attempts: 0,
                fallback: false,
            };
        }

        for attempt in 1..=MAX_LOSING_ATTEMPTS {
            let middles = self.strips.draw_middles(rng);
            if !self.strips.window_for(&middles).has_win() {
                return Resolution {
                    symbols: middles,
                    attempts: attempt,
                    fallback: false,
                };
            }
        }

        log::warn!(
            "[ReelResolver] No losing combination after {} attempts, using fallback {:?}",
            MAX_LOSING_ATTEMPTS,
            FALLBACK_LOSING_SYMBOLS.to_array()
        );

        Resolution {
            symbols: FALLBACK_LOSING_SYMBOLS,
            attempts: MAX_LOSING_ATTEMPTS,
            fallback: true,
        }
    }
}
