//! RoundController: The round state machine
//!
//! ```text
//!            request_round_start            request_reel_stop × 3
//!   Idle ─────────────────────────▶ InProgress ─────────────────────▶ Idle
//!    ▲   (not in progress, credit ≥ 1)   │ ▲  (each reel once, any order)
//!    │                                   └─┘
//!    └── every guard violation is a silent no-op
//! ```
//!
//! Every transition returns the events it emitted and also hands them to the
//! subscribed [`EventSink`]s, in emission order.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use slot_stage::{CutInOutcome, EventSink, ReelPosition, SlotEvent, Symbol, WinOutcome};

use crate::config::{SlotConfig, strip_diagnostics};
use crate::credit::CreditLedger;
use crate::lottery::Lottery;
use crate::resolver::ReelResolver;
use crate::stats::SessionStats;
use crate::symbols::{ReelStrip, ReelStrips, ReelTriple};

// ═══════════════════════════════════════════════════════════════════════════
// ROUND STATE
// ═══════════════════════════════════════════════════════════════════════════

/// Set of reels that already received a stop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoppedReels(u8);

impl StoppedReels {
    const ALL_BITS: u8 = 0b111;

    pub fn empty() -> Self {
        Self(0)
    }

    /// Mark a reel stopped. Returns false if it already was.
    pub fn insert(&mut self, position: ReelPosition) -> bool {
        let bit = position.bit();
        if self.0 & bit != 0 {
            return false;
        }
        self.0 |= bit;
        true
    }

    pub fn contains(&self, position: ReelPosition) -> bool {
        self.0 & position.bit() != 0
    }

    pub fn is_complete(&self) -> bool {
        self.0 == Self::ALL_BITS
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Data held while a round is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveRound {
    outcome: WinOutcome,
    cut_in: CutInOutcome,
    symbols: ReelTriple<Symbol>,
    stopped: StoppedReels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundState {
    Idle,
    InProgress(ActiveRound),
}

/// Externally observable controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// Ready to accept a start
    Idle,
    /// Idle, but the balance cannot cover a bet
    AwaitingCredit,
    /// Reels spinning, waiting for stops
    InProgress,
}

// ═══════════════════════════════════════════════════════════════════════════
// ROUND CONTROLLER
// ═══════════════════════════════════════════════════════════════════════════

/// Sequences bet → draw → resolve → per-reel stops → settlement
///
/// Owns one ledger, one lottery and one resolver. Calls must be serialized
/// by the embedder.
pub struct RoundController<R: Rng = ChaCha8Rng> {
    /// Player balance
    ledger: CreditLedger,
    /// Outcome and cut-in tables
    lottery: Lottery,
    /// Stop symbol selection
    resolver: ReelResolver,
    /// Injected random source
    rng: R,
    /// Current round
    state: RoundState,
    /// Counters since construction
    stats: SessionStats,
    /// Event subscribers
    sinks: Vec<Box<dyn EventSink>>,
}

impl RoundController<ChaCha8Rng> {
    /// Create from config, seeded from `config.seed` or the OS
    pub fn new(config: &SlotConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    /// Create with a fixed seed (deterministic)
    pub fn with_seed(config: &SlotConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RoundController<R> {
    /// Create with a caller-supplied generator
    pub fn with_rng(config: &SlotConfig, rng: R) -> Self {
        Self {
            ledger: CreditLedger::with_balance(config.initial_credit),
            lottery: Lottery::new(),
            resolver: ReelResolver::new(config.reel_strips.clone()),
            rng,
            state: RoundState::Idle,
            stats: SessionStats::default(),
            sinks: Vec::new(),
        }
    }

    /// Register an event subscriber
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // INBOUND
    // ═══════════════════════════════════════════════════════════════════════

    /// Replace the reel strips. Ignored while a round is in progress.
    pub fn configure_reel_strips(
        &mut self,
        left: ReelStrip,
        center: ReelStrip,
        right: ReelStrip,
    ) -> bool {
        if self.is_in_progress() {
            log::warn!("[RoundController] Strip change ignored: round in progress");
            return false;
        }

        let strips = ReelStrips::new(left, center, right);
        for warning in strip_diagnostics(&strips) {
            log::warn!("[RoundController] {}", warning);
        }
        self.resolver.set_strips(strips);
        true
    }

    /// Lever pull
    pub fn request_round_start(&mut self) -> Vec<SlotEvent> {
        if self.is_in_progress() {
            log::trace!("[RoundController] Start ignored: round in progress");
            return Vec::new();
        }
        if !self.ledger.can_bet() {
            log::trace!(
                "[RoundController] Start ignored: balance {}",
                self.ledger.balance()
            );
            return Vec::new();
        }

        let mut events = Vec::with_capacity(3);
        self.emit(&mut events, SlotEvent::HapticCue);

        let balance = self.ledger.bet();
        self.emit(&mut events, SlotEvent::CreditChanged { balance });

        let outcome = self.lottery.draw_win_outcome(&mut self.rng);
        let cut_in = self.lottery.draw_cut_in(outcome, &mut self.rng);
        let resolution = self.resolver.resolve(outcome, &mut self.rng);

        self.stats.rounds_started += 1;
        self.stats.total_bet += crate::credit::BET_AMOUNT;
        self.stats.cut_ins.record(cut_in);
        if resolution.fallback {
            self.stats.losing_fallbacks += 1;
        }

        log::debug!(
            "[RoundController] Round {} started: outcome={} cut_in={} symbols={:?}",
            self.stats.rounds_started,
            outcome,
            cut_in,
            resolution.symbols.to_array()
        );

        self.state = RoundState::InProgress(ActiveRound {
            outcome,
            cut_in,
            symbols: resolution.symbols,
            stopped: StoppedReels::empty(),
        });

        self.emit(&mut events, SlotEvent::RoundStarted { cut_in });
        events
    }

    /// Stop button for one reel
    pub fn request_reel_stop(&mut self, position: ReelPosition) -> Vec<SlotEvent> {
        let RoundState::InProgress(round) = &mut self.state else {
            log::trace!("[RoundController] Stop {} ignored: no round", position);
            return Vec::new();
        };
        if !round.stopped.insert(position) {
            log::trace!("[RoundController] Stop {} ignored: already stopped", position);
            return Vec::new();
        }

        let symbol = round.symbols[position];
        let outcome = round.outcome;
        let complete = round.stopped.is_complete();

        let mut events = Vec::with_capacity(if complete { 4 } else { 1 });
        self.emit(&mut events, SlotEvent::ReelStopped { position, symbol });

        if complete {
            self.settle(outcome, &mut events);
        }
        events
    }

    fn settle(&mut self, outcome: WinOutcome, events: &mut Vec<SlotEvent>) {
        let paid = self.ledger.payout(outcome);
        if paid != 0 {
            let balance = self.ledger.balance();
            self.emit(events, SlotEvent::CreditChanged { balance });
        }

        self.stats.rounds_completed += 1;
        self.stats.total_payout += paid;
        self.stats.outcomes.record(outcome);

        self.emit(events, SlotEvent::AllReelsStopped { outcome });
        self.state = RoundState::Idle;

        log::debug!(
            "[RoundController] Round settled: outcome={} paid={} balance={}",
            outcome,
            paid,
            self.ledger.balance()
        );

        if self.ledger.is_game_over() {
            self.stats.game_overs += 1;
            log::info!(
                "[RoundController] Game over after {} rounds",
                self.stats.rounds_completed
            );
            self.emit(events, SlotEvent::GameOver);
        }
    }

    fn emit(&mut self, events: &mut Vec<SlotEvent>, event: SlotEvent) {
        for sink in &mut self.sinks {
            sink.on_event(&event);
        }
        events.push(event);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // OBSERVERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn balance(&self) -> i64 {
        self.ledger.balance()
    }

    pub fn phase(&self) -> RoundPhase {
        match self.state {
            RoundState::InProgress(_) => RoundPhase::InProgress,
            RoundState::Idle if self.ledger.can_bet() => RoundPhase::Idle,
            RoundState::Idle => RoundPhase::AwaitingCredit,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self.state, RoundState::InProgress(_))
    }

    /// Reels stopped in the current round (empty when idle)
    pub fn stopped_reels(&self) -> StoppedReels {
        match &self.state {
            RoundState::InProgress(round) => round.stopped,
            RoundState::Idle => StoppedReels::empty(),
        }
    }

    /// Cut-in of the round in flight
    pub fn current_cut_in(&self) -> Option<CutInOutcome> {
        match &self.state {
            RoundState::InProgress(round) => Some(round.cut_in),
            RoundState::Idle => None,
        }
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn strips(&self) -> &ReelStrips {
        self.resolver.strips()
    }
}
