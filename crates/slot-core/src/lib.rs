//! # slot-core: Round engine for a single-line slot
//!
//! Decides, for each play, whether the player wins, which symbols the reels
//! show, how much credit changes hands and which cut-in is presented.
//! Rendering, animation and input handling live outside; they only see
//! [`SlotEvent`](slot_stage::SlotEvent)s and send start/stop intents.
//!
//! ## Architecture
//!
//! ```text
//! RoundController
//!     │
//!     ├── CreditLedger (balance, bet, payout, game over)
//!     ├── Lottery (win outcome draw → cut-in draw)
//!     └── ReelResolver (stop symbols over ReelStrips)
//!           │
//!           v
//!     Vec<SlotEvent> + EventSink subscribers
//! ```
//!
//! Randomness is injected: every controller owns its generator, seeded from
//! the config, a caller-supplied seed, or the OS.

pub mod config;
pub mod credit;
pub mod engine;
pub mod error;
pub mod lottery;
pub mod paylines;
pub mod resolver;
pub mod stats;
pub mod symbols;

pub use config::*;
pub use credit::*;
pub use engine::*;
pub use error::*;
pub use lottery::*;
pub use paylines::*;
pub use resolver::*;
pub use stats::*;
pub use symbols::*;
