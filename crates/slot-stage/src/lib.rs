//! # slot-stage: Round vocabulary for the single-line slot
//!
//! Defines the closed enumerations every layer agrees on and the events the
//! round engine emits. Presenters never look inside the engine; they only
//! react to [`SlotEvent`]s and feed back start/stop intents.
//!
//! ## Philosophy
//!
//! Each round passes through the same semantic moments:
//! - Lever accepted → credit bet → round started (with cut-in)
//! - Reels stop one by one, in any order
//! - All reels stopped → payout → possibly game over
//!
//! Every enumeration owns its lookup table (payout, winning glyph, display
//! name), so a mapping is written once and the compiler checks it is total.

pub mod event;
pub mod taxonomy;

pub use event::*;
pub use taxonomy::*;
