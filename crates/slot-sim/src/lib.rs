//! # slot-sim: Seeded batch simulator for the round engine
//!
//! Plays many independent sessions of [`RoundController`](slot_core::RoundController)
//! in parallel and aggregates hit rate, RTP and the outcome distribution.
//!
//! Sessions share nothing: each owns a controller seeded from the batch seed
//! and its index, so a batch is reproducible regardless of thread count.

pub mod config;
pub mod error;
pub mod report;
pub mod runner;

pub use config::*;
pub use error::*;
pub use report::*;
pub use runner::*;
