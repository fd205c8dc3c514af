//! Session and batch runners

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use slot_core::{RoundController, SlotConfig};

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::report::{SessionReport, SimReport};

/// Mixed into the session seed for the stop-order generator
const STOP_ORDER_SALT: u64 = 0x5EED_0F_5709_0DE5;

/// Play one session until the round cap or game over
pub fn run_session(slot: &SlotConfig, sim: &SimConfig, index: usize) -> SessionReport {
    let seed = sim.session_seed(index);
    let mut ctrl = RoundController::with_seed(slot, seed);
    let mut order_rng = ChaCha8Rng::seed_from_u64(seed ^ STOP_ORDER_SALT);

    let mut rounds_played = 0;
    let mut busted = false;

    while rounds_played < sim.rounds {
        if ctrl.request_round_start().is_empty() {
            busted = true;
            break;
        }
        for position in sim.stop_order.sequence(&mut order_rng) {
            ctrl.request_reel_stop(position);
        }
        rounds_played += 1;
    }

    log::debug!(
        "[SlotSim] Session {} finished: rounds={} balance={} busted={}",
        index,
        rounds_played,
        ctrl.balance(),
        busted
    );

    SessionReport {
        index,
        seed,
        rounds_played,
        final_balance: ctrl.balance(),
        busted,
        stats: ctrl.stats().clone(),
    }
}

/// Play all sessions in parallel and aggregate
pub fn run_batch(slot: &SlotConfig, sim: &SimConfig) -> SimResult<SimReport> {
    sim.validate()?;

    log::info!(
        "[SlotSim] Running {} sessions × {} rounds (seed {}, {:?} stops)",
        sim.sessions,
        sim.rounds,
        sim.seed,
        sim.stop_order
    );

    let sessions: Vec<SessionReport> = (0..sim.sessions)
        .into_par_iter()
        .map(|index| run_session(slot, sim, index))
        .collect();

    let report = SimReport::aggregate(sim, &sessions);
    log::info!(
        "[SlotSim] Done: rounds={} rtp={:.2}% hit_rate={:.2}% busted={}",
        report.stats.rounds_completed,
        report.rtp,
        report.hit_rate,
        report.busted_sessions
    );
    Ok(report)
}
