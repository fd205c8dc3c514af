//! Simulation parameters

use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use slot_core::{ReelStrip, SlotConfig};
use slot_stage::ReelPosition;

use crate::error::{SimError, SimResult};

/// Order in which a session stops the reels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StopOrder {
    /// Left, center, right every round
    #[default]
    Fixed,
    /// Fresh random permutation every round
    Shuffled,
}

impl StopOrder {
    /// Stop sequence for the next round
    pub fn sequence<R: Rng + ?Sized>(self, rng: &mut R) -> [ReelPosition; 3] {
        let mut order = ReelPosition::ALL;
        match self {
            Self::Fixed => {}
            Self::Shuffled => order.shuffle(rng),
        }
        order
    }
}

/// Batch parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Round cap per session; a session also ends on game over
    pub rounds: u64,
    /// Independent sessions
    pub sessions: usize,
    /// Batch seed
    pub seed: u64,
    pub stop_order: StopOrder,
}

impl SimConfig {
    pub fn new(rounds: u64, sessions: usize, seed: u64) -> Self {
        Self {
            rounds,
            sessions,
            seed,
            stop_order: StopOrder::Fixed,
        }
    }

    /// Small batch for CI
    pub fn ci() -> Self {
        Self::new(200, 16, 0xC1)
    }

    pub fn with_stop_order(mut self, stop_order: StopOrder) -> Self {
        self.stop_order = stop_order;
        self
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.rounds == 0 {
            return Err(SimError::InvalidConfig("rounds must be at least 1".into()));
        }
        if self.sessions == 0 {
            return Err(SimError::InvalidConfig("sessions must be at least 1".into()));
        }
        Ok(())
    }

    /// Controller seed for one session
    pub fn session_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(1_000, 100, 42)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SLOT CONFIG OVERRIDES
// ═══════════════════════════════════════════════════════════════════════════════

/// Command-line adjustments applied on top of a loaded slot config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotOverrides {
    pub initial_credit: Option<i64>,
    /// Strip text per reel, e.g. "7,B,C,W,G"
    pub left: Option<String>,
    pub center: Option<String>,
    pub right: Option<String>,
}

impl SlotOverrides {
    pub fn is_empty(&self) -> bool {
        self.initial_credit.is_none()
            && self.left.is_none()
            && self.center.is_none()
            && self.right.is_none()
    }

    /// Apply to `slot`, parsing any strip text
    pub fn apply(&self, mut slot: SlotConfig) -> SimResult<SlotConfig> {
        if let Some(credit) = self.initial_credit {
            slot = slot.with_initial_credit(credit);
        }
        for (position, text) in [
            (ReelPosition::Left, &self.left),
            (ReelPosition::Center, &self.center),
            (ReelPosition::Right, &self.right),
        ] {
            if let Some(text) = text {
                let strip: ReelStrip = text.parse()?;
                slot = slot.with_strip(position, strip);
            }
        }
        Ok(slot)
    }
}

/// Load the slot config at `path` (classic strips when absent) and apply overrides
pub fn load_slot_config(path: Option<&Path>, overrides: &SlotOverrides) -> SimResult<SlotConfig> {
    let slot = match path {
        Some(path) => SlotConfig::load(path)?,
        None => SlotConfig::classic(),
    };
    if overrides.is_empty() {
        return Ok(slot);
    }

    let slot = overrides.apply(slot)?;
    slot.log_diagnostics();
    Ok(slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_validate() {
        assert!(SimConfig::default().validate().is_ok());
        assert!(SimConfig::new(0, 1, 0).validate().is_err());
        assert!(matches!(
            SimConfig::new(1, 0, 0).validate(),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_session_seed_wraps() {
        let config = SimConfig::new(1, 2, u64::MAX);
        assert_eq!(config.session_seed(0), u64::MAX);
        assert_eq!(config.session_seed(1), 0);
    }

    #[test]
    fn test_stop_order_sequences() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(StopOrder::Fixed.sequence(&mut rng), ReelPosition::ALL);

        for _ in 0..50 {
            let mut order = StopOrder::Shuffled.sequence(&mut rng);
            order.sort();
            assert_eq!(order, ReelPosition::ALL);
        }
    }

    #[test]
    fn test_overrides_replace_strip_and_credit() {
        let overrides = SlotOverrides {
            initial_credit: Some(5),
            center: Some("7,B,C".into()),
            ..Default::default()
        };
        let slot = load_slot_config(None, &overrides).unwrap();
        let classic = SlotConfig::classic();

        assert_eq!(slot.initial_credit, 5);
        assert_eq!(slot.reel_strips[ReelPosition::Center].to_string(), "7BC");
        assert_eq!(
            slot.reel_strips[ReelPosition::Left],
            classic.reel_strips[ReelPosition::Left]
        );
    }

    #[test]
    fn test_no_overrides_keeps_classic() {
        let slot = load_slot_config(None, &SlotOverrides::default()).unwrap();
        assert_eq!(slot, SlotConfig::classic());
    }

    #[test]
    fn test_bad_strip_text_is_parse_error() {
        let overrides = SlotOverrides {
            right: Some("7,Q".into()),
            ..Default::default()
        };
        assert!(matches!(
            load_slot_config(None, &overrides),
            Err(SimError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_config_file_is_slot_error() {
        let err = load_slot_config(
            Some(Path::new("/nonexistent/slot.yaml")),
            &SlotOverrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Slot(slot_core::SlotError::Io(_))));
    }

    #[test]
    fn test_stop_order_serde() {
        let json = serde_json::to_string(&StopOrder::Shuffled).unwrap();
        assert_eq!(json, "\"shuffled\"");
    }
}
