//! Slot engine configuration
//!
//! Loadable from JSON or YAML. Symbols are written by lowercase name:
//!
//! ```yaml
//! initial_credit: 100
//! reel_strips:
//!   left: [seven, bell, cherry, watermelon, grape]
//!   center: [grape, watermelon, cherry, bell, seven]
//!   right: [cherry, grape, seven, watermelon, bell]
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use slot_stage::{ReelPosition, Symbol, WinOutcome};

use crate::credit::DEFAULT_INITIAL_CREDIT;
use crate::error::{SlotError, SlotResult};
use crate::paylines::Payline;
use crate::resolver::FALLBACK_LOSING_SYMBOLS;
use crate::symbols::{ReelStrip, ReelStrips};

// ═══════════════════════════════════════════════════════════════════════════
// FORMAT
// ═══════════════════════════════════════════════════════════════════════════

/// Config file format, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_extension(path: &Path) -> SlotResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            other => Err(SlotError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SLOT CONFIG
// ═══════════════════════════════════════════════════════════════════════════

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Starting balance
    pub initial_credit: i64,
    /// Symbol strips, one per reel
    pub reel_strips: ReelStrips,
    /// Fixed RNG seed (None = seeded from the OS)
    pub seed: Option<u64>,
}

impl SlotConfig {
    /// Classic ten-stop strips carrying every symbol on every reel
    pub fn classic() -> Self {
        use Symbol::*;

        Self::from_strips(ReelStrips::new(
            ReelStrip::new(vec![
                Seven, Bell, Cherry, Watermelon, Bell, Grape, Cherry, Bell, Watermelon, Grape,
            ]),
            ReelStrip::new(vec![
                Bell, Seven, Grape, Bell, Cherry, Watermelon, Bell, Grape, Cherry, Watermelon,
            ]),
            ReelStrip::new(vec![
                Cherry, Bell, Watermelon, Seven, Grape, Bell, Cherry, Watermelon, Bell, Grape,
            ]),
        ))
    }

    pub fn from_strips(reel_strips: ReelStrips) -> Self {
        Self {
            initial_credit: DEFAULT_INITIAL_CREDIT,
            reel_strips,
            seed: None,
        }
    }

    pub fn with_initial_credit(mut self, credit: i64) -> Self {
        self.initial_credit = credit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_strip(mut self, position: ReelPosition, strip: ReelStrip) -> Self {
        self.reel_strips[position] = strip;
        self
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SERIALIZATION
    // ═══════════════════════════════════════════════════════════════════════

    pub fn from_json(json: &str) -> SlotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> SlotResult<Self> {
        Ok(serde_yml::from_str(yaml)?)
    }

    pub fn to_json(&self) -> SlotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> SlotResult<String> {
        Ok(serde_yml::to_string(self)?)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file and log any diagnostics
    pub fn load(path: impl AsRef<Path>) -> SlotResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_extension(path)?;
        let text = std::fs::read_to_string(path)?;

        let config = match format {
            ConfigFormat::Json => Self::from_json(&text)?,
            ConfigFormat::Yaml => Self::from_yaml(&text)?,
        };

        log::info!("[SlotConfig] Loaded {}", path.display());
        config.log_diagnostics();
        Ok(config)
    }

    /// Write to a file, format picked by extension
    pub fn save(&self, path: impl AsRef<Path>) -> SlotResult<()> {
        let path = path.as_ref();
        let text = match ConfigFormat::from_extension(path)? {
            ConfigFormat::Json => self.to_json()?,
            ConfigFormat::Yaml => self.to_yaml()?,
        };
        std::fs::write(path, text)?;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // DIAGNOSTICS
    // ═══════════════════════════════════════════════════════════════════════

    /// Layout problems that still play, but not as a full strip set would
    pub fn diagnostics(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.initial_credit < 1 {
            warnings.push(ConfigWarning::NonPositiveInitialCredit(self.initial_credit));
        }
        warnings.extend(strip_diagnostics(&self.reel_strips));
        warnings
    }

    pub fn log_diagnostics(&self) {
        for warning in self.diagnostics() {
            log::warn!("[SlotConfig] {}", warning);
        }
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Findings for a strip layout on its own
pub fn strip_diagnostics(strips: &ReelStrips) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    for (position, strip) in strips.iter() {
        if strip.is_empty() {
            warnings.push(ConfigWarning::EmptyStrip(position));
            continue;
        }

        for outcome in WinOutcome::ALL {
            if let Some(symbol) = outcome.winning_symbol()
                && !strip.contains(symbol)
            {
                warnings.push(ConfigWarning::MissingWinningSymbol { position, symbol });
            }
        }

        let fallback = FALLBACK_LOSING_SYMBOLS[position];
        if !strip.contains(fallback) {
            warnings.push(ConfigWarning::MissingFallbackSymbol {
                position,
                symbol: fallback,
            });
        }
    }

    let lines = strips.window_for(&FALLBACK_LOSING_SYMBOLS).winning_lines();
    if !lines.is_empty() {
        warnings.push(ConfigWarning::FallbackLinesUp(lines));
    }

    warnings
}

/// Non-fatal configuration finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    NonPositiveInitialCredit(i64),
    EmptyStrip(ReelPosition),
    /// A winning outcome lines up a glyph this reel does not carry
    MissingWinningSymbol {
        position: ReelPosition,
        symbol: Symbol,
    },
    /// The losing fallback stops this reel on a glyph it does not carry
    MissingFallbackSymbol {
        position: ReelPosition,
        symbol: Symbol,
    },
    /// The losing fallback satisfies these paylines on this layout
    FallbackLinesUp(Vec<Payline>),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveInitialCredit(credit) => {
                write!(f, "initial credit {} allows no round", credit)
            }
            Self::EmptyStrip(position) => write!(f, "{} strip is empty", position),
            Self::MissingWinningSymbol { position, symbol } => {
                write!(f, "{} strip has no {} for a winning stop", position, symbol)
            }
            Self::MissingFallbackSymbol { position, symbol } => {
                write!(f, "{} strip has no {} for the losing fallback", position, symbol)
            }
            Self::FallbackLinesUp(lines) => {
                write!(f, "losing fallback satisfies paylines {:?}", lines)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_has_no_diagnostics() {
        let config = SlotConfig::classic();
        assert_eq!(config.initial_credit, 100);
        assert!(config.diagnostics().is_empty(), "{:?}", config.diagnostics());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SlotConfig::classic().with_seed(9).with_initial_credit(5);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"watermelon\""));

        let back = SlotConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let yaml = "initial_credit: 3\n";
        let config = SlotConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.initial_credit, 3);
        assert_eq!(config.reel_strips, SlotConfig::classic().reel_strips);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let json = r#"{"reel_strips":{"left":["plum"],"center":[],"right":[]}}"#;
        assert!(matches!(SlotConfig::from_json(json), Err(SlotError::Json(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ConfigFormat::from_extension(Path::new("slot.toml")).unwrap_err();
        assert!(matches!(err, SlotError::UnsupportedFormat(ext) if ext == "toml"));
        assert!(ConfigFormat::from_extension(Path::new("slot")).is_err());
        assert_eq!(
            ConfigFormat::from_extension(Path::new("a/b.yml")).unwrap(),
            ConfigFormat::Yaml
        );
    }

    #[test]
    fn test_diagnostics_flag_sparse_strips() {
        use Symbol::*;

        let config = SlotConfig::from_strips(ReelStrips::new(
            ReelStrip::new(vec![Seven, Bell, Cherry]),
            ReelStrip::default(),
            ReelStrip::new(vec![Seven, Bell, Cherry, Grape]),
        ))
        .with_initial_credit(0);
        let warnings = config.diagnostics();

        assert!(warnings.contains(&ConfigWarning::NonPositiveInitialCredit(0)));
        assert!(warnings.contains(&ConfigWarning::EmptyStrip(ReelPosition::Center)));
        assert!(warnings.contains(&ConfigWarning::MissingFallbackSymbol {
            position: ReelPosition::Left,
            symbol: Watermelon,
        }));
        assert!(!warnings.iter().any(|w| matches!(
            w,
            ConfigWarning::MissingFallbackSymbol {
                position: ReelPosition::Right,
                ..
            }
        )));
    }

    #[test]
    fn test_fallback_lining_up_is_reported() {
        use Symbol::*;

        // Top row reads Bell / Bell / Bell around the fallback middles
        let config = SlotConfig::from_strips(ReelStrips::new(
            ReelStrip::new(vec![Bell, Watermelon, Seven, Cherry, Grape]),
            ReelStrip::new(vec![Bell, Grape, Seven, Cherry, Watermelon]),
            ReelStrip::new(vec![Bell, Cherry, Grape, Watermelon, Seven, Bell]),
        ));

        let warnings = config.diagnostics();
        assert!(
            warnings.contains(&ConfigWarning::FallbackLinesUp(vec![Payline::Top])),
            "{:?}",
            warnings
        );
    }
}
