//! Round Taxonomy: Enums for reel glyphs, outcomes and reel positions
//!
//! Each enum carries its own lookup table. Matches are exhaustive with no
//! wildcard arm, so adding a variant fails to compile until every table
//! covers it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a taxonomy name fails
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTaxonomyError {
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Unknown reel position: {0}")]
    UnknownPosition(String),

    #[error("Unknown win outcome: {0}")]
    UnknownOutcome(String),
}

// ═══════════════════════════════════════════════════════════════════════════
// SYMBOL
// ═══════════════════════════════════════════════════════════════════════════

/// Reel glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Symbol {
    /// Bonus glyph
    Seven = 0,
    Bell = 1,
    Cherry = 2,
    /// Filler, only ever lands on a losing round
    Watermelon = 3,
    /// Filler, only ever lands on a losing round
    Grape = 4,
}

impl Symbol {
    /// All symbols in declaration order
    pub const ALL: [Symbol; 5] = [
        Symbol::Seven,
        Symbol::Bell,
        Symbol::Cherry,
        Symbol::Watermelon,
        Symbol::Grape,
    ];

    /// Lowercase name (matches the serde representation)
    pub fn name(self) -> &'static str {
        match self {
            Self::Seven => "seven",
            Self::Bell => "bell",
            Self::Cherry => "cherry",
            Self::Watermelon => "watermelon",
            Self::Grape => "grape",
        }
    }

    /// Single-character glyph for compact strip notation
    pub fn glyph(self) -> char {
        match self {
            Self::Seven => '7',
            Self::Bell => 'B',
            Self::Cherry => 'C',
            Self::Watermelon => 'W',
            Self::Grape => 'G',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbol {
    type Err = ParseTaxonomyError;

    /// Accepts the lowercase name or the single glyph (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "seven" | "7" => Ok(Self::Seven),
            "bell" | "b" => Ok(Self::Bell),
            "cherry" | "c" => Ok(Self::Cherry),
            "watermelon" | "w" => Ok(Self::Watermelon),
            "grape" | "g" => Ok(Self::Grape),
            _ => Err(ParseTaxonomyError::UnknownSymbol(s.to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// WIN OUTCOME
// ═══════════════════════════════════════════════════════════════════════════

/// Result of the round lottery
///
/// Payout table (credits):
/// - None: 0
/// - Cherry: 1
/// - Bell: 3
/// - Bonus: 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinOutcome {
    None,
    Cherry,
    Bell,
    Bonus,
}

impl WinOutcome {
    /// All outcomes in declaration order
    pub const ALL: [WinOutcome; 4] = [
        WinOutcome::None,
        WinOutcome::Cherry,
        WinOutcome::Bell,
        WinOutcome::Bonus,
    ];

    /// Credits paid when the round settles
    pub fn payout(self) -> i64 {
        match self {
            Self::None => 0,
            Self::Cherry => 1,
            Self::Bell => 3,
            Self::Bonus => 100,
        }
    }

    /// Glyph lined up on all three reels, `None` for a losing round
    pub fn winning_symbol(self) -> Option<Symbol> {
        match self {
            Self::None => None,
            Self::Cherry => Some(Symbol::Cherry),
            Self::Bell => Some(Symbol::Bell),
            Self::Bonus => Some(Symbol::Seven),
        }
    }

    /// Check if this outcome pays anything
    pub fn is_win(self) -> bool {
        self.payout() > 0
    }

    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Cherry => "cherry",
            Self::Bell => "bell",
            Self::Bonus => "bonus",
        }
    }
}

impl fmt::Display for WinOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WinOutcome {
    type Err = ParseTaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "lose" => Ok(Self::None),
            "cherry" => Ok(Self::Cherry),
            "bell" => Ok(Self::Bell),
            "bonus" => Ok(Self::Bonus),
            _ => Err(ParseTaxonomyError::UnknownOutcome(s.to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CUT-IN
// ═══════════════════════════════════════════════════════════════════════════

/// Cosmetic pre-result cue. Never affects credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutInOutcome {
    /// No cut-in
    None,
    /// Regular cut-in
    Normal,
    /// Hot cut-in (strong bonus tease)
    Hot,
}

impl CutInOutcome {
    pub const ALL: [CutInOutcome; 3] = [
        CutInOutcome::None,
        CutInOutcome::Normal,
        CutInOutcome::Hot,
    ];

    /// Whether the presenter plays anything
    pub fn is_shown(self) -> bool {
        match self {
            Self::None => false,
            Self::Normal | Self::Hot => true,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Normal => "normal",
            Self::Hot => "hot",
        }
    }
}

impl fmt::Display for CutInOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REEL POSITION
// ═══════════════════════════════════════════════════════════════════════════

/// One of the three physical reels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReelPosition {
    Left,
    Center,
    Right,
}

impl ReelPosition {
    /// Left to right
    pub const ALL: [ReelPosition; 3] = [
        ReelPosition::Left,
        ReelPosition::Center,
        ReelPosition::Right,
    ];

    /// 0-based reel index, left to right
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Right => 2,
        }
    }

    /// Reel for a 0-based index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Bit in a stopped-reel mask
    pub fn bit(self) -> u8 {
        1 << self.index()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for ReelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReelPosition {
    type Err = ParseTaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "center" | "centre" | "c" => Ok(Self::Center),
            "right" | "r" => Ok(Self::Right),
            _ => Err(ParseTaxonomyError::UnknownPosition(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_table() {
        assert_eq!(WinOutcome::None.payout(), 0);
        assert_eq!(WinOutcome::Cherry.payout(), 1);
        assert_eq!(WinOutcome::Bell.payout(), 3);
        assert_eq!(WinOutcome::Bonus.payout(), 100);
        assert!(!WinOutcome::None.is_win());
        assert!(WinOutcome::ALL[1..].iter().all(|o| o.is_win()));
    }

    #[test]
    fn test_winning_symbols() {
        assert_eq!(WinOutcome::Bonus.winning_symbol(), Some(Symbol::Seven));
        assert_eq!(WinOutcome::Bell.winning_symbol(), Some(Symbol::Bell));
        assert_eq!(WinOutcome::Cherry.winning_symbol(), Some(Symbol::Cherry));
        assert_eq!(WinOutcome::None.winning_symbol(), None);
    }

    #[test]
    fn test_symbol_parse() {
        assert_eq!("Seven".parse::<Symbol>(), Ok(Symbol::Seven));
        assert_eq!("7".parse::<Symbol>(), Ok(Symbol::Seven));
        assert_eq!(" g ".parse::<Symbol>(), Ok(Symbol::Grape));
        assert_eq!(
            "plum".parse::<Symbol>(),
            Err(ParseTaxonomyError::UnknownSymbol("plum".to_string()))
        );

        for symbol in Symbol::ALL {
            assert_eq!(symbol.name().parse::<Symbol>(), Ok(symbol));
            assert_eq!(symbol.glyph().to_string().parse::<Symbol>(), Ok(symbol));
        }
    }

    #[test]
    fn test_reel_position_index_roundtrip() {
        for position in ReelPosition::ALL {
            assert_eq!(ReelPosition::from_index(position.index()), Some(position));
        }
        assert_eq!(ReelPosition::from_index(3), None);

        let mask = ReelPosition::ALL.iter().fold(0u8, |m, p| m | p.bit());
        assert_eq!(mask, 0b111);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Symbol::Watermelon).unwrap();
        assert_eq!(json, "\"watermelon\"");

        let outcome: WinOutcome = serde_json::from_str("\"bonus\"").unwrap();
        assert_eq!(outcome, WinOutcome::Bonus);
    }

    #[test]
    fn test_cut_in_visibility() {
        assert!(!CutInOutcome::None.is_shown());
        assert!(CutInOutcome::Normal.is_shown());
        assert!(CutInOutcome::Hot.is_shown());
    }
}
