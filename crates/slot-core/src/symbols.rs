//! Reel strips and per-reel containers

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use slot_stage::{ParseTaxonomyError, ReelPosition, Symbol};

use crate::paylines::SymbolWindow;

/// Symbol reported for any lookup on an empty strip
pub const EMPTY_STRIP_SYMBOL: Symbol = Symbol::Watermelon;

// ═══════════════════════════════════════════════════════════════════════════
// REEL TRIPLE
// ═══════════════════════════════════════════════════════════════════════════

/// One value per reel, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ReelTriple<T> {
    pub left: T,
    pub center: T,
    pub right: T,
}

impl<T> ReelTriple<T> {
    pub const fn new(left: T, center: T, right: T) -> Self {
        Self {
            left,
            center,
            right,
        }
    }

    /// Same value on every reel
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value.clone(), value)
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ReelTriple<U> {
        ReelTriple::new(f(self.left), f(self.center), f(self.right))
    }

    /// Iterate left to right
    pub fn iter(&self) -> impl Iterator<Item = (ReelPosition, &T)> {
        ReelPosition::ALL.into_iter().map(move |p| (p, &self[p]))
    }

    pub fn to_array(self) -> [T; 3] {
        [self.left, self.center, self.right]
    }
}

impl<T> Index<ReelPosition> for ReelTriple<T> {
    type Output = T;

    fn index(&self, position: ReelPosition) -> &T {
        match position {
            ReelPosition::Left => &self.left,
            ReelPosition::Center => &self.center,
            ReelPosition::Right => &self.right,
        }
    }
}

impl<T> IndexMut<ReelPosition> for ReelTriple<T> {
    fn index_mut(&mut self, position: ReelPosition) -> &mut T {
        match position {
            ReelPosition::Left => &mut self.left,
            ReelPosition::Center => &mut self.center,
            ReelPosition::Right => &mut self.right,
        }
    }
}

impl<T> From<[T; 3]> for ReelTriple<T> {
    fn from([left, center, right]: [T; 3]) -> Self {
        Self::new(left, center, right)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REEL STRIP
// ═══════════════════════════════════════════════════════════════════════════

/// Cyclic sequence of symbols printed on one reel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReelStrip {
    symbols: Vec<Symbol>,
}

impl ReelStrip {
    /// Create a new reel strip
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Get total strip length
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Symbol `offset` steps away from `base`, wrapping in both directions
    pub fn symbol_at_offset(&self, base: usize, offset: isize) -> Symbol {
        if self.symbols.is_empty() {
            return EMPTY_STRIP_SYMBOL;
        }
        let len = self.symbols.len() as isize;
        let index = (base as isize + offset).rem_euclid(len) as usize;
        self.symbols[index]
    }

    /// Index of the first occurrence of `symbol`, 0 when absent
    pub fn index_of(&self, symbol: Symbol) -> usize {
        self.symbols.iter().position(|&s| s == symbol).unwrap_or(0)
    }

    /// Draw a uniformly random entry
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol {
        if self.symbols.is_empty() {
            return EMPTY_STRIP_SYMBOL;
        }
        self.symbols[rng.random_range(0..self.symbols.len())]
    }

    /// Forward distance from `from` to the nearest occurrence of `symbol`
    ///
    /// Counts 1..=len steps. An occurrence at `from` itself is a full turn
    /// away, so a spinning reel always moves before it lands.
    pub fn next_occurrence(&self, symbol: Symbol, from: usize) -> Option<usize> {
        let len = self.symbols.len();
        (1..=len).find(|step| self.symbols[(from + step) % len] == symbol)
    }
}

impl From<Vec<Symbol>> for ReelStrip {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self::new(symbols)
    }
}

impl fmt::Display for ReelStrip {
    /// Compact glyph notation, e.g. `7BCWG`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol.glyph())?;
        }
        Ok(())
    }
}

impl FromStr for ReelStrip {
    type Err = ParseTaxonomyError;

    /// Symbols separated by commas or whitespace, names or glyphs
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Symbol>, _>>()?;
        Ok(Self::new(symbols))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REEL STRIPS
// ═══════════════════════════════════════════════════════════════════════════

/// Strip configuration for all three reels
pub type ReelStrips = ReelTriple<ReelStrip>;

impl ReelStrips {
    /// Draw one middle-row symbol per reel
    pub fn draw_middles<R: Rng + ?Sized>(&self, rng: &mut R) -> ReelTriple<Symbol> {
        ReelTriple::new(
            self.left.draw(rng),
            self.center.draw(rng),
            self.right.draw(rng),
        )
    }

    /// Visible 3×3 window when each reel shows the given middle symbol
    ///
    /// Each column is centred on the first occurrence of its middle symbol.
    /// The middle row always carries the given symbols, even when a strip
    /// does not contain them.
    pub fn window_for(&self, middles: &ReelTriple<Symbol>) -> SymbolWindow {
        let column = |strip: &ReelStrip, middle: Symbol| {
            let base = strip.index_of(middle);
            [
                strip.symbol_at_offset(base, -1),
                middle,
                strip.symbol_at_offset(base, 1),
            ]
        };

        SymbolWindow::new([
            column(&self.left, middles.left),
            column(&self.center, middles.center),
            column(&self.right, middles.right),
        ])
    }

    /// Reels whose strip lacks `symbol`
    pub fn missing(&self, symbol: Symbol) -> Vec<ReelPosition> {
        self.iter()
            .filter(|(_, strip)| !strip.contains(symbol))
            .map(|(position, _)| position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use Symbol::*;

    #[test]
    fn test_symbol_at_offset_wraps() {
        let strip = ReelStrip::new(vec![Seven, Bell, Cherry]);
        assert_eq!(strip.symbol_at_offset(0, -1), Cherry);
        assert_eq!(strip.symbol_at_offset(2, 1), Seven);
        assert_eq!(strip.symbol_at_offset(1, 0), Bell);
        assert_eq!(strip.symbol_at_offset(0, -4), Cherry);
    }

    #[test]
    fn test_empty_strip_fallbacks() {
        let strip = ReelStrip::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(strip.draw(&mut rng), Watermelon);
        assert_eq!(strip.index_of(Seven), 0);
        assert_eq!(strip.symbol_at_offset(0, -1), Watermelon);
        assert_eq!(strip.next_occurrence(Seven, 0), None);
    }

    #[test]
    fn test_index_of_first_occurrence() {
        let strip = ReelStrip::new(vec![Grape, Bell, Grape, Seven]);
        assert_eq!(strip.index_of(Grape), 0);
        assert_eq!(strip.index_of(Seven), 3);
        assert_eq!(strip.index_of(Cherry), 0);
    }

    #[test]
    fn test_next_occurrence() {
        let strip = ReelStrip::new(vec![Seven, Bell, Cherry, Bell]);
        assert_eq!(strip.next_occurrence(Bell, 0), Some(1));
        assert_eq!(strip.next_occurrence(Bell, 1), Some(2));
        assert_eq!(strip.next_occurrence(Seven, 0), Some(4));
        assert_eq!(strip.next_occurrence(Seven, 3), Some(1));
        assert_eq!(strip.next_occurrence(Grape, 0), None);
    }

    #[test]
    fn test_draw_stays_on_strip() {
        let strip = ReelStrip::new(vec![Cherry, Grape]);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            assert!(strip.contains(strip.draw(&mut rng)));
        }
    }

    #[test]
    fn test_strip_parse_and_display() {
        let strip: ReelStrip = "seven, bell cherry,W g".parse().unwrap();
        assert_eq!(strip.symbols(), &[Seven, Bell, Cherry, Watermelon, Grape]);
        assert_eq!(strip.to_string(), "7BCWG");

        assert!("seven,plum".parse::<ReelStrip>().is_err());
    }

    #[test]
    fn test_window_for() {
        let strips = ReelStrips::new(
            ReelStrip::new(vec![Seven, Bell, Cherry]),
            ReelStrip::new(vec![Grape, Watermelon, Bell]),
            ReelStrip::new(vec![Cherry, Cherry, Seven]),
        );
        let window = strips.window_for(&ReelTriple::new(Seven, Bell, Cherry));

        assert_eq!(window.column(ReelPosition::Left), [Cherry, Seven, Bell]);
        assert_eq!(window.column(ReelPosition::Center), [Watermelon, Bell, Grape]);
        assert_eq!(window.column(ReelPosition::Right), [Seven, Cherry, Cherry]);
    }

    #[test]
    fn test_missing_symbol() {
        let strips = ReelStrips::new(
            ReelStrip::new(vec![Seven, Bell]),
            ReelStrip::new(vec![Bell]),
            ReelStrip::default(),
        );
        assert_eq!(
            strips.missing(Seven),
            vec![ReelPosition::Center, ReelPosition::Right]
        );
        assert_eq!(strips.missing(Bell), vec![ReelPosition::Right]);
    }

    #[test]
    fn test_triple_indexing() {
        let mut triple = ReelTriple::splat(0u8);
        triple[ReelPosition::Center] = 5;
        assert_eq!(triple.to_array(), [0, 5, 0]);
        assert_eq!(triple.map(|v| v * 2).center, 10);
    }
}
