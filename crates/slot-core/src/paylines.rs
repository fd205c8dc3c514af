//! Paylines: The five lines checked across the visible 3×3 window

use slot_stage::{ReelPosition, Symbol};

/// Row index inside a column: 0 = top, 1 = middle, 2 = bottom
pub type Row = usize;

/// One of the five fixed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payline {
    Top,
    Middle,
    Bottom,
    /// Top-left → middle-center → bottom-right
    DiagonalDown,
    /// Bottom-left → middle-center → top-right
    DiagonalUp,
}

impl Payline {
    pub const ALL: [Payline; 5] = [
        Payline::Top,
        Payline::Middle,
        Payline::Bottom,
        Payline::DiagonalDown,
        Payline::DiagonalUp,
    ];

    /// Row read on the left, center and right reel
    pub fn rows(self) -> [Row; 3] {
        match self {
            Self::Top => [0, 0, 0],
            Self::Middle => [1, 1, 1],
            Self::Bottom => [2, 2, 2],
            Self::DiagonalDown => [0, 1, 2],
            Self::DiagonalUp => [2, 1, 0],
        }
    }
}

/// Visible window: three columns (left, center, right) of three rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolWindow {
    columns: [[Symbol; 3]; 3],
}

impl SymbolWindow {
    pub fn new(columns: [[Symbol; 3]; 3]) -> Self {
        Self { columns }
    }

    /// Top, middle and bottom symbol of one reel
    pub fn column(&self, position: ReelPosition) -> [Symbol; 3] {
        self.columns[position.index()]
    }

    /// Symbols on a payline, left to right
    pub fn line(&self, payline: Payline) -> [Symbol; 3] {
        let rows = payline.rows();
        [
            self.columns[0][rows[0]],
            self.columns[1][rows[1]],
            self.columns[2][rows[2]],
        ]
    }

    /// A payline is satisfied when all three symbols are equal
    pub fn is_satisfied(&self, payline: Payline) -> bool {
        let [left, center, right] = self.line(payline);
        left == center && center == right
    }

    pub fn winning_lines(&self) -> Vec<Payline> {
        Payline::ALL
            .into_iter()
            .filter(|&line| self.is_satisfied(line))
            .collect()
    }

    pub fn has_win(&self) -> bool {
        Payline::ALL.into_iter().any(|line| self.is_satisfied(line))
    }

    pub fn middle_row(&self) -> [Symbol; 3] {
        self.line(Payline::Middle)
    }
}
