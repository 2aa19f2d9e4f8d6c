//! Line set bitset representation
//!
//! Uses a 16-bit integer where each bit represents one line (a row, a column
//! or a diagonal, depending on which set it is). 15 diagonals fit for the
//! largest supported board.

use super::types::MAX_DIAGONALS;

const _: () = assert!(MAX_DIAGONALS <= 16, "line sets must fit every diagonal");

/// Set of line indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct LineSet {
    bits: u16,
}

impl LineSet {
    /// Create empty line set
    #[inline]
    pub const fn new() -> Self {
        LineSet { bits: 0 }
    }

    /// Check if a line is present
    #[inline]
    pub fn have(&self, line: usize) -> bool {
        self.bits & (1u16 << line) != 0
    }

    /// Add a single line
    #[inline]
    pub fn add(&mut self, line: usize) -> &mut Self {
        self.bits |= 1u16 << line;
        self
    }

    /// Remove a single line
    #[inline]
    pub fn remove(&mut self, line: usize) -> &mut Self {
        self.bits &= !(1u16 << line);
        self
    }
}
