//! Grid cells and resolved dots.

use std::fmt;

use gridlock_core::Point;

/// A grid coordinate `(row, column)`.
///
/// Identity is value equality on the pair. Ordering follows column-major
/// enumeration (column, then row), matching the order the layout engine
/// produces dots in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: u32,
    pub column: u32,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Cell {
    /// Formats as `row-column`, the token shape used by the string pattern
    /// provider.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.column)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.column, self.row).cmp(&(other.column, other.row))
    }
}

/// A [`Cell`] resolved to its pixel-space center for one layout pass.
///
/// Dots are immutable once computed; the set is recomputed whenever the
/// container size changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub cell: Cell,
    pub center: Point,
}

impl Dot {
    /// Create a new dot.
    #[inline]
    pub const fn new(cell: Cell, center: Point) -> Self {
        Self { cell, center }
    }
}
