//! Board coordinates.

use std::fmt::{self, Display};

/// A zero-based `(row, column)` coordinate on a board.
///
/// Positions are plain coordinates and carry no knowledge of the board size;
/// the [`Grid`](crate::Grid) they index decides whether they are in range.
///
/// # Examples
///
/// ```
/// use cluesmith_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.to_string(), "r4c7");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from zero-based row and column indices.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the zero-based row index.
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns the zero-based column index.
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.col
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

impl From<(u8, u8)> for Position {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}
