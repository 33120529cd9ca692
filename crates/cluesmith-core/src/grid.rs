//! The board and its stateless legality checks.
//!
//! A [`Grid`] is a `size x size` matrix of `u8` values where `0` marks an
//! empty cell and `1..=size` are placed digits. `size` must be a perfect
//! square; the board is partitioned into `size` non-overlapping
//! `box_size x box_size` boxes where `box_size = sqrt(size)`.
//!
//! Construction from wire data validates shape and value range and returns
//! [`GridError`] on malformed input. Deeper invariants (no duplicate digit in
//! a unit) are caller preconditions, checked on demand via
//! [`Grid::is_move_valid`] and [`Grid::is_solved`].

use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

use derive_more::{Display, Error, From};

use crate::{digit_set::DigitSet, position::Position};

/// Errors produced when constructing a grid from wire data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The requested board size is not a supported perfect square.
    #[display("board size {size} is not a supported perfect square (expected 4, 9, 16, or 25)")]
    UnsupportedSize {
        /// The rejected size.
        size: usize,
    },
    /// A row of the wire grid has the wrong number of cells.
    #[display("row {row} has {len} cells, expected {expected}")]
    RowLengthMismatch {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of cells the row actually has.
        len: usize,
        /// Number of cells every row must have.
        expected: usize,
    },
    /// A cell value lies outside `0..=size`.
    #[display("cell value {value} is out of range for a {size}x{size} board")]
    ValueOutOfRange {
        /// The rejected value.
        value: u8,
        /// The board size.
        size: usize,
    },
}

/// Errors produced when parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GridParseError {
    /// The text contains a character that is neither a digit, an
    /// empty-cell marker (`_`, `.`, `0`), nor whitespace.
    #[display("unexpected character {character:?} in grid text")]
    #[from(skip)]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The number of cells does not form a supported board.
    #[display("grid text has {cells} cells, which is not a supported board area")]
    #[from(skip)]
    BadCellCount {
        /// The number of cells found.
        cells: usize,
    },
    /// The cells formed a board of the right shape but invalid content.
    #[display("{_0}")]
    Grid(GridError),
}

/// A `size x size` board of digits, `0` marking empty cells.
///
/// # Examples
///
/// ```
/// use cluesmith_core::{Grid, Position};
///
/// let mut grid = Grid::empty(9)?;
/// grid.set(Position::new(0, 0), 5);
///
/// assert_eq!(grid.value(Position::new(0, 0)), 5);
/// assert_eq!(grid.clue_count(), 1);
/// assert!(!grid.is_move_valid(Position::new(0, 8), 5)); // 5 already in row 0
/// # Ok::<(), cluesmith_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    box_size: u8,
    cells: Vec<u8>,
}

fn box_size_of(size: usize) -> Option<u8> {
    (2u8..=5).find(|&b| usize::from(b) * usize::from(b) == size)
}

impl Grid {
    /// Creates an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnsupportedSize`] if `size` is not a perfect
    /// square in the supported range.
    pub fn empty(size: usize) -> Result<Self, GridError> {
        let box_size = box_size_of(size).ok_or(GridError::UnsupportedSize { size })?;
        #[expect(clippy::cast_possible_truncation, reason = "size <= 25 here")]
        let size = size as u8;
        Ok(Self {
            size,
            box_size,
            cells: vec![0; usize::from(size) * usize::from(size)],
        })
    }

    /// Creates a board from wire rows (`0` = empty).
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the shape is not square with a supported
    /// size, or if any value exceeds the board size.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let mut grid = Self::empty(rows.len())?;
        let size = usize::from(grid.size);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(GridError::RowLengthMismatch {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                if usize::from(value) > size {
                    return Err(GridError::ValueOutOfRange { value, size });
                }
                grid.cells[row * size + col] = value;
            }
        }
        Ok(grid)
    }

    /// Returns the board as wire rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let size = usize::from(self.size);
        (0..size)
            .map(|row| self.cells[row * size..(row + 1) * size].to_vec())
            .collect()
    }

    /// Returns the board size (number of rows, columns, and boxes).
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the box dimension, `sqrt(size)`.
    #[must_use]
    pub const fn box_size(&self) -> u8 {
        self.box_size
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.row() < self.size && pos.col() < self.size, "{pos} out of range");
        usize::from(pos.row()) * usize::from(self.size) + usize::from(pos.col())
    }

    /// Returns the value at a position (`0` = empty).
    #[must_use]
    pub fn value(&self, pos: Position) -> u8 {
        self.cells[self.index(pos)]
    }

    /// Sets the value at a position.
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value <= self.size, "value {value} out of range");
        let index = self.index(pos);
        self.cells[index] = value;
    }

    /// Clears the cell at a position.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, 0);
    }

    /// Returns `true` if the cell at a position is empty.
    #[must_use]
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.value(pos) == 0
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Iterates over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|&pos| self.is_cell_empty(pos))
    }

    /// Returns the index of the box containing a position.
    #[must_use]
    pub fn box_index(&self, pos: Position) -> u8 {
        (pos.row() / self.box_size) * self.box_size + pos.col() / self.box_size
    }

    /// Iterates over the positions of a row.
    pub fn row_positions(&self, row: u8) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).map(move |col| Position::new(row, col))
    }

    /// Iterates over the positions of a column.
    pub fn col_positions(&self, col: u8) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).map(move |row| Position::new(row, col))
    }

    /// Iterates over the positions of a box.
    pub fn box_positions(&self, box_index: u8) -> impl Iterator<Item = Position> + use<> {
        let b = self.box_size;
        let origin_row = (box_index / b) * b;
        let origin_col = (box_index % b) * b;
        (0..b).flat_map(move |r| (0..b).map(move |c| Position::new(origin_row + r, origin_col + c)))
    }

    /// Iterates over every unit of the board: all rows, then all columns,
    /// then all boxes.
    pub fn units(&self) -> impl Iterator<Item = Vec<Position>> + '_ {
        let size = self.size;
        (0..size)
            .map(move |i| self.row_positions(i).collect::<Vec<_>>())
            .chain((0..size).map(move |i| self.col_positions(i).collect::<Vec<_>>()))
            .chain((0..size).map(move |i| self.box_positions(i).collect::<Vec<_>>()))
    }

    /// Returns `true` if `value` does not yet occur in the row, column, or
    /// box of `pos`.
    ///
    /// The cell at `pos` itself participates in the check, so this is the
    /// right primitive for placing into an empty cell.
    #[must_use]
    pub fn can_place(&self, pos: Position, value: u8) -> bool {
        self.row_positions(pos.row()).all(|p| self.value(p) != value)
            && self.col_positions(pos.col()).all(|p| self.value(p) != value)
            && self
                .box_positions(self.box_index(pos))
                .all(|p| self.value(p) != value)
    }

    /// Checks whether placing `value` at `pos` is legal, ignoring whatever
    /// currently occupies `pos`.
    ///
    /// The cell is conceptually cleared first, so re-proposing a cell's own
    /// value is valid.
    #[must_use]
    pub fn is_move_valid(&self, pos: Position, value: u8) -> bool {
        if value == 0 || value > self.size {
            return false;
        }
        let conflicts = |p: Position| p != pos && self.value(p) == value;
        !self.row_positions(pos.row()).any(conflicts)
            && !self.col_positions(pos.col()).any(conflicts)
            && !self.box_positions(self.box_index(pos)).any(conflicts)
    }

    /// Returns the digits still possible at `pos`: `1..=size` minus the
    /// digits already present in the row, column, and box of `pos`.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let mut set = DigitSet::full(self.size);
        let peers = self
            .row_positions(pos.row())
            .chain(self.col_positions(pos.col()))
            .chain(self.box_positions(self.box_index(pos)));
        for p in peers {
            let value = self.value(p);
            if value != 0 {
                set.remove(value);
            }
        }
        set
    }

    /// Returns `true` if the board is completely filled and every row,
    /// column, and box contains exactly the digits `1..=size`.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        if self.cells.iter().any(|&v| v == 0) {
            return false;
        }
        let full = DigitSet::full(self.size);
        self.units()
            .all(|unit| unit.iter().map(|&p| self.value(p)).collect::<DigitSet>() == full)
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses a grid from text.
    ///
    /// Digits `1..=9` are filled cells, `_`, `.`, and `0` are empty cells,
    /// and whitespace is ignored. Only boards up to 9x9 can be written this
    /// way; larger boards go through [`Grid::from_rows`].
    fn from_str(s: &str) -> Result<Self, GridParseError> {
        let mut values = Vec::new();
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            match character {
                '_' | '.' | '0' => values.push(0),
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation, reason = "single decimal digit")]
                    let digit = character.to_digit(10).unwrap_or_default() as u8;
                    values.push(digit);
                }
                _ => return Err(GridParseError::UnexpectedCharacter { character }),
            }
        }
        let cells = values.len();
        let size = (1..=cells)
            .find(|&size| size * size == cells && box_size_of(size).is_some())
            .ok_or(GridParseError::BadCellCount { cells })?;
        let rows: Vec<Vec<u8>> = values.chunks(size).map(<[u8]>::to_vec).collect();
        Ok(Self::from_rows(&rows)?)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                if col > 0 && col % self.box_size == 0 {
                    f.write_char(' ')?;
                }
                let value = self.value(Position::new(row, col));
                if value == 0 {
                    f.write_char('_')?;
                } else if self.size <= 9 {
                    write!(f, "{value}")?;
                } else {
                    write!(f, "{value:>3}")?;
                }
            }
        }
        Ok(())
    }
}
