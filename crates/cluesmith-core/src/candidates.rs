//! Incremental per-cell candidate tracking.
//!
//! [`CandidateMap`] records, for every empty cell, the set of digits its
//! row, column, and box peers still allow. It is built once from a grid and
//! then maintained incrementally: [`CandidateMap::assign`] fixes a cell and
//! propagates the elimination to every peer in one pass, and never
//! recomputes candidates from scratch.
//!
//! The map is only meaningful while all grid mutations go through it. If the
//! grid changes behind its back the map is stale and must be rebuilt with
//! [`CandidateMap::from_grid`].

use crate::{digit_set::DigitSet, grid::Grid, position::Position};

/// Candidate digits for every empty cell of a grid.
///
/// Filled cells have no entry. This is the propagation primitive all solving
/// techniques build on.
///
/// # Examples
///
/// ```
/// use cluesmith_core::{CandidateMap, Grid, Position};
///
/// let mut grid = Grid::empty(9)?;
/// let mut candidates = CandidateMap::from_grid(&grid);
///
/// candidates.assign(&mut grid, Position::new(4, 4), 5);
///
/// assert_eq!(grid.value(Position::new(4, 4)), 5);
/// // 5 is no longer a candidate anywhere in row 4, column 4, or the center box.
/// assert!(!candidates.get(Position::new(4, 0)).unwrap().contains(5));
/// assert!(!candidates.get(Position::new(0, 4)).unwrap().contains(5));
/// assert!(!candidates.get(Position::new(3, 3)).unwrap().contains(5));
/// # Ok::<(), cluesmith_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMap {
    size: u8,
    cells: Vec<Option<DigitSet>>,
}

impl CandidateMap {
    /// Builds the candidate map for a grid.
    ///
    /// Every empty cell gets `{1..=size}` minus the digits already present
    /// in its row, column, and box; filled cells get no entry.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let size = grid.size();
        let cells = grid
            .positions()
            .map(|pos| grid.is_cell_empty(pos).then(|| grid.candidates_at(pos)))
            .collect();
        Self { size, cells }
    }

    fn index(&self, pos: Position) -> usize {
        usize::from(pos.row()) * usize::from(self.size) + usize::from(pos.col())
    }

    /// Returns the candidates at a position, or `None` for a filled cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<DigitSet> {
        self.cells[self.index(pos)]
    }

    /// Removes one digit from a cell's candidates.
    ///
    /// Returns `true` if the digit was present. Filled cells are left alone.
    pub fn eliminate(&mut self, pos: Position, digit: u8) -> bool {
        let index = self.index(pos);
        match &mut self.cells[index] {
            Some(set) => set.remove(digit),
            None => false,
        }
    }

    /// Removes several digits from a cell's candidates at once.
    ///
    /// Returns `true` if any of them was present.
    pub fn eliminate_all(&mut self, pos: Position, digits: DigitSet) -> bool {
        let index = self.index(pos);
        match &mut self.cells[index] {
            Some(set) => {
                let before = *set;
                *set = set.difference(digits);
                *set != before
            }
            None => false,
        }
    }

    /// Fixes `value` at `pos` and propagates the elimination.
    ///
    /// The cell is written into the grid and loses its candidate entry, and
    /// `value` is discarded from the candidate set of every peer sharing the
    /// cell's row, column, or box.
    pub fn assign(&mut self, grid: &mut Grid, pos: Position, value: u8) {
        grid.set(pos, value);
        let index = self.index(pos);
        self.cells[index] = None;

        let peers: Vec<Position> = grid
            .row_positions(pos.row())
            .chain(grid.col_positions(pos.col()))
            .chain(grid.box_positions(grid.box_index(pos)))
            .collect();
        for peer in peers {
            self.eliminate(peer, value);
        }
    }

    /// Iterates over the positions that still have a candidate entry,
    /// in row-major order.
    pub fn open_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, entry)| {
            entry.map(|_| {
                #[expect(clippy::cast_possible_truncation, reason = "i < size^2 <= 625")]
                let (row, col) = ((i / usize::from(size)) as u8, (i % usize::from(size)) as u8);
                Position::new(row, col)
            })
        })
    }
}
