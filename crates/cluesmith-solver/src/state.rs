//! Shared working state for solving techniques.

use cluesmith_core::{CandidateMap, Grid, Position};

/// A grid under deduction, paired with its candidate map.
///
/// All placements made during solving go through [`SolveState::place`] so the
/// candidate map stays consistent with the grid. The two fields are public
/// because techniques read them independently; only writes are funnelled.
#[derive(Debug, Clone)]
pub struct SolveState {
    /// The grid being solved.
    pub grid: Grid,
    /// Candidates for every empty cell of `grid`.
    pub candidates: CandidateMap,
}

impl SolveState {
    /// Creates the working state for a puzzle.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let candidates = CandidateMap::from_grid(&grid);
        Self { grid, candidates }
    }

    /// Places a digit and propagates the elimination to all peers.
    pub fn place(&mut self, pos: Position, value: u8) {
        self.candidates.assign(&mut self.grid, pos, value);
    }

    /// Returns `true` when the grid has no empty cells left.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.candidates.open_positions().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_keeps_grid_and_candidates_in_sync() {
        let mut state = SolveState::new(Grid::empty(9).unwrap());
        state.place(Position::new(0, 0), 9);

        assert_eq!(state.grid.value(Position::new(0, 0)), 9);
        assert_eq!(state.candidates.get(Position::new(0, 0)), None);
        assert!(!state.candidates.get(Position::new(0, 8)).unwrap().contains(9));
        assert!(!state.is_complete());
    }

    #[test]
    fn test_is_complete_on_full_grid() {
        let grid: Grid = "
            1234
            3412
            2143
            4321
        "
        .parse()
        .unwrap();
        assert!(SolveState::new(grid).is_complete());
    }
}
