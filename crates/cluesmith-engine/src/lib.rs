//! Plain-matrix facade over the cluesmith puzzle engine.
//!
//! Hosts that speak in raw `size x size` matrices (`0` = empty) use this
//! crate as their single entry point: every function converts the wire
//! matrices at the boundary and delegates to [`cluesmith_generator`] and
//! [`cluesmith_solver`]. All calls are synchronous, own their state, and
//! keep nothing between invocations, so independent callers never need
//! locking.
//!
//! # Examples
//!
//! ```no_run
//! let (puzzle, solution) = cluesmith_engine::generate("easy")?;
//! assert!(cluesmith_engine::is_solved(&solution)?);
//!
//! let hint = cluesmith_engine::hint(&puzzle, &solution)?.unwrap();
//! assert!(cluesmith_engine::validate_move(&puzzle, hint.row, hint.col, hint.value)?);
//! # Ok::<(), cluesmith_core::GridError>(())
//! ```

use cluesmith_core::Position;

pub use cluesmith_core::{CandidateMap, DigitSet, Grid, GridError, GridParseError};
pub use cluesmith_generator::{
    Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, SeedParseError,
};
pub use cluesmith_solver::{HintEngine, Move, SolvedAssessment, TechniqueSolver, Tier};

/// Generates a 9x9 puzzle and its solution as wire matrices.
///
/// Unknown difficulty names silently mean `"medium"`.
///
/// # Errors
///
/// Never fails for the default size; the `Result` mirrors
/// [`generate_with_size`].
pub fn generate(difficulty: &str) -> Result<(Vec<Vec<u8>>, Vec<Vec<u8>>), GridError> {
    generate_with_size(difficulty, 9)
}

/// Generates a puzzle of an explicit grid size.
///
/// # Errors
///
/// Returns an error if `size` is not a supported grid size.
pub fn generate_with_size(
    difficulty: &str,
    size: u8,
) -> Result<(Vec<Vec<u8>>, Vec<Vec<u8>>), GridError> {
    let generated =
        PuzzleGenerator::new(size).generate(Difficulty::from_name(difficulty))?;
    Ok((generated.puzzle.to_rows(), generated.solution.to_rows()))
}

/// Checks whether placing `value` at `(row, col)` would be legal.
///
/// The cell's current content is ignored, so re-proposing a cell's own
/// value reports `true`.
///
/// # Errors
///
/// Returns an error if the matrix is not a well-formed grid.
pub fn validate_move(grid: &[Vec<u8>], row: u8, col: u8, value: u8) -> Result<bool, GridError> {
    let grid = Grid::from_rows(grid)?;
    Ok(grid.is_move_valid(Position::new(row, col), value))
}

/// Checks whether the matrix is a completely and correctly solved grid.
///
/// # Errors
///
/// Returns an error if the matrix is not a well-formed grid.
pub fn is_solved(grid: &[Vec<u8>]) -> Result<bool, GridError> {
    Ok(Grid::from_rows(grid)?.is_solved())
}

/// Returns the single best next move, or `None` on a completed grid.
///
/// # Errors
///
/// Returns an error if either matrix is not a well-formed grid.
pub fn hint(grid: &[Vec<u8>], solution: &[Vec<u8>]) -> Result<Option<Move>, GridError> {
    let (puzzle, solution) = (Grid::from_rows(grid)?, Grid::from_rows(solution)?);
    Ok(HintEngine::new().hint(&puzzle, &solution))
}

/// Returns up to [`HintEngine::DEFAULT_MOVE_LIMIT`] upcoming moves.
///
/// # Errors
///
/// Returns an error if either matrix is not a well-formed grid.
pub fn optimal_moves(grid: &[Vec<u8>], solution: &[Vec<u8>]) -> Result<Vec<Move>, GridError> {
    optimal_moves_limited(grid, solution, HintEngine::DEFAULT_MOVE_LIMIT)
}

/// Returns up to `limit` upcoming moves.
///
/// # Errors
///
/// Returns an error if either matrix is not a well-formed grid.
pub fn optimal_moves_limited(
    grid: &[Vec<u8>],
    solution: &[Vec<u8>],
    limit: usize,
) -> Result<Vec<Move>, GridError> {
    let (puzzle, solution) = (Grid::from_rows(grid)?, Grid::from_rows(solution)?);
    Ok(HintEngine::new().optimal_moves(&puzzle, &solution, limit))
}

/// Returns a move list covering every empty cell of `grid`.
///
/// # Errors
///
/// Returns an error if either matrix is not a well-formed grid.
pub fn solution_path(grid: &[Vec<u8>], solution: &[Vec<u8>]) -> Result<Vec<Move>, GridError> {
    let (puzzle, solution) = (Grid::from_rows(grid)?, Grid::from_rows(solution)?);
    Ok(HintEngine::new().solution_path(&puzzle, &solution))
}
