use cluesmith_core::{Grid, GridError};

use crate::{Difficulty, PuzzleSeed, carve::carve, fill::filled_grid};

/// A puzzle produced by [`PuzzleGenerator`], with everything needed to
/// serve and later reproduce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The carved puzzle with empty cells.
    pub puzzle: Grid,
    /// The unique completion of `puzzle`.
    pub solution: Grid,
    /// The seed that deterministically produced this puzzle.
    pub seed: PuzzleSeed,
    /// The grade the puzzle was carved for.
    pub difficulty: Difficulty,
}

/// Generates puzzles with a unique solution at a requested difficulty.
///
/// Generation is a two-step pipeline: a random complete solution is built by
/// backtracking, then clues are carved away while a second solution is kept
/// impossible. Everything is driven by a [`PuzzleSeed`], so a puzzle can be
/// regenerated from its seed alone.
///
/// # Examples
///
/// ```no_run
/// use cluesmith_generator::{Difficulty, PuzzleGenerator};
///
/// let generated = PuzzleGenerator::new(9).generate(Difficulty::Easy)?;
/// assert!(generated.solution.is_solved());
/// assert!(generated.puzzle.clue_count() >= 36);
/// # Ok::<(), cluesmith_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    size: u8,
}

impl PuzzleGenerator {
    /// Creates a generator for grids of the given size.
    ///
    /// The size is validated when a puzzle is generated.
    #[must_use]
    pub const fn new(size: u8) -> Self {
        Self { size }
    }

    /// Returns the grid size this generator produces.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator's size is not a supported grid
    /// size.
    pub fn generate(&self, difficulty: Difficulty) -> Result<GeneratedPuzzle, GridError> {
        self.generate_with_seed(PuzzleSeed::random(), difficulty)
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed, size, and difficulty always reproduce the same
    /// puzzle.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator's size is not a supported grid
    /// size.
    pub fn generate_with_seed(
        &self,
        seed: PuzzleSeed,
        difficulty: Difficulty,
    ) -> Result<GeneratedPuzzle, GridError> {
        let mut rng = seed.rng();
        let solution = filled_grid(&mut rng, self.size)?;
        let puzzle = carve(&mut rng, &solution, difficulty);
        log::debug!(
            "generated {difficulty} puzzle with {} clues from seed {seed}",
            puzzle.clue_count()
        );
        Ok(GeneratedPuzzle {
            puzzle,
            solution,
            seed,
            difficulty,
        })
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new(9)
    }
}
