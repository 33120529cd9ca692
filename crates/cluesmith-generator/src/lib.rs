//! Seeded puzzle generation for the cluesmith puzzle engine.
//!
//! A [`PuzzleGenerator`] builds a random complete solution by iterative
//! backtracking, then carves clues away while [`count::has_unique_solution`]
//! confirms that exactly one completion survives. Every puzzle is fully
//! determined by its [`PuzzleSeed`], which prints as 64 hex digits and can
//! be parsed back to regenerate the identical puzzle.
//!
//! # Examples
//!
//! ```
//! use cluesmith_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let seed = PuzzleSeed::from_phrase("docs");
//! let generator = PuzzleGenerator::new(9);
//!
//! let first = generator.generate_with_seed(seed, Difficulty::Medium)?;
//! let again = generator.generate_with_seed(seed, Difficulty::Medium)?;
//! assert_eq!(first.puzzle, again.puzzle);
//! # Ok::<(), cluesmith_core::GridError>(())
//! ```

pub mod carve;
pub mod count;
pub mod fill;
mod generator;
pub mod seed;

pub use self::{
    carve::{Difficulty, carve},
    count::{count_solutions, has_unique_solution},
    fill::filled_grid,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{PuzzleSeed, SeedParseError},
};
