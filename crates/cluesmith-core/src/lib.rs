//! Core data structures for the cluesmith puzzle engine.
//!
//! This crate provides the fundamental types shared by the generator and
//! solver crates:
//!
//! - [`grid`]: The board itself, including stateless legality and completion
//!   checks ([`Grid::is_move_valid`], [`Grid::is_solved`]).
//! - [`position`]: Board coordinates.
//! - [`digit_set`]: A fixed-width bitset over the digits `1..=size`, so peer
//!   elimination is a couple of bitwise operations.
//! - [`candidates`]: The incrementally-maintained per-cell candidate map that
//!   every solving technique relies on.
//!
//! Boards are `size x size` with `size` a perfect square; `0` marks an empty
//! cell. All sizes with a box dimension of 2 through 5 (boards of 4, 9, 16,
//! and 25) are supported; candidate sets for these fit in a single `u32`.
//!
//! # Examples
//!
//! ```
//! use cluesmith_core::{CandidateMap, Grid, Position};
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let candidates = CandidateMap::from_grid(&grid);
//! let cell = candidates.get(Position::new(0, 2)).unwrap();
//! assert!(cell.contains(1)); // 1 is still possible at row 0, column 2
//! assert!(!cell.contains(5)); // 5 already sits in the same row
//! # Ok::<(), cluesmith_core::GridParseError>(())
//! ```

pub mod candidates;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    candidates::CandidateMap,
    digit_set::DigitSet,
    grid::{Grid, GridError, GridParseError},
    position::Position,
};
