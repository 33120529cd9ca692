//! Graded logical solving for the cluesmith puzzle engine.
//!
//! This crate mimics human deduction: a fixed roster of techniques is tried
//! strictly from easiest to hardest, the first one that changes anything is
//! applied in full, and the round restarts from the easiest rule. The
//! hardest rule that was genuinely required grades the puzzle.
//!
//! - [`technique`]: The individual deduction rules, one module per rule.
//! - [`TechniqueSolver`]: The fixed-point loop over those rules, producing a
//!   [`SolvedAssessment`] with every forced placement as a [`Move`].
//! - [`HintEngine`]: Single hints, bounded next-move lists, and complete
//!   move-by-move solution paths, with solution-derived reveals when logic
//!   alone cannot finish.
//!
//! # Examples
//!
//! ```
//! use cluesmith_core::Grid;
//! use cluesmith_solver::TechniqueSolver;
//!
//! let puzzle: Grid = "
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
//! let assessment = TechniqueSolver::with_all_techniques().assess(&puzzle);
//! assert!(assessment.solved);
//! assert_eq!(assessment.moves.len(), 51); // one move per empty cell
//! # Ok::<(), cluesmith_core::GridParseError>(())
//! ```

pub mod hint;
pub mod move_record;
pub mod state;
pub mod technique;
mod technique_solver;

#[cfg(test)]
mod testing;

pub use self::{
    hint::HintEngine,
    move_record::{Move, SolvedAssessment, Tier},
    state::SolveState,
    technique_solver::TechniqueSolver,
};
