use cluesmith_core::Grid;

use crate::{
    Move, SolveState, SolvedAssessment,
    technique::{BoxedTechnique, all_techniques},
};

/// Applies a roster of techniques to a fixed point, easiest rule first.
///
/// Each round walks the roster in order and applies the first technique that
/// makes progress, then starts the next round from the top. The hardest
/// technique that was ever needed becomes the difficulty grade; a grid the
/// roster cannot finish is graded 5.
#[derive(Debug, Clone)]
pub struct TechniqueSolver {
    techniques: Vec<BoxedTechnique>,
}

impl TechniqueSolver {
    /// Creates a solver with an explicit technique roster.
    ///
    /// The roster order is the order of preference; pass easier rules first.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a solver with every built-in technique.
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(all_techniques())
    }

    /// Returns the roster, in application order.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Solves as far as the roster allows and grades the result.
    ///
    /// The input grid is not modified; the placements are reported through
    /// [`SolvedAssessment::moves`].
    #[must_use]
    pub fn assess(&self, puzzle: &Grid) -> SolvedAssessment {
        let mut state = SolveState::new(puzzle.clone());
        let mut moves: Vec<Move> = Vec::new();
        let mut max_difficulty = 0;

        'rounds: while !state.is_complete() {
            for technique in &self.techniques {
                if technique.apply(&mut state, &mut moves) {
                    max_difficulty = max_difficulty.max(technique.tier().value());
                    continue 'rounds;
                }
            }
            // No technique made progress; the grid needs backtracking.
            return SolvedAssessment {
                moves,
                max_difficulty: 5,
                solved: false,
            };
        }

        SolvedAssessment {
            moves,
            max_difficulty,
            solved: true,
        }
    }
}

impl Default for TechniqueSolver {
    fn default() -> Self {
        Self::with_all_techniques()
    }
}
