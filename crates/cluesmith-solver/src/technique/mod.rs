//! Deduction rules, one module per rule.
//!
//! Techniques are ordered by difficulty in [`all_techniques`]; the solver
//! relies on that ordering to report the easiest rule that makes progress.

use std::fmt::Debug;

use crate::{Move, SolveState, Tier};

mod box_line;
mod hidden_single;
mod naked_pair;
mod naked_single;
mod pointing_line;

pub use self::{
    box_line::BoxLineReduction, hidden_single::HiddenSingle, naked_pair::NakedPair,
    naked_single::NakedSingle, pointing_line::PointingLine,
};

/// A deduction rule a human solver could apply.
///
/// A technique either places digits (recording a [`Move`] for each) or
/// narrows candidates without placing anything; both count as progress.
pub trait Technique: Debug + Send + Sync {
    /// Returns the display name of the rule, as it appears in move records.
    fn name(&self) -> &'static str;

    /// Returns the difficulty tier of the rule.
    fn tier(&self) -> Tier;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Applies the rule once across the whole grid.
    ///
    /// Every placement is appended to `moves`. Returns `true` if the grid or
    /// any candidate set changed.
    fn apply(&self, state: &mut SolveState, moves: &mut Vec<Move>) -> bool;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// The full technique roster, ordered from easiest to hardest.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
        Box::new(NakedPair::new()),
        Box::new(PointingLine::new()),
        Box::new(BoxLineReduction::new()),
    ]
}
