use cluesmith_core::Position;
use tinyvec::TinyVec;

use super::{BoxedTechnique, Technique};
use crate::{Move, SolveState, Tier};

const NAME: &str = "Box-Line Reduction";

/// Eliminates candidates inside a box that a line claims for itself.
///
/// The mirror image of [`PointingLine`]: if every spot for a digit in a row
/// or column falls inside a single box, the box must supply it on that line,
/// so the digit is discarded from the box's other cells.
///
/// [`PointingLine`]: super::PointingLine
#[derive(Debug, Default, Clone, Copy)]
pub struct BoxLineReduction;

impl BoxLineReduction {
    /// Creates a new `BoxLineReduction` technique.
    #[must_use]
    pub const fn new() -> Self {
        BoxLineReduction
    }

    fn reduce(
        state: &mut SolveState,
        digit: u8,
        line: impl Iterator<Item = Position>,
    ) -> bool {
        let holders: TinyVec<[Position; 8]> = line
            .filter(|&pos| state.candidates.get(pos).is_some_and(|set| set.contains(digit)))
            .collect();
        let Some((&first, rest @ [_, ..])) = holders.split_first() else {
            return false;
        };
        let box_index = state.grid.box_index(first);
        if !rest.iter().all(|&pos| state.grid.box_index(pos) == box_index) {
            return false;
        }

        let eliminations: Vec<Position> = state
            .grid
            .box_positions(box_index)
            .filter(|pos| !holders.contains(pos))
            .collect();
        let mut changed = false;
        for pos in eliminations {
            changed |= state.candidates.eliminate(pos, digit);
        }
        changed
    }
}

impl Technique for BoxLineReduction {
    fn name(&self) -> &'static str {
        NAME
    }

    fn tier(&self) -> Tier {
        Tier::BoxInteraction
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, state: &mut SolveState, _moves: &mut Vec<Move>) -> bool {
        let mut changed = false;
        for line in 0..state.grid.size() {
            for digit in 1..=state.grid.size() {
                let row = state.grid.row_positions(line);
                changed |= Self::reduce(state, digit, row);
                let col = state.grid.col_positions(line);
                changed |= Self::reduce(state, digit, col);
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_line_claims_digit_for_one_box() {
        // Row 0 has only columns 0-2 open, so its 9 must land in box 0 and
        // leaves the box cells below row 0.
        TechniqueTester::from_str(
            "
            ___ 123 456
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .apply_once(&BoxLineReduction::new())
        .assert_changed()
        // 9 leaves the box 0 cells below row 0.
        .assert_removed_includes(Position::new(1, 0), [9])
        .assert_removed_includes(Position::new(2, 2), [9])
        // Row 0 itself keeps the claim.
        .assert_no_change(Position::new(0, 0));
    }

    #[test]
    fn test_no_change_on_empty_grid() {
        TechniqueTester::new(cluesmith_core::Grid::empty(9).unwrap())
            .apply_once(&BoxLineReduction::new())
            .assert_unchanged();
    }
}
