use cluesmith_core::Position;
use tinyvec::TinyVec;

use super::{BoxedTechnique, Technique};
use crate::{Move, SolveState, Tier};

const NAME: &str = "Single";

/// Places every cell that has exactly one remaining candidate.
///
/// This is the workhorse rule: most placements in easier puzzles come from
/// here, and every other technique's candidate eliminations eventually pay
/// off as naked singles.
///
/// # Examples
///
/// ```
/// use cluesmith_solver::{SolveState, technique::{NakedSingle, Technique}};
///
/// let mut state = SolveState::new("
///     123 456 78_
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
/// ".parse()?);
///
/// let mut moves = Vec::new();
/// assert!(NakedSingle::new().apply(&mut state, &mut moves));
/// assert_eq!(moves[0].value, 9);
/// # Ok::<(), cluesmith_core::GridParseError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn tier(&self) -> Tier {
        Tier::Singles
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, state: &mut SolveState, moves: &mut Vec<Move>) -> bool {
        let singles: TinyVec<[(Position, u8); 16]> = state
            .candidates
            .open_positions()
            .filter_map(|pos| {
                let digit = state.candidates.get(pos)?.as_single()?;
                Some((pos, digit))
            })
            .collect();

        let mut changed = false;
        for (pos, digit) in singles {
            // An earlier placement in this batch may have invalidated the cell.
            if state.candidates.get(pos).is_some_and(|set| set.contains(digit)) {
                state.place(pos, digit);
                moves.push(Move::new(pos, digit, NAME, Tier::Singles));
                changed = true;
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
    fn test_places_single_candidate_cell() {
        // (0, 8) can only be 9 once the rest of row 0 is filled.
        TechniqueTester::from_str(
            "
            123 456 78_
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
        .apply_once(&NakedSingle::new())
        .assert_changed()
        .assert_placed(Position::new(0, 8), 9)
        .assert_move_recorded(Position::new(0, 8), 9, NAME)
        // The placement propagates down column 8.
        .assert_removed_includes(Position::new(1, 8), [9]);
    }

    #[test]
    fn test_no_change_on_open_grid() {
        TechniqueTester::from_str(
            "
            12_ ___ ___
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
        .apply_once(&NakedSingle::new())
        .assert_unchanged()
        .assert_no_change(Position::new(4, 4));
    }

    #[test]
    fn test_cascade_solves_easy_puzzle() {
        // Repeated naked singles alone finish this grid.
        TechniqueTester::from_str(
            "
            _23 456 789
            456 789 123
            789 123 456
            214 365 897
            365 897 214
            897 214 365
            531 642 978
            642 978 531
            978 531 642
        ",
        )
        .apply_until_stuck(&NakedSingle::new())
        .assert_placed(Position::new(0, 0), 1);
    }

    #[test]
    fn test_works_on_four_by_four() {
        TechniqueTester::from_str(
            "
            123_
            ____
            ____
            ____
        ",
        )
        .apply_once(&NakedSingle::new())
        .assert_placed(Position::new(0, 3), 4);
    }
}
