use cluesmith_core::Position;

use super::{BoxedTechnique, Technique};
use crate::{Move, SolveState, Tier};

const NAME: &str = "Hidden Single";

/// Places digits that fit in only one cell of a row, column, or box.
///
/// A hidden single is a cell that still has several candidates, but holds
/// the only spot in some unit where a particular digit can go. Cells whose
/// candidate set is already a single are left to [`NakedSingle`]; this rule
/// only claims placements the simpler one cannot see.
///
/// [`NakedSingle`]: super::NakedSingle
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }
}

impl Technique for HiddenSingle {
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
        let mut found: Vec<(Position, u8)> = Vec::new();
        for unit in state.grid.units() {
            for digit in 1..=state.grid.size() {
                let mut holders = unit.iter().filter(|&&pos| {
                    state.candidates.get(pos).is_some_and(|set| set.contains(digit))
                });
                let (Some(&only), None) = (holders.next(), holders.next()) else {
                    continue;
                };
                // A lone candidate is a naked single, not ours to claim.
                if state.candidates.get(only).is_some_and(|set| set.len() >= 2)
                    && !found.contains(&(only, digit))
                {
                    found.push((only, digit));
                }
            }
        }

        let mut changed = false;
        for (pos, digit) in found {
            if state.candidates.get(pos).is_some_and(|set| set.contains(digit)) {
                state.place(pos, digit);
                moves.push(Move::new(pos, digit, NAME, Tier::Singles));
                changed = true;
            }
        }
        changed
    }
}
