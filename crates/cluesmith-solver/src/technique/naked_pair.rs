use cluesmith_core::{DigitSet, Position};
use tinyvec::TinyVec;

use super::{BoxedTechnique, Technique};
use crate::{Move, SolveState, Tier};

const NAME: &str = "Naked Pair";

/// Eliminates candidates locked into a pair of twin cells.
///
/// When two cells of a unit share the same two-candidate set, those two
/// digits are spoken for and can be discarded from every other cell of the
/// unit. This rule never places a digit itself; the eliminations surface as
/// singles in later rounds.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedPair;

impl NakedPair {
    /// Creates a new `NakedPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        NakedPair
    }
}

impl Technique for NakedPair {
    fn name(&self) -> &'static str {
        NAME
    }

    fn tier(&self) -> Tier {
        Tier::NakedPair
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, state: &mut SolveState, _moves: &mut Vec<Move>) -> bool {
        let mut changed = false;
        for unit in state.grid.units() {
            let pairs: TinyVec<[(Position, DigitSet); 8]> = unit
                .iter()
                .filter_map(|&pos| {
                    let set = state.candidates.get(pos)?;
                    (set.len() == 2).then_some((pos, set))
                })
                .collect();

            for (i, &(first, set)) in pairs.iter().enumerate() {
                for &(second, other) in &pairs[i + 1..] {
                    if set != other {
                        continue;
                    }
                    for &pos in &unit {
                        if pos != first && pos != second {
                            changed |= state.candidates.eliminate_all(pos, set);
                        }
                    }
                }
            }
        }
        changed
    }
}
