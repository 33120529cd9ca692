use cluesmith_core::Position;
use tinyvec::TinyVec;

use super::{BoxedTechnique, Technique};
use crate::{Move, SolveState, Tier};

const NAME: &str = "Pointing Line";

/// Eliminates candidates outside a box that a box pins to one line.
///
/// If every spot for a digit inside a box falls on a single row or column,
/// the digit must be placed there, so it can be discarded from the rest of
/// that line outside the box. Known as pointing pairs and triples.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointingLine;

impl PointingLine {
    /// Creates a new `PointingLine` technique.
    #[must_use]
    pub const fn new() -> Self {
        PointingLine
    }
}

impl Technique for PointingLine {
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
        for box_index in 0..state.grid.size() {
            for digit in 1..=state.grid.size() {
                let holders: TinyVec<[Position; 8]> = state
                    .grid
                    .box_positions(box_index)
                    .filter(|&pos| {
                        state.candidates.get(pos).is_some_and(|set| set.contains(digit))
                    })
                    .collect();
                // A lone holder is a hidden single; leave it to that rule.
                let Some((&first, rest @ [_, ..])) = holders.split_first() else {
                    continue;
                };

                if rest.iter().all(|pos| pos.row() == first.row()) {
                    let eliminations: Vec<Position> = state
                        .grid
                        .row_positions(first.row())
                        .filter(|&pos| state.grid.box_index(pos) != box_index)
                        .collect();
                    for pos in eliminations {
                        changed |= state.candidates.eliminate(pos, digit);
                    }
                } else if rest.iter().all(|pos| pos.col() == first.col()) {
                    let eliminations: Vec<Position> = state
                        .grid
                        .col_positions(first.col())
                        .filter(|&pos| state.grid.box_index(pos) != box_index)
                        .collect();
                    for pos in eliminations {
                        changed |= state.candidates.eliminate(pos, digit);
                    }
                }
            }
        }
        changed
    }
}
