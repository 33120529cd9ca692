//! Fluent test harness for technique modules.

use cluesmith_core::{CandidateMap, Grid, Position};

use crate::{Move, SolveState, technique::Technique};

/// Applies techniques to a grid and asserts on the outcome.
///
/// Assertions consume and return the tester so checks can be chained.
pub struct TechniqueTester {
    initial: CandidateMap,
    state: SolveState,
    moves: Vec<Move>,
    changed: bool,
}

impl TechniqueTester {
    pub fn new(grid: Grid) -> Self {
        let state = SolveState::new(grid);
        Self {
            initial: state.candidates.clone(),
            state,
            moves: Vec::new(),
            changed: false,
        }
    }

    /// Builds a tester from grid text, panicking on malformed input.
    pub fn from_str(s: &str) -> Self {
        Self::new(s.parse().unwrap())
    }

    /// Applies the technique a single time.
    pub fn apply_once(mut self, technique: &dyn Technique) -> Self {
        self.changed = technique.apply(&mut self.state, &mut self.moves);
        self
    }

    /// Applies the technique repeatedly until it stops making progress.
    pub fn apply_until_stuck(mut self, technique: &dyn Technique) -> Self {
        let mut any = false;
        while technique.apply(&mut self.state, &mut self.moves) {
            any = true;
        }
        self.changed = any;
        self
    }

    #[track_caller]
    pub fn assert_changed(self) -> Self {
        assert!(self.changed, "technique should have made progress");
        self
    }

    #[track_caller]
    pub fn assert_unchanged(self) -> Self {
        assert!(!self.changed, "technique should not have made progress");
        self
    }

    /// Asserts that `value` was placed at `pos`.
    #[track_caller]
    pub fn assert_placed(self, pos: Position, value: u8) -> Self {
        assert_eq!(
            self.state.grid.value(pos),
            value,
            "expected {value} placed at {pos}"
        );
        self
    }

    /// Asserts that the cell at `pos` lost every digit in `digits`.
    #[track_caller]
    pub fn assert_removed_includes(self, pos: Position, digits: impl IntoIterator<Item = u8>) -> Self {
        let set = self
            .state
            .candidates
            .get(pos)
            .unwrap_or_else(|| panic!("cell at {pos} is filled, expected candidates"));
        for digit in digits {
            assert!(
                self.initial.get(pos).is_some_and(|s| s.contains(digit)),
                "digit {digit} was never a candidate at {pos}"
            );
            assert!(!set.contains(digit), "digit {digit} should be removed at {pos}");
        }
        self
    }

    /// Asserts that the candidates at `pos` are exactly as they started.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        assert_eq!(
            self.state.candidates.get(pos),
            self.initial.get(pos),
            "candidates at {pos} should be untouched"
        );
        self
    }

    /// Asserts that a move with the given placement and strategy was recorded.
    #[track_caller]
    pub fn assert_move_recorded(self, pos: Position, value: u8, strategy: &str) -> Self {
        assert!(
            self.moves.iter().any(|m| {
                m.position() == pos && m.value == value && m.strategy == strategy
            }),
            "no `{strategy}` move placing {value} at {pos}; recorded moves: {:?}",
            self.moves
        );
        self
    }
}
