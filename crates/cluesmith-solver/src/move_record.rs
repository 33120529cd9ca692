//! Move records and difficulty tiers.

use cluesmith_core::Position;
use derive_more::Display;

/// Difficulty tier of a deduction rule.
///
/// The numbering is part of the external contract: tier 4 is intentionally
/// absent, and tier 5 covers both "a fallback reveal was used" and "the
/// logical techniques alone could not finish the grid".
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tier {
    /// Naked and hidden singles.
    #[display("singles")]
    Singles = 1,
    /// Naked pairs.
    #[display("naked pair")]
    NakedPair = 2,
    /// Pointing pairs/triples and box-line reduction.
    #[display("box interaction")]
    BoxInteraction = 3,
    /// Beyond the technique roster; only backtracking (or revealing the
    /// known solution) finishes the grid.
    #[display("backtracking")]
    Backtracking = 5,
}

impl Tier {
    /// Returns the numeric tier (1-5, skipping 4).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// A single forced placement, with the rule that justified it.
///
/// Move records are produced per call and never persisted; `reason` is a
/// human-readable explanation present mainly on fallback reveals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// Zero-based row of the placement.
    pub row: u8,
    /// Zero-based column of the placement.
    pub col: u8,
    /// The digit placed.
    pub value: u8,
    /// Name of the rule that forced the placement.
    pub strategy: &'static str,
    /// Difficulty tier of that rule.
    pub tier: Tier,
    /// Optional human-readable explanation.
    pub reason: Option<String>,
}

impl Move {
    /// Creates a move without a reason.
    #[must_use]
    pub fn new(pos: Position, value: u8, strategy: &'static str, tier: Tier) -> Self {
        Self {
            row: pos.row(),
            col: pos.col(),
            value,
            strategy,
            tier,
            reason: None,
        }
    }

    /// Creates a move carrying an explanation.
    #[must_use]
    pub fn with_reason(
        pos: Position,
        value: u8,
        strategy: &'static str,
        tier: Tier,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::new(pos, value, strategy, tier)
        }
    }

    /// Returns the placement coordinate.
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Returns the numeric difficulty of the move (1-5).
    #[must_use]
    pub const fn difficulty(&self) -> u8 {
        self.tier.value()
    }
}

/// The outcome of one full technique run over a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedAssessment {
    /// Every forced placement, in the order it was deduced.
    pub moves: Vec<Move>,
    /// The hardest tier genuinely required (`0` if nothing was left to do,
    /// `5` if the techniques could not finish the grid).
    pub max_difficulty: u8,
    /// `true` if the run filled the grid without guessing.
    pub solved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_numbering_has_no_tier_4() {
        assert_eq!(Tier::Singles.value(), 1);
        assert_eq!(Tier::NakedPair.value(), 2);
        assert_eq!(Tier::BoxInteraction.value(), 3);
        assert_eq!(Tier::Backtracking.value(), 5);
    }

    #[test]
    fn test_move_constructors() {
        let m = Move::new(Position::new(2, 3), 7, "Single", Tier::Singles);
        assert_eq!(m.position(), Position::new(2, 3));
        assert_eq!(m.difficulty(), 1);
        assert_eq!(m.reason, None);

        let m = Move::with_reason(
            Position::new(0, 0),
            1,
            "Forced Move",
            Tier::Backtracking,
            "Completing puzzle from solution.",
        );
        assert_eq!(m.difficulty(), 5);
        assert_eq!(m.reason.as_deref(), Some("Completing puzzle from solution."));
    }
}
