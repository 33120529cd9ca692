//! Difficulty grades and clue removal.

use cluesmith_core::{Grid, Position};
use derive_more::Display;
use rand::{Rng, RngExt as _, seq::SliceRandom as _};

use crate::count::has_unique_solution;

/// A requested difficulty grade for generated puzzles.
///
/// Each grade maps to a clue-count range on a 9x9 grid; other grid sizes
/// scale the range by their cell count. Expert and master share a clue
/// range and differ only in the techniques a solver ends up needing.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 36-49 clues.
    #[display("easy")]
    Easy,
    /// 32-35 clues.
    #[default]
    #[display("medium")]
    Medium,
    /// 28-31 clues.
    #[display("hard")]
    Hard,
    /// 17-27 clues.
    #[display("expert")]
    Expert,
    /// 17-27 clues, graded at the top of the scale.
    #[display("master")]
    Master,
}

impl Difficulty {
    /// All grades, easiest first.
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Expert,
        Self::Master,
    ];

    /// Inclusive clue-count bounds on a 9x9 grid.
    #[must_use]
    pub const fn clue_range(self) -> (u8, u8) {
        match self {
            Self::Easy => (36, 49),
            Self::Medium => (32, 35),
            Self::Hard => (28, 31),
            Self::Expert | Self::Master => (17, 27),
        }
    }

    /// Numeric difficulty score, 1 (easy) through 5 (master).
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Expert => 4,
            Self::Master => 5,
        }
    }

    /// The grade's lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
            Self::Master => "master",
        }
    }

    /// Looks a grade up by name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`Difficulty::Medium`] so callers
    /// passing through untrusted request strings always get a puzzle.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    fn scaled_clue_bounds(self, grid: &Grid) -> (usize, usize) {
        let (lo, hi) = self.clue_range();
        let total = usize::from(grid.size()) * usize::from(grid.size());
        let scale = |bound: u8| (usize::from(bound) * total / 81).max(usize::from(grid.size()));
        (scale(lo), scale(hi))
    }
}

/// Carves a puzzle out of a solved grid.
///
/// Clues are removed in an order shuffled by `rng` until the clue count
/// drops into the grade's range. A removal that would let a second solution
/// in is undone, so the result always has exactly one completion; when the
/// uniqueness constraint wins, the puzzle keeps more clues than the grade
/// asked for.
pub fn carve<R: Rng + ?Sized>(rng: &mut R, solution: &Grid, difficulty: Difficulty) -> Grid {
    let mut puzzle = solution.clone();
    let mut order: Vec<Position> = puzzle.positions().collect();
    order.shuffle(rng);

    let (lo, hi) = difficulty.scaled_clue_bounds(solution);
    let target = rng.random_range(lo..=hi);
    let mut clues = order.len();

    for pos in order {
        if clues <= target {
            break;
        }
        let value = puzzle.value(pos);
        puzzle.clear(pos);
        if has_unique_solution(&puzzle) {
            clues -= 1;
        } else {
            puzzle.set(pos, value);
        }
    }

    log::debug!("carved {difficulty} puzzle: {clues} clues (target {target})");
    puzzle
}
