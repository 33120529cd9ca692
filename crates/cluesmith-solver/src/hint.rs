//! Hints and move-by-move solution paths.

use cluesmith_core::Grid;

use crate::{Move, TechniqueSolver, Tier};

/// Strategy name recorded when a value is revealed from the known solution
/// instead of being deduced.
pub const FORCED_MOVE: &str = "Forced Move";

/// Produces hints and complete solution paths for a puzzle.
///
/// Hints come from the same technique roster that grades puzzles, so a hint
/// is always the easiest deduction currently available. When logic runs dry
/// the engine falls back to revealing the correct value from the known
/// solution, labelled [`FORCED_MOVE`] at the backtracking tier.
#[derive(Debug, Clone, Default)]
pub struct HintEngine {
    solver: TechniqueSolver,
}

impl HintEngine {
    /// How many upcoming moves [`HintEngine::optimal_moves`] reports by
    /// default.
    pub const DEFAULT_MOVE_LIMIT: usize = 3;

    /// Creates a hint engine backed by the full technique roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hint engine backed by a specific solver.
    #[must_use]
    pub fn with_solver(solver: TechniqueSolver) -> Self {
        Self { solver }
    }

    /// Returns the single best next move, or `None` on a completed grid.
    #[must_use]
    pub fn hint(&self, puzzle: &Grid, solution: &Grid) -> Option<Move> {
        self.optimal_moves(puzzle, solution, 1).into_iter().next()
    }

    /// Returns up to `limit` upcoming deduced moves.
    ///
    /// If the techniques cannot deduce anything at all, a single
    /// [`FORCED_MOVE`] revealing the first empty cell is returned instead,
    /// so callers always get a next step while cells remain open.
    #[must_use]
    pub fn optimal_moves(&self, puzzle: &Grid, solution: &Grid, limit: usize) -> Vec<Move> {
        let mut moves = self.solver.assess(puzzle).moves;
        moves.truncate(limit);
        if moves.is_empty() && limit > 0 {
            if let Some(pos) = puzzle.empty_positions().next() {
                moves.push(Move::with_reason(
                    pos,
                    solution.value(pos),
                    FORCED_MOVE,
                    Tier::Backtracking,
                    "This is the correct value for this cell",
                ));
            }
        }
        moves
    }

    /// Returns a complete move sequence from `puzzle` to `solution`.
    ///
    /// The deduced moves of one full technique run come first; any cells the
    /// run left empty follow in row-major order as [`FORCED_MOVE`] reveals,
    /// so the path always covers every empty cell exactly once.
    #[must_use]
    pub fn solution_path(&self, puzzle: &Grid, solution: &Grid) -> Vec<Move> {
        let mut moves = self.solver.assess(puzzle).moves;

        let mut grid = puzzle.clone();
        for deduced in &moves {
            grid.set(deduced.position(), deduced.value);
        }
        let remaining: Vec<_> = grid.empty_positions().collect();
        for pos in remaining {
            moves.push(Move::with_reason(
                pos,
                solution.value(pos),
                FORCED_MOVE,
                Tier::Backtracking,
                "Completing puzzle from solution.",
            ));
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use cluesmith_core::Position;

    use super::*;

    const SOLUTION: &str = "
        123 456 789
        456 789 123
        789 123 456
        214 365 897
        365 897 214
        897 214 365
        531 642 978
        642 978 531
        978 531 642
    ";

    fn solution() -> Grid {
        SOLUTION.parse().unwrap()
    }

    #[test]
    fn test_hint_reports_a_deduced_move() {
        let mut puzzle = solution();
        puzzle.clear(Position::new(4, 4));

        let hint = HintEngine::new().hint(&puzzle, &solution()).unwrap();
        assert_eq!(hint.position(), Position::new(4, 4));
        assert_eq!(hint.value, 9);
        assert_eq!(hint.strategy, "Single");
        assert_eq!(hint.reason, None);
    }

    #[test]
    fn test_hint_on_completed_grid_is_none() {
        assert_eq!(HintEngine::new().hint(&solution(), &solution()), None);
    }

    #[test]
    fn test_hint_falls_back_to_solution_when_stuck() {
        // An empty roster can never deduce, so the hint reveals the first
        // empty cell from the solution.
        let engine = HintEngine::with_solver(TechniqueSolver::new(Vec::new()));
        let mut puzzle = solution();
        puzzle.clear(Position::new(2, 3));
        puzzle.clear(Position::new(7, 7));

        let hint = engine.hint(&puzzle, &solution()).unwrap();
        assert_eq!(hint.position(), Position::new(2, 3));
        assert_eq!(hint.value, 1);
        assert_eq!(hint.strategy, FORCED_MOVE);
        assert_eq!(hint.difficulty(), 5);
        assert_eq!(
            hint.reason.as_deref(),
            Some("This is the correct value for this cell")
        );
    }

    #[test]
    fn test_optimal_moves_respects_limit() {
        let mut puzzle = solution();
        for pos in [
            Position::new(0, 0),
            Position::new(3, 3),
            Position::new(5, 7),
            Position::new(8, 1),
        ] {
            puzzle.clear(pos);
        }

        let moves = HintEngine::new().optimal_moves(&puzzle, &solution(), 3);
        assert_eq!(moves.len(), 3);
        assert!(moves.iter().all(|m| m.strategy == "Single"));
    }

    #[test]
    fn test_solution_path_covers_every_empty_cell() {
        let puzzle: Grid = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();
        let solution: Grid = "
            534 678 912
            672 195 348
            198 342 567
            859 761 423
            426 853 791
            713 924 856
            961 537 284
            287 419 635
            345 286 179
        "
        .parse()
        .unwrap();

        let path = HintEngine::new().solution_path(&puzzle, &solution);
        assert_eq!(path.len(), 81 - puzzle.clue_count());

        let mut grid = puzzle;
        for m in &path {
            assert!(grid.is_cell_empty(m.position()));
            assert_eq!(m.value, solution.value(m.position()));
            grid.set(m.position(), m.value);
        }
        assert_eq!(grid, solution);
    }

    #[test]
    fn test_solution_path_appends_reveals_when_stuck() {
        // With no techniques at all, the whole path is row-major reveals.
        let engine = HintEngine::with_solver(TechniqueSolver::new(Vec::new()));
        let mut puzzle = solution();
        puzzle.clear(Position::new(8, 8));
        puzzle.clear(Position::new(0, 0));

        let path = engine.solution_path(&puzzle, &solution());
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].position(), Position::new(0, 0));
        assert_eq!(path[1].position(), Position::new(8, 8));
        assert!(path.iter().all(|m| m.strategy == FORCED_MOVE && m.difficulty() == 5));
        assert_eq!(
            path[0].reason.as_deref(),
            Some("Completing puzzle from solution.")
        );
    }
}
