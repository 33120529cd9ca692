//! Bounded solution counting.

use cluesmith_core::{Grid, Position};

/// Counts completions of a puzzle, stopping as soon as `limit` are found.
///
/// Digits are tried in ascending order with an explicit stack, so the count
/// is deterministic and the search aborts the moment the bound is reached.
/// Callers that only care about uniqueness should use
/// [`has_unique_solution`] instead of asking for an exact count.
#[must_use]
pub fn count_solutions(puzzle: &Grid, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    let mut grid = puzzle.clone();
    let cells: Vec<Position> = grid.empty_positions().collect();
    if cells.is_empty() {
        return usize::from(grid.is_solved());
    }

    let size = grid.size();
    let mut count = 0;
    // Each entry is the last digit tried at that depth.
    let mut stack: Vec<u8> = vec![0];

    loop {
        let depth = stack.len();
        let Some(cursor) = stack.last_mut() else { break };
        let pos = cells[depth - 1];
        grid.clear(pos);

        let mut placed = false;
        while *cursor < size {
            *cursor += 1;
            if grid.can_place(pos, *cursor) {
                grid.set(pos, *cursor);
                placed = true;
                break;
            }
        }

        if !placed {
            stack.pop();
        } else if depth == cells.len() {
            count += 1;
            if count >= limit {
                return count;
            }
            // Fall through: the next round clears this cell and tries on.
        } else {
            stack.push(0);
        }
    }
    count
}

/// Returns `true` if the puzzle has exactly one completion.
#[must_use]
pub fn has_unique_solution(puzzle: &Grid) -> bool {
    count_solutions(puzzle, 2) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "
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

    #[test]
    fn test_solved_grid_counts_one() {
        let grid: Grid = SOLVED.parse().unwrap();
        assert_eq!(count_solutions(&grid, 10), 1);
        assert!(has_unique_solution(&grid));
    }

    #[test]
    fn test_proper_puzzle_is_unique() {
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
        assert!(has_unique_solution(&puzzle));
    }

    #[test]
    fn test_detects_multiple_solutions() {
        // Clearing the 1s, 4s, and 7s of rows 0-2 at columns 0, 3, and 6
        // leaves an unavoidable set; the digits can be rearranged, so the
        // puzzle is no longer unique.
        let mut grid: Grid = SOLVED.parse().unwrap();
        for row in 0..3 {
            for col in [0, 3, 6] {
                grid.clear(cluesmith_core::Position::new(row, col));
            }
        }
        assert_eq!(count_solutions(&grid, 2), 2);
        assert!(!has_unique_solution(&grid));
    }

    #[test]
    fn test_limit_caps_the_search() {
        let empty = Grid::empty(4).unwrap();
        assert_eq!(count_solutions(&empty, 5), 5);
        assert_eq!(count_solutions(&empty, 1), 1);
        assert_eq!(count_solutions(&empty, 0), 0);
    }

    #[test]
    fn test_unfillable_puzzle_counts_zero() {
        // (0, 8) sees 1-8 in its row and a 9 in its column, so it has no
        // candidate at all.
        let grid: Grid = "
            123 456 78_
            ___ ___ ___
            ___ ___ __9
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        "
        .parse()
        .unwrap();
        assert_eq!(count_solutions(&grid, 2), 0);
    }
}
