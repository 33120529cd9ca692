//! Random construction of complete solution grids.

use cluesmith_core::{Grid, GridError, Position};
use rand::{Rng, seq::SliceRandom as _};

struct Frame {
    digits: Vec<u8>,
    next: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(rng: &mut R, size: u8) -> Self {
        let mut digits: Vec<u8> = (1..=size).collect();
        digits.shuffle(rng);
        Self { digits, next: 0 }
    }
}

/// Builds a random fully solved grid of the given size.
///
/// Cells are filled in row-major order by backtracking, trying the digits of
/// each cell in an order shuffled by `rng`. The walk is iterative with an
/// explicit frame stack, so deep searches never touch the call stack. The
/// same RNG state always produces the same grid.
///
/// # Errors
///
/// Returns an error if `size` is not a supported grid size.
pub fn filled_grid<R: Rng + ?Sized>(rng: &mut R, size: u8) -> Result<Grid, GridError> {
    let mut grid = Grid::empty(usize::from(size))?;
    let cells: Vec<Position> = grid.positions().collect();
    let mut stack = vec![Frame::new(rng, size)];

    loop {
        let depth = stack.len();
        let Some(frame) = stack.last_mut() else { break };
        let pos = cells[depth - 1];
        grid.clear(pos);

        let mut placed = false;
        while frame.next < frame.digits.len() {
            let digit = frame.digits[frame.next];
            frame.next += 1;
            if grid.can_place(pos, digit) {
                grid.set(pos, digit);
                placed = true;
                break;
            }
        }

        if !placed {
            stack.pop();
        } else if depth == cells.len() {
            return Ok(grid);
        } else {
            stack.push(Frame::new(rng, size));
        }
    }

    unreachable!("an empty grid always has a completion")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PuzzleSeed;

    #[test]
    fn test_fills_a_valid_nine_by_nine() {
        let mut rng = PuzzleSeed::from_phrase("fill").rng();
        let grid = filled_grid(&mut rng, 9).unwrap();
        assert!(grid.is_solved());
        assert_eq!(grid.clue_count(), 81);
    }

    #[test]
    fn test_fills_other_sizes() {
        let mut rng = PuzzleSeed::from_phrase("fill").rng();
        assert!(filled_grid(&mut rng, 4).unwrap().is_solved());
        assert!(filled_grid(&mut rng, 16).unwrap().is_solved());
    }

    #[test]
    fn test_same_seed_same_grid() {
        let seed = PuzzleSeed::from_phrase("determinism");
        let a = filled_grid(&mut seed.rng(), 9).unwrap();
        let b = filled_grid(&mut seed.rng(), 9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = filled_grid(&mut PuzzleSeed::from_phrase("a").rng(), 9).unwrap();
        let b = filled_grid(&mut PuzzleSeed::from_phrase("b").rng(), 9).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_unsupported_size() {
        let mut rng = PuzzleSeed::from_phrase("fill").rng();
        assert!(filled_grid(&mut rng, 7).is_err());
    }
}
