use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{PuzzleError, Result};
use crate::puzzle::Board;

/// Number of pairs `i < j` of non-blank tiles with `tiles[j] < tiles[i]`.
pub fn count_inversions(tiles: &[u8]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// Parity law of the n-puzzle.
///
/// Odd sides: solvable iff the inversion count is even. Even sides: solvable
/// iff the parity of the blank's row (0 at the top) differs from the parity
/// of the inversion count.
pub fn is_solvable(board: &Board) -> bool {
    let inversions = count_inversions(board.tiles());

    if board.size() % 2 == 1 {
        inversions % 2 == 0
    } else {
        let blank_row = board.blank().y as usize;
        (inversions + blank_row) % 2 == 1
    }
}

/// Produces uniformly random solvable boards from one owned random source.
pub struct Generator<R> {
    rng: R,
}

impl Generator<StdRng> {
    /// Seeded generators are reproducible; `None` seeds from the OS.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Shuffles `0..size²` until the permutation passes [`is_solvable`].
    /// Every shuffle is accepted with probability 1/2.
    pub fn create_board(&mut self, size: usize) -> Result<Board> {
        if size < 2 || size * size > usize::from(u8::MAX) + 1 {
            return Err(PuzzleError::UnsupportedSize(size));
        }

        let mut tiles: Vec<u8> = (0..size * size).map(|v| v as u8).collect();
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            tiles.shuffle(&mut self.rng);

            let board = Board::from_tiles(tiles.clone())?;
            if is_solvable(&board) {
                debug!("Generated solvable {}x{} board after {} shuffles", size, size, attempts);
                return Ok(board);
            }
        }
    }
}
