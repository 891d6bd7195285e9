//! Packs a board into a single `u64` fingerprint and back.
//!
//! Tiles are written left to right into fixed-width fields, most
//! significant field first. The field is just wide enough for the largest
//! tile value, so a 4×4 board fills all 64 bits.

use crate::puzzle::Board;

pub type Code = u64;

/// Largest side whose fingerprint fits in a [`Code`].
pub const MAX_SIDE: usize = 4;

/// Bits per tile for a board of side `size`.
pub fn field_width(size: usize) -> u32 {
    let largest = (size * size).saturating_sub(1);
    (usize::BITS - largest.leading_zeros()).max(1)
}

/// Whether boards of side `size` can be fingerprinted.
pub fn supports(size: usize) -> bool {
    (2..=16).contains(&size) && size * size * field_width(size) as usize <= Code::BITS as usize
}

pub fn encode(board: &Board) -> Code {
    let width = field_width(board.size());
    board
        .tiles()
        .iter()
        .fold(0, |code, &tile| (code << width) | Code::from(tile))
}

/// Inverse of [`encode`]. Only meaningful for codes that `encode` produced
/// for the same `size`; nothing is validated.
pub fn decode(mut code: Code, size: usize) -> Board {
    let width = field_width(size);
    let mask = (1 << width) - 1;
    let mut tiles = vec![0u8; size * size];

    for slot in tiles.iter_mut().rev() {
        *slot = (code & mask) as u8;
        code >>= width;
    }

    Board::from_raw(size, tiles)
}
