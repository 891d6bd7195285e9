use std::fmt;

use crate::error::{PuzzleError, Result};

/// Direction the blank travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order used by the search.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn as_offset(&self) -> Point {
        match self {
            Move::Up => Point::new(0, -1),
            Move::Down => Point::new(0, 1),
            Move::Left => Point::new(-1, 0),
            Move::Right => Point::new(1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// The move that takes the blank from `from` to `to`, if they are adjacent.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        let delta = Point::new(to.x - from.x, to.y - from.y);
        Move::ALL.into_iter().find(|m| m.as_offset() == delta)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Grid coordinate: `x` is the column, `y` the row (0 at the top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Returned when a board has no blank.
    pub const NONE: Point = Point::new(-1, -1);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }

    fn within(self, size: usize) -> bool {
        let n = size as i32;
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }

    fn index(self, size: usize) -> usize {
        self.y as usize * size + self.x as usize
    }
}

/// Linear scan for the blank tile in row-major `tiles` of side `size`.
pub fn find_zero(tiles: &[u8], size: usize) -> Option<Point> {
    tiles
        .iter()
        .position(|&t| t == 0)
        .map(|i| Point::new((i % size) as i32, (i / size) as i32))
}

/// An n×n arrangement of tiles `0..n²`, with 0 as the blank.
///
/// Boards are values: moving produces a new board and never touches the
/// original.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u8>,
}

impl Board {
    /// The solved board: `1..n²` in row-major order, blank last.
    pub fn goal(size: usize) -> Self {
        let cells = size * size;
        let tiles = (1..cells)
            .map(|v| v as u8)
            .chain(std::iter::once(0))
            .take(cells)
            .collect();
        Self { size, tiles }
    }

    /// Builds a board from row-major tiles, checking that they form a
    /// square permutation of `0..n²`.
    pub fn from_tiles(tiles: Vec<u8>) -> Result<Self> {
        let len = tiles.len();
        let size = (1..=16).find(|s| s * s >= len).unwrap_or(0);
        if size < 2 || size * size != len {
            return Err(PuzzleError::InvalidBoard(format!(
                "{} tiles do not form a square board of side 2 or more",
                len
            )));
        }

        let mut seen = vec![false; len];
        for &t in &tiles {
            let slot = seen.get_mut(t as usize).ok_or_else(|| {
                PuzzleError::InvalidBoard(format!("tile {} out of range 0..{}", t, len))
            })?;
            if *slot {
                return Err(PuzzleError::InvalidBoard(format!("tile {} appears twice", t)));
            }
            *slot = true;
        }

        Ok(Self { size, tiles })
    }

    /// No validation; callers vouch for the tiles.
    pub(crate) fn from_raw(size: usize, tiles: Vec<u8>) -> Self {
        Self { size, tiles }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks(self.size.max(1))
    }

    /// Position of the blank, or [`Point::NONE`] if the board has none.
    pub fn blank(&self) -> Point {
        find_zero(&self.tiles, self.size).unwrap_or(Point::NONE)
    }

    pub fn is_goal(&self) -> bool {
        *self == Board::goal(self.size)
    }

    pub fn try_move(&self, dir: Move) -> Option<Self> {
        move_blank(self, dir.as_offset(), self.blank())
    }

    /// Every board one slide away, in [`Move::ALL`] order. Off-grid
    /// directions are skipped.
    pub fn neighbors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        let blank = self.blank();
        Move::ALL
            .into_iter()
            .filter_map(move |dir| move_blank(self, dir.as_offset(), blank).map(|b| (dir, b)))
    }
}

/// Slides the blank at `blank` by `offset`, swapping it with the tile it
/// lands on. `None` when the blank would leave the grid.
pub fn move_blank(board: &Board, offset: Point, blank: Point) -> Option<Board> {
    let target = blank.offset(offset);
    if !blank.within(board.size) || !target.within(board.size) {
        return None;
    }

    let mut tiles = board.tiles.clone();
    tiles.swap(blank.index(board.size), target.index(board.size));
    Some(Board::from_raw(board.size, tiles))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &val in row {
                write!(f, "{}\t", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
