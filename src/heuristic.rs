//! Admissible estimate of the moves left to reach the goal.
//!
//! The estimate is Manhattan distance plus the linear-conflict correction.
//! Two tiles are in linear conflict when both sit in their goal row (or goal
//! column) but in the opposite order to the goal. One of them has to step
//! out of the line and back in, which costs two moves that Manhattan
//! distance does not see.
//!
//! Conflicts are resolved per line by counting how many tiles must leave it
//! so that the rest are already in goal order. For lines holding disjoint
//! conflicting pairs this is exactly one removal per pair. For chains such
//! as `3 2 1` it is two removals, not three, which keeps the estimate from
//! ever exceeding the true distance.

use crate::puzzle::{Board, Point};

/// Where tile `value` sits on the solved board. The blank belongs in the
/// last cell.
pub fn goal_position(value: u8, size: usize) -> Point {
    if value == 0 {
        return Point::new(size as i32 - 1, size as i32 - 1);
    }
    let v = usize::from(value) - 1;
    Point::new((v % size) as i32, (v / size) as i32)
}

pub fn manhattan(board: &Board) -> u32 {
    let size = board.size();
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(i, &tile)| {
            let goal = goal_position(tile, size);
            let x = (i % size) as i32;
            let y = (i / size) as i32;
            (goal.x - x).unsigned_abs() + (goal.y - y).unsigned_abs()
        })
        .sum()
}

/// Linear-conflict correction, rows and columns counted independently.
pub fn linear(board: &Board) -> u32 {
    let size = board.size();
    let tiles = board.tiles();
    let mut removals = 0;
    let mut line = Vec::with_capacity(size);

    for row in 0..size {
        line.clear();
        for col in 0..size {
            let tile = tiles[row * size + col];
            if tile == 0 {
                continue;
            }
            let goal = goal_position(tile, size);
            if goal.y as usize == row {
                line.push(goal.x);
            }
        }
        removals += line_removals(&line);
    }

    for col in 0..size {
        line.clear();
        for row in 0..size {
            let tile = tiles[row * size + col];
            if tile == 0 {
                continue;
            }
            let goal = goal_position(tile, size);
            if goal.x as usize == col {
                line.push(goal.y);
            }
        }
        removals += line_removals(&line);
    }

    2 * removals
}

pub fn heuristic(board: &Board) -> u32 {
    manhattan(board) + linear(board)
}

/// Tiles that must leave a line so the remaining goal offsets increase:
/// the line length minus its longest increasing subsequence.
fn line_removals(goals: &[i32]) -> u32 {
    let mut longest = vec![1usize; goals.len()];
    for j in 0..goals.len() {
        for i in 0..j {
            if goals[i] < goals[j] {
                longest[j] = longest[j].max(longest[i] + 1);
            }
        }
    }
    let kept = longest.into_iter().max().unwrap_or(0);
    (goals.len() - kept) as u32
}
