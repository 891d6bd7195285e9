use std::collections::HashMap;

use crate::codec::{self, Code};
use crate::error::{PuzzleError, Result};
use crate::puzzle::Board;

/// Fingerprint of every discovered board to the fingerprint it was reached
/// from. The start board maps to `None`.
pub type ClosedMap = HashMap<Code, Option<Code>>;

/// Walks parent links from `goal` back to the root and returns the number
/// of moves together with the boards in start-to-goal order.
pub fn reverse_solution(goal: Code, closed: &ClosedMap, size: usize) -> Result<(usize, Vec<Board>)> {
    let mut path = Vec::new();
    let mut current = goal;

    loop {
        path.push(codec::decode(current, size));

        match closed.get(&current) {
            Some(Some(parent)) => current = *parent,
            Some(None) => break,
            None => return Err(PuzzleError::BrokenChain(current)),
        }

        // a longer walk than there are entries means the links loop
        if path.len() > closed.len() {
            return Err(PuzzleError::BrokenChain(current));
        }
    }

    path.reverse();
    Ok((path.len() - 1, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Move;

    fn chain(boards: &[Board]) -> ClosedMap {
        let mut closed = ClosedMap::new();
        let mut parent = None;
        for b in boards {
            let code = codec::encode(b);
            closed.insert(code, parent);
            parent = Some(code);
        }
        closed
    }

    #[test]
    fn walks_back_to_the_root() {
        let goal = Board::goal(3);
        let one = goal.try_move(Move::Up).unwrap();
        let two = one.try_move(Move::Left).unwrap();

        let mut closed = chain(&[two.clone(), one.clone(), goal.clone()]);
        // unrelated entries do not disturb the walk
        let side = two.try_move(Move::Up).unwrap();
        closed.insert(codec::encode(&side), Some(codec::encode(&two)));

        let (steps, path) = reverse_solution(codec::encode(&goal), &closed, 3).unwrap();
        assert_eq!(steps, 2);
        assert_eq!(path, vec![two, one, goal]);
    }

    #[test]
    fn root_alone_is_zero_steps() {
        let goal = Board::goal(2);
        let closed = chain(&[goal.clone()]);
        let (steps, path) = reverse_solution(codec::encode(&goal), &closed, 2).unwrap();
        assert_eq!(steps, 0);
        assert_eq!(path, vec![goal]);
    }

    #[test]
    fn missing_link_is_reported() {
        let goal = Board::goal(2);
        let closed = ClosedMap::new();
        let code = codec::encode(&goal);
        assert!(matches!(
            reverse_solution(code, &closed, 2),
            Err(PuzzleError::BrokenChain(c)) if c == code
        ));
    }

    #[test]
    fn looping_links_are_reported() {
        let a = Board::goal(2);
        let b = a.try_move(Move::Up).unwrap();
        let mut closed = ClosedMap::new();
        closed.insert(codec::encode(&a), Some(codec::encode(&b)));
        closed.insert(codec::encode(&b), Some(codec::encode(&a)));
        assert!(matches!(
            reverse_solution(codec::encode(&a), &closed, 2),
            Err(PuzzleError::BrokenChain(_))
        ));
    }
}
