//! Brute-force references shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use npuzzle::codec::{self, Code};
use npuzzle::Board;

/// Exact distance to the goal for every board reachable from it.
pub fn bfs_distances(size: usize) -> HashMap<Code, u32> {
    let goal = Board::goal(size);
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();

    dist.insert(codec::encode(&goal), 0);
    queue.push_back(goal);

    while let Some(board) = queue.pop_front() {
        let d = dist[&codec::encode(&board)];
        for (_, next) in board.neighbors() {
            let code = codec::encode(&next);
            if !dist.contains_key(&code) {
                dist.insert(code, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Calls `f` once for every ordering of `0..len` (Heap's algorithm).
pub fn for_each_permutation(len: usize, mut f: impl FnMut(&[u8])) {
    let mut items: Vec<u8> = (0..len as u8).collect();
    let mut counters = vec![0usize; len];
    f(&items);

    let mut i = 1;
    while i < len {
        if counters[i] < i {
            if i % 2 == 0 {
                items.swap(0, i);
            } else {
                items.swap(counters[i], i);
            }
            f(&items);
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}

/// Every board in `path` is one slide away from the one before it.
pub fn assert_single_slides(path: &[Board]) {
    for pair in path.windows(2) {
        assert!(
            pair[0].neighbors().any(|(_, next)| next == pair[1]),
            "not one slide apart:\n{}\n{}",
            pair[0],
            pair[1]
        );
    }
}
