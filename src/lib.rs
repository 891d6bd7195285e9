//! Sliding-tile n-puzzle solver.
//!
//! Boards are generated at random (always solvable), then solved with a
//! greedy best-first search guided by Manhattan distance plus linear
//! conflicts. Visited boards are keyed by a packed `u64` fingerprint, which
//! limits the solver to sides 2 through 4.

pub mod codec;
pub mod config;
pub mod error;
pub mod generator;
pub mod heuristic;
pub mod path;
pub mod presentation;
pub mod puzzle;
pub mod solver;

pub use codec::Code;
pub use config::SolveConfig;
pub use error::{PuzzleError, Result};
pub use generator::Generator;
pub use puzzle::{Board, Move, Point};
pub use solver::{solve, Solution, SolveReport, Solver};
