use thiserror::Error;

use crate::codec::Code;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Unsupported board side {0} (supported: 2..={max})", max = crate::codec::MAX_SIDE)]
    UnsupportedSize(usize),
    #[error("Invalid board: {0}")]
    InvalidBoard(String),
    #[error("Board is not solvable")]
    Unsolvable,
    #[error("Search cancelled after {0} expansions")]
    Cancelled(u64),
    #[error("Expansion limit of {0} reached")]
    ExpansionLimit(u64),
    #[error("Frontier exhausted without reaching the goal")]
    FrontierExhausted,
    #[error("Closed map has no parent link for board {0:#x}")]
    BrokenChain(Code),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
