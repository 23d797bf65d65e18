use std::io;
use std::num::ParseIntError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A minimum or maximum was requested from a tree with no elements.
    #[error("empty tree has no minimum or maximum")]
    EmptyTree,

    /// The in-order traversal produced an adjacent pair out of order. This is
    /// a bug in the tree itself, never an expected runtime condition; callers
    /// must propagate it, not retry.
    #[error("keys out of order at in-order position {index}")]
    OutOfOrder { index: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid integer in data file: {0}")]
    Parse(#[from] ParseIntError),
}
