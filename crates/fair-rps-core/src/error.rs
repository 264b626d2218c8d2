//! Error types shared across the crate.

use thiserror::Error;

/// Errors raised while validating a move set
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least 3 moves are required, got {0}")]
    TooFewMoves(usize),

    #[error("the number of moves must be odd, got {0}")]
    EvenMoveCount(usize),

    #[error("move {0:?} appears more than once")]
    DuplicateMove(String),
}

/// Errors from rule queries and round play
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move set: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown move: {0}")]
    UnknownMove(String),

    #[error("commitment must be published before a move is accepted")]
    CommitmentNotPublished,

    #[error("round already resolved")]
    AlreadyResolved,
}
