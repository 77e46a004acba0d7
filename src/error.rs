//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("coordinates ({row}, {col}) are out of range (rows and columns run 0-2)")]
    OutOfRange { row: usize, col: usize },

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    InvalidMove { row: usize, col: usize },

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("round already over")]
    RoundOver,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
