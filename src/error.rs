//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds (must be 1-9)")]
    InvalidPosition { position: usize },

    #[error("invalid move: position {position} is out of bounds or already occupied")]
    InvalidMove { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("invalid symbol '{input}' (expected 'X' or 'O')")]
    InvalidSymbol { input: String },

    #[error("invalid turn order '{input}' (expected 'Me' or 'AI')")]
    InvalidTurnOrder { input: String },

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
