use thiserror::Error;

/// Errors raised when a caller breaks the board or search contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    InvalidMove { row: usize, col: usize },

    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    #[error("unsupported board size {0} (expected 3, 4 or 5)")]
    InvalidBoardSize(usize),

    #[error("cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("invalid cell character '{character}' at row {row}")]
    InvalidCell { character: char, row: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
