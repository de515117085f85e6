#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    /// The move selector was asked to move on a board that has no legal move.
    InvalidState(String),
    /// A mark was placed on an occupied cell, off the board, or after the game ended.
    InvalidPlacement(String),
}

impl std::fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicTacToeError::InvalidState(reason) => write!(f, "Invalid state: {}", reason),
            TicTacToeError::InvalidPlacement(reason) => write!(f, "Invalid placement: {}", reason),
        }
    }
}

impl std::error::Error for TicTacToeError {}
