use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board dimensions must be at least 1x1")]
    InvalidSize,
    #[error("scarcity must be a probability in [0, 1)")]
    InvalidScarcity,
    #[error("coordinates outside the board")]
    OutOfBounds,
    #[error("hazard layout does not match the declared board size")]
    ShapeMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
