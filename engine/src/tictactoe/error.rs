use super::types::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfBounds,
    Occupied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidMove { mv: Move, reason: InvalidMoveReason },
    InvalidBoard(String),
}

impl EngineError {
    pub fn out_of_bounds(mv: Move) -> Self {
        EngineError::InvalidMove { mv, reason: InvalidMoveReason::OutOfBounds }
    }

    pub fn occupied(mv: Move) -> Self {
        EngineError::InvalidMove { mv, reason: InvalidMoveReason::Occupied }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidMove { mv, reason: InvalidMoveReason::OutOfBounds } => {
                write!(f, "Invalid move {}: position out of bounds", mv)
            }
            EngineError::InvalidMove { mv, reason: InvalidMoveReason::Occupied } => {
                write!(f, "Invalid move {}: cell is already marked", mv)
            }
            EngineError::InvalidBoard(message) => write!(f, "Invalid board: {}", message),
        }
    }
}

impl std::error::Error for EngineError {}
