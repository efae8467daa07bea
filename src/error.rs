//! Error types returned by board construction, decoding and move execution.

use crate::board::Point;

/// Why a move was refused by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    /// Point is not empty
    Occupied,
    /// Move retakes a ko on the turn right after it was taken
    Ko,
    /// Placed group would have no liberties and captures nothing
    Suicide,
}

impl std::fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalReason::Occupied => write!(f, "point not empty"),
            IllegalReason::Ko => write!(f, "retakes ko"),
            IllegalReason::Suicide => write!(f, "suicide"),
        }
    }
}

/// Errors produced by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cannot create a board with size {height}x{width}")]
    InvalidDimension { height: usize, width: usize },

    #[error("border specification needs exactly 4 values, got {0}")]
    InvalidBorderSpec(usize),

    #[error("{0} is not a playable color")]
    InvalidColor(String),

    #[error("point ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: IllegalReason,
    },

    #[error("cannot capture a negative amount of stones ({0})")]
    NegativeCaptureCount(i64),

    #[error("malformed board text: {0}")]
    MalformedText(String),

    #[error("history has {boards} boards for {moves} moves")]
    HistoryMismatch { boards: usize, moves: usize },
}

impl BoardError {
    pub(crate) fn out_of_bounds((row, col): Point) -> Self {
        BoardError::OutOfBounds { row, col }
    }

    pub(crate) fn illegal((row, col): Point, reason: IllegalReason) -> Self {
        BoardError::IllegalMove { row, col, reason }
    }

    /// The rule that refused the move, if this is an illegal-move error.
    pub fn illegal_reason(&self) -> Option<IllegalReason> {
        match self {
            BoardError::IllegalMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
