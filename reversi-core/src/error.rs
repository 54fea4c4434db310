//! Engine error types

use serde::{Deserialize, Serialize};

use crate::board::Pos;

/// Why a placement on an in-bounds cell was refused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The cell already holds a disc
    Occupied,
    /// No direction brackets an opponent run
    NoCapture,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::Occupied => write!(f, "cell is occupied"),
            RejectReason::NoCapture => write!(f, "no discs would be captured"),
        }
    }
}

/// Errors returned by the board engine
///
/// All of these are ordinary outcomes of caller input; none leaves the
/// engine in a modified state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("position {pos} is outside the {width}x{height} board")]
    OutOfBounds { pos: Pos, width: u8, height: u8 },

    #[error("invalid move at {pos}: {reason}")]
    InvalidMove { pos: Pos, reason: RejectReason },

    #[error("game is already over")]
    GameAlreadyOver,

    #[error("invalid board dimensions {width}x{height} (both must be even and between 4 and 26)")]
    InvalidDimensions { width: u8, height: u8 },

    #[error("cannot parse position {0:?} (expected \"x,y\")")]
    ParsePos(String),

    #[error("cannot parse board: {0}")]
    ParseBoard(String),
}

impl EngineError {
    /// True for rule violations the caller should re-prompt on
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, EngineError::InvalidMove { .. })
    }
}
