//! Error types.
//!
//! Illegal moves are not errors: the engine answers them with
//! `Status::Illegal`. The variants here are the hard failures.

use thiserror::Error;

use super::player::PlayerColor;
use super::state::Status;

/// Fatal engine failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("game is over, no further moves can be applied")]
    GameOver,

    #[error("board radius must be between 1 and 5, got {0}")]
    InvalidBoardSize(u8),
}

/// Unrecognized configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown {what} {value:?}, expected one of: {expected}")]
    UnknownValue {
        what: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// A move string that does not describe any move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse move {input:?}: {reason}")]
pub struct MoveParseError {
    pub input: String,
    pub reason: String,
}

impl MoveParseError {
    pub fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failures of the player protocol.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("{color} diverged from the referee: reported {reported:?}, local copy derived {derived:?}")]
    StatusMismatch {
        color: PlayerColor,
        reported: Status,
        derived: Status,
    },

    #[error("{0} has no requested move awaiting confirmation")]
    NothingToConfirm(PlayerColor),

    #[error("move input for {0} was closed")]
    InputClosed(PlayerColor),

    #[error("failed to write prompt: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
