//! Error types for game operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left to draw, even after shuffling the discards back in.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

impl From<ShoeError> for RoundError {
    fn from(err: ShoeError) -> Self {
        match err {
            ShoeError::Empty => Self::EmptyShoe,
        }
    }
}

/// Errors that can occur when parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command word is not known.
    #[error("unrecognized command: {0}")]
    Unrecognized(String),
    /// The command does not take an argument.
    #[error("command `{0}` takes no argument")]
    UnexpectedArgument(&'static str),
}
