use std::fmt;

use fleetmaster_types::TripStatus;

use crate::DocKind;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// No document with the given id
    NotFound(String),

    /// Document exists but is a different entity than the operation expects
    WrongKind { expected: DocKind, found: DocKind },

    /// Trip status change violates the lifecycle table
    InvalidTransition { from: TripStatus, to: TripStatus },

    /// Operation requires a persisted document (non-empty id)
    MissingId,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(id) => write!(f, "No document with id {}", id),
            Error::WrongKind { expected, found } => {
                write!(f, "Expected a {} document, found {}", expected, found)
            }
            Error::InvalidTransition { from, to } => {
                write!(f, "Illegal trip status change: {} -> {}", from, to)
            }
            Error::MissingId => write!(f, "Operation requires a persisted document id"),
        }
    }
}

impl std::error::Error for Error {}
