//! Error handling for CurveKit
//!
//! Provides the error types shared by every layer of the editor:
//! - Path errors (malformed models, unrecognized legacy joints, parse failures)
//! - The unified [`Error`] wrapper used in public APIs
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Path error type
///
/// Represents a model that cannot be drawn: a programming or data error
/// rather than a runtime condition, so callers are expected to fail fast.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A path must hold at least one node
    #[error("Path has no nodes")]
    Empty,

    /// A drawing node has no anchor before it to draw from
    #[error("Node {index} has no predecessor anchor to draw from")]
    MissingPredecessor {
        /// Index of the offending node.
        index: usize,
    },

    /// A legacy joint sequence whose control pattern matches no segment shape
    #[error("Joint {index} has an outgoing control on its predecessor but no incoming control")]
    UnrecognizedJoint {
        /// Index of the joint that could not be converted.
        index: usize,
    },

    /// Path description text could not be parsed
    #[error("Parse error at byte {position}: {reason}")]
    Parse {
        /// Byte offset into the description where parsing stopped.
        position: usize,
        /// What was expected or found.
        reason: String,
    },
}

impl PathError {
    /// Create a parse error at the given byte offset
    pub fn parse(position: usize, reason: impl Into<String>) -> Self {
        PathError::Parse {
            position,
            reason: reason.into(),
        }
    }
}

/// Main error type for CurveKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Path error
    #[error(transparent)]
    Path(#[from] PathError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a path error
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
