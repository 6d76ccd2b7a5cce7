// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the pose decoding library.

use std::fmt;

/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Main error type for the pose decoding library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Invalid decoder configuration (bad threshold, stride, or radius).
    ConfigError(String),
    /// Tensor shape does not match the expected part/edge channel layout.
    ShapeError(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::ShapeError(msg) => write!(f, "Shape error: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}
