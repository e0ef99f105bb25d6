//! Error types for boundary search.

use core::fmt;

/// Error type for boundary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum U8pError {
    /// Offset is too small or not strictly inside the buffer.
    InvalidOffset,
    /// No lead byte in the lookback window.
    InvalidEncoding,
    /// Buffer is empty or too short (strict policy only).
    InvalidLength,
}

impl fmt::Display for U8pError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOffset => write!(f, "invalid offset"),
            Self::InvalidEncoding => write!(f, "invalid utf8"),
            Self::InvalidLength => write!(f, "invalid length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for U8pError {}

/// Result type for boundary search.
pub type Result<T> = core::result::Result<T, U8pError>;
