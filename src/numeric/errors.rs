// ============================================================================
// Numeric Errors
// Error types for limit resolution and distance computation
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a limit specification was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LimitErrorKind {
    /// Input string was empty (or only whitespace)
    Empty,
    /// Input could not be parsed as an integer or a percentage
    Unparseable,
    /// Percentage fraction outside [0, 1], or NaN
    PercentageOutOfRange,
}

/// Errors produced by the numeric helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Malformed or out-of-range limit specification
    InvalidLimit(LimitErrorKind),
    /// The two vectors passed to a distance function differ in length
    LengthMismatch { left: usize, right: usize },
}

impl fmt::Display for LimitErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitErrorKind::Empty => write!(f, "empty limit"),
            LimitErrorKind::Unparseable => write!(f, "could not parse value"),
            LimitErrorKind::PercentageOutOfRange => {
                write!(f, "percentage must lie within [0, 1]")
            },
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidLimit(kind) => write!(f, "invalid limit: {}", kind),
            NumericError::LengthMismatch { left, right } => write!(
                f,
                "length mismatch: left vector has {} elements, right has {}",
                left, right
            ),
        }
    }
}

impl std::error::Error for NumericError {}

impl From<LimitErrorKind> for NumericError {
    fn from(kind: LimitErrorKind) -> Self {
        NumericError::InvalidLimit(kind)
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
