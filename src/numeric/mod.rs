// ============================================================================
// Numeric Module
// Count limits and the error types shared by the crate
// ============================================================================
//
// This module provides:
// - Limit: Absent / Fixed / Percentage clamp policy, parsed from text at the boundary
// - calc_limit: applies a Limit to a count
// - NumericError: Error types for limits and distance computations

mod errors;
mod limit;

pub use errors::{LimitErrorKind, NumericError, NumericResult};
pub use limit::{calc_limit, Limit};
