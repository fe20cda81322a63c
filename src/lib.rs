// ============================================================================
// Numeric Utilities Library
// Count limits, Euclidean distances and call timing
// ============================================================================

//! # Numeric Utils
//!
//! Small, independent numeric helpers.
//!
//! ## Features
//!
//! - **Count limits**: clamp a count by a fixed value or a percentage
//!   ([`numeric::calc_limit`], parsed from text such as `"5"` or `"%70"`)
//! - **Euclidean distances** over an optional prefix of two vectors, for real
//!   and complex elements ([`distance::euclidean_distance`],
//!   [`distance::euclidean_distance_squared`])
//! - **Call timing** reported through `tracing` at DEBUG level
//!   ([`utils::time_it`])
//!
//! ## Example
//!
//! ```rust
//! use numeric_utils::prelude::*;
//!
//! let limit: Limit = "%70".parse()?;
//! assert_eq!(calc_limit(&limit, 100)?, 70);
//!
//! let d = time_it("distance", || euclidean_distance(&[0.0, 0.0], &[3.0, 4.0], None))?;
//! assert_eq!(d, 5.0);
//! # Ok::<(), NumericError>(())
//! ```

pub mod distance;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::distance::{euclidean_distance, euclidean_distance_squared, DistanceElement};
    pub use crate::numeric::{calc_limit, Limit, LimitErrorKind, NumericError, NumericResult};
    pub use crate::utils::{format_elapsed, time_it, try_time_it, ScopedTimer, TimedCall};
}
