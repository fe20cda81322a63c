// ============================================================================
// Utilities Module
// Call timing and logging helpers
// ============================================================================

mod timing;

#[cfg(feature = "logging")]
mod logging;

#[cfg(test)]
pub(crate) mod capture;

pub use timing::{format_elapsed, time_it, try_time_it, ScopedTimer, TimedCall};

#[cfg(feature = "logging")]
pub use logging::init_logging;
