// ============================================================================
// Logging Setup
// Optional subscriber installation for binaries and demos
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// The filter comes from `RUST_LOG` when it is set and valid, otherwise from
/// `default_directive` (e.g. `"numeric_utils=debug"`). Returns an error
/// instead of panicking when a global subscriber is already installed.
pub fn init_logging(
    default_directive: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}
