//! Logging setup.
//!
//! The subscriber is constructed explicitly and installed as the default only
//! for the lifetime of the returned [`Telemetry`] guard. Dropping the guard at
//! shutdown uninstalls it.

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

/// Owns the installed log subscriber.
pub struct Telemetry {
    _guard: DefaultGuard,
}

impl Telemetry {
    /// Installs a formatted subscriber at `info` level, unless `RUST_LOG`
    /// says otherwise.
    ///
    /// The subscriber is scoped to the calling thread, so the runtime driving
    /// the run must be single-threaded.
    pub fn init() -> Self {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish();

        Self {
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }
}
