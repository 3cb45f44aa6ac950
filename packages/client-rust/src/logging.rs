//! Process-level tracing setup.
//!
//! Library code only emits `tracing` events. Binaries and tests that want to
//! see them call [`init_logging`] once at startup.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::LoggingError;

/// Environment variable holding the filter directives, `RUST_LOG` syntax.
pub const LOG_ENV: &str = "SUPPORT_LOG";

/// Installs a compact `fmt` subscriber filtered by [`LOG_ENV`], defaulting to `warn`.
///
/// # Errors
///
/// Returns [`LoggingError`] if a global subscriber is already installed.
pub fn init_logging() -> Result<(), LoggingError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| LoggingError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        let _ = init_logging();
        assert!(init_logging().is_err());
    }
}
