use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use govchain_common::{GovError, Result};

pub const FALLBACK_FILTER: &str = "info";

/// Swaps the filter of the subscriber installed by [`init`].
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
}

impl LogHandle {
    /// Replaces the active filter with `directive`.
    pub fn set_filter(&self, directive: &str) -> Result<()> {
        let filter = EnvFilter::try_new(directive)
            .map_err(|e| GovError::Config(format!("invalid log filter {:?}: {}", directive, e)))?;
        self.filter
            .reload(filter)
            .map_err(|e| GovError::Config(format!("log filter not applied: {}", e)))
    }

    /// Applies the config's filter unless `RUST_LOG` is set, which always wins.
    pub fn apply_config_filter(&self, directive: &str) -> Result<()> {
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            return Ok(());
        }
        self.set_filter(directive)
    }
}

/// Installs the global subscriber, filtered by `RUST_LOG` or `info`.
///
/// Called before anything else logs, so config bootstrap messages are
/// kept. Logs go to stderr so they never interleave with command output.
pub fn init() -> LogHandle {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));
    let (filter_layer, handle) = reload::Layer::new(filter);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // a second init (tests) is not an error worth reporting
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(stderr_layer)
        .try_init();

    LogHandle { filter: handle }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_can_be_replaced_after_init() {
        let handle = init();
        tracing::info!("logging installed before config load");

        assert!(handle.set_filter("debug").is_ok());
        assert!(handle.set_filter("govchain_engine=trace,warn").is_ok());
        assert!(matches!(
            handle.set_filter("govchain=notalevel"),
            Err(GovError::Config(_))
        ));
    }
}
