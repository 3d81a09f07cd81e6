//! Opt-in `tracing` subscriber setup for the CLI and embedding hosts.
//!
//! The library only emits events. Nothing is printed unless a subscriber is
//! installed, either here or by the host.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "scatter_marginals=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, or
/// [`DEFAULT_LOG_FILTER`] when the variable is unset or invalid.
///
/// Returns `false` without the `telemetry` feature, or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default_filter(DEFAULT_LOG_FILTER)
}

#[must_use]
pub fn init_tracing_with_default_filter(default_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_filter;
        false
    }
}
