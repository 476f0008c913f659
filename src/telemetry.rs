//! Opt-in `tracing` setup for hosts embedding the layout engine.
//!
//! Layout logs plot dimensions and domain sizes at `debug`, per-series offsets
//! at `trace`, and collapsed plot areas or formatter fallbacks at `warn`.
//! Hosts that already install a subscriber need nothing from this module.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "grouped_bar_rs=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, or by
/// `DEFAULT_FILTER` when the variable is unset.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(None)
}

/// Like `init_default_tracing`, with an explicit filter directive that takes
/// precedence over `RUST_LOG`.
#[must_use]
pub fn init_tracing(filter: Option<&str>) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match filter {
            Some(directive) => EnvFilter::new(directive),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = filter;
        false
    }
}
