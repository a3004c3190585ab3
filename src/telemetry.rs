//! Opt-in tracing setup for hosts embedding the chart core.
//!
//! The library only emits `tracing` events. Installing a subscriber is left
//! to the host, either through these helpers or its own setup.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER_DIRECTIVE: &str = "info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG` or `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"area_graph=trace"` to follow every pointer event.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
