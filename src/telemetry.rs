//! Opt-in log output for the layout engine.
//!
//! All events come from the `api` layer; the geometry in `core` stays silent.
//! `debug` covers each layout pass (pie or cartesian, with series and category
//! counts), engine mount, update and resize, dropped annotations and empty pies.
//! `trace` covers per-series detail such as data points skipped for unknown
//! categories and pie series ignored in axis charts.

/// Filter used when `RUST_LOG` is unset or unparsable: layout passes from this
/// crate, warnings from everything else.
pub const DEFAULT_FILTER: &str = "warn,chart_layout=debug";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
