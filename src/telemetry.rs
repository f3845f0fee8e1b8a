//! Telemetry helpers for applications embedding `tablechart`.
//!
//! Tracing setup stays explicit and opt-in: consumers either call
//! [`init_default_tracing`] or wire their own `tracing` subscriber and
//! filters. Derivation spans log under the `tablechart` target.

/// Default filter directive when `RUST_LOG` is unset: crate events at
/// `info`, everything else silent.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "tablechart=info";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature
/// is enabled, honoring `RUST_LOG` and falling back to `tablechart=info`.
///
/// Returns `true` when a subscriber was installed. Returns `false` when the
/// feature is disabled or the host application already set a global
/// subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
