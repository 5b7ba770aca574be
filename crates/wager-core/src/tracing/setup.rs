//! Subscriber setup for binaries and test harnesses embedding the engine.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Install a global fmt subscriber filtered by `WAGER_LOG`.
///
/// What each level shows:
/// - `info`: one line per assessment (final confidence, threshold,
///   decision) and one `BatchDiagnostics` line per batch.
/// - `warn`: every sanitized input and ignored user config file.
/// - `debug`: each pipeline stage transition with its intermediate values.
/// - `trace`: every Bayesian update step.
///
/// `WAGER_LOG=wager_confidence=debug` is the usual setting when chasing a
/// surprising decision. Safe to call more than once; only the first call
/// installs anything. The engine crates never call it.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(resolve_filter(std::env::var(LOG_ENV_VAR).ok().as_deref()))
            .init();
    });
}

/// Parse a `WAGER_LOG` value, falling back to `DEFAULT_LOG_FILTER` when it
/// is absent or does not parse.
fn resolve_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_filter_uses_default() {
        let filter = resolve_filter(None).to_string();
        assert!(filter.contains("wager_confidence=info"), "{filter}");
        assert!(filter.contains("wager_core=info"), "{filter}");
    }

    #[test]
    fn test_explicit_filter_is_used() {
        let filter = resolve_filter(Some("wager_confidence=debug")).to_string();
        assert!(filter.contains("wager_confidence=debug"), "{filter}");
        assert!(!filter.contains("wager_core"), "{filter}");
    }

    #[test]
    fn test_garbage_filter_falls_back() {
        let filter = resolve_filter(Some("wager_confidence=[[[")).to_string();
        assert!(filter.contains("wager_core=info"), "{filter}");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
