//! Diagnostic logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "sharify_desktop=info";

const VERBOSE_FILTER: &str = "sharify_desktop=debug";

/// Pick the log filter directive. `RUST_LOG` wins over `--verbose`.
pub fn filter_directive(rust_log: Option<&str>, verbose: bool) -> String {
    match rust_log.filter(|s| !s.trim().is_empty()) {
        Some(directive) => directive.to_string(),
        None if verbose => VERBOSE_FILTER.to_string(),
        None => DEFAULT_FILTER.to_string(),
    }
}

/// Install the global subscriber writing to stderr.
pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(rust_log.as_deref(), verbose);

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_info() {
        assert_eq!(filter_directive(None, false), "sharify_desktop=info");
    }

    #[test]
    fn verbose_raises_to_debug() {
        assert_eq!(filter_directive(None, true), "sharify_desktop=debug");
    }

    #[test]
    fn rust_log_takes_precedence() {
        assert_eq!(filter_directive(Some("warn"), true), "warn");
        assert_eq!(filter_directive(Some("  "), false), DEFAULT_FILTER);
    }
}
