//! Diagnostic tracing for the checklist runner.
//!
//! The menus own stdout, so diagnostics always go to stderr and stay quiet
//! unless `RUST_LOG` asks for more. Report files are product output and are
//! written regardless of the log level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when `RUST_LOG` is unset or unparsable.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the event filter from a raw `RUST_LOG` value.
fn env_filter(raw: Option<&str>) -> EnvFilter {
    raw.map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the stderr subscriber.
///
/// ```bash
/// RUST_LOG=checklist=debug checklist FINAL-TESTING-CHECKLIST.md 2>trace.log
/// ```
pub fn init() {
    let raw = std::env::var("RUST_LOG").ok();
    tracing_subscriber::registry()
        .with(env_filter(raw.as_deref()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
