use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "feedback_reminder=info";

/// Initialize the global subscriber.
///
/// `RUST_LOG` overrides the default filter. Setting `LOG_FORMAT=json` switches
/// the output to one JSON object per line.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().with_target(true).json())
            .init();
    } else {
        registry.with(fmt::layer().with_target(false)).init();
    }
}
