use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
/// Events from both the CLI and the core library are covered.
pub fn init_logging(quiet: bool) {
    let level = if quiet { "error" } else { "info" };

    let filter = EnvFilter::from_default_env()
        .add_directive(
            format!("homepage={level}")
                .parse()
                .expect("Invalid log directive"),
        )
        .add_directive(
            format!("homepage_core={level}")
                .parse()
                .expect("Invalid log directive"),
        );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
