use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. Keeps stdout clean for
/// command output; diagnostics go to stderr.
pub const DEFAULT_FILTER: &str = "warn";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}
