use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber. Call once at startup.
///
/// `RUST_LOG` controls the filter; defaults to `info` for the whole app.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
