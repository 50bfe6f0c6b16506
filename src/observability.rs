use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. Verbosity comes from `RUST_LOG`,
/// `info` when unset or invalid.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
