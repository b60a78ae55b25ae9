use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber. Honors `RUST_LOG`, defaulting to `info`.
/// Output goes to stderr so the report binary's stdout stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
