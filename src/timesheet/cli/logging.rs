use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber when `verbose` is set; otherwise tracing
/// stays silent. `RUST_LOG` overrides the default `debug` filter.
pub(super) fn init(verbose: bool) {
    if !verbose {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
