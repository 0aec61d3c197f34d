use tracing_subscriber::EnvFilter;

const QUIET: &str = "error";
const VERBOSE: &str = "warn,wave_portal=debug";

/// Diagnostics go to stderr so stdout only carries the page.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { VERBOSE } else { QUIET }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
