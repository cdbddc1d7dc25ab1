use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "lobz=warn,lobzapp=warn";
const VERBOSE_FILTER: &str = "lobz=debug,lobzapp=debug";

/// Installs the stderr subscriber. `RUST_LOG` wins unless `--verbose` is given.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
