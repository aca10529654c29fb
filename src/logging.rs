use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// JSON logs on stderr, filtered by `RUST_LOG` (default `info`). Stdout is kept
/// for the startup summary. Calling this twice keeps the first subscriber.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .try_init();

    match installed {
        Ok(()) => tracing::info!(filter = DEFAULT_FILTER, "Logging ready"),
        Err(e) => eprintln!("logging already initialized: {}", e),
    }
}
