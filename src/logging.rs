//! Logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise this crate logs at `info`, or
/// `debug` when `verbose` is set. Stdout is left alone so JSON output
/// stays machine readable.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "fbl_standings=debug"
    } else {
        "fbl_standings=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}
