//! Tracing subscriber setup for the command-line binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise this crate logs at `warn`, or at
/// `info` when `verbose` is on.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "espn_flb_export=info"
    } else {
        "espn_flb_export=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}
