//! Tracing subscriber setup for the `nrt` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary (or to the embedding application).

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr logger.
///
/// `RUST_LOG` wins when set (a `.env` file in the working directory is read
/// first). Otherwise `nrtidal=info`, or `nrtidal=debug,info` with `verbose`.
pub fn init_cli_logger(verbose: bool) {
    dotenvy::dotenv().ok();

    let default_filter = if verbose { "nrtidal=debug,info" } else { "nrtidal=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
