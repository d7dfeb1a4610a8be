//! Logging setup.
//!
//! Everything logs through `tracing`; this module installs the subscriber.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Calling this twice is
/// harmless: the second install is ignored.
pub fn init_tracing(default_level: &str) {
    let env_filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter_layer)
        .with(fmt_layer)
        .try_init();
}
