//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays free for the session's output. The
//! filter comes from `RUST_LOG`.

use std::io;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber, as JSON lines when `json` is set.
///
/// A subscriber that is already installed is left in place and the failure
/// is logged through it.
pub fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
