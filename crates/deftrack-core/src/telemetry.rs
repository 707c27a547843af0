//! Tracing initialization
//!
//! Libraries in this workspace only emit `tracing` events; installing a
//! subscriber is the embedding binary's call. This helper wires up the
//! conventional fmt subscriber filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
