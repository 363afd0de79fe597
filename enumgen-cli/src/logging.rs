//! Diagnostic logging for the `enumgen` binary.
//!
//! The subscriber is only installed when `ENUMGEN_LOG` (or `RUST_LOG`) is
//! set, and it always writes to stderr so stdout carries nothing but the
//! generation report.
//!
//! ```bash
//! ENUMGEN_LOG=debug enumgen --input colors.txt --langs swift
//! ENUMGEN_LOG="enumgen_spec=trace" enumgen
//! ```

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `ENUMGEN_LOG`, falling back to `RUST_LOG`.
/// Returns `None` when neither is set.
fn build_filter() -> Option<EnvFilter> {
    if let Ok(val) = std::env::var("ENUMGEN_LOG") {
        Some(EnvFilter::builder().parse_lossy(val))
    } else if std::env::var("RUST_LOG").is_ok() {
        Some(EnvFilter::from_default_env())
    } else {
        None
    }
}

/// Initialise the global tracing subscriber, if logging was requested.
pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
