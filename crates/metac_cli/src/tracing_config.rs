//! Tracing configuration.
//!
//! The subscriber is only initialised when `METAC_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal runs.
//!
//! ```bash
//! METAC_LOG=debug metac src/main.mc
//! METAC_LOG="metac_parser=trace" metac src/main.mc
//! ```

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `METAC_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("METAC_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Initialise the global tracing subscriber, writing to stderr so logs never
/// mix with translations printed to stdout.
pub fn init_tracing() {
    let has_metac_log = std::env::var("METAC_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_metac_log && !has_rust_log {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
