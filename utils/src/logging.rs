//! Structured logging initialization via `tracing`.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with sensible defaults.
///
/// Respects the `RUST_LOG` environment variable; without it, the ledger
/// crates log at `info` and everything else stays quiet.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("rbx_ledger=info,rbx_governor=info,rbx_gateway=info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Initialize tracing with newline-delimited JSON output, for log shippers.
pub fn init_tracing_json() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("rbx_ledger=info,rbx_governor=info,rbx_gateway=info")
    });
    tracing_subscriber::fmt().json().with_env_filter(filter).init();
}
