//! Tracing subscriber setup for binaries.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVES: &str = "list_items=info,list_server=info,tower_http=info";

/// Install a `fmt` subscriber filtered by `RUST_LOG`, falling back to `default_directives`.
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(default_directives: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
