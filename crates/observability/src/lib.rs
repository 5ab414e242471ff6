//! Tracing and logging setup shared by binaries and tests.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide tracing with the `RUST_LOG` filter (default `info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize process-wide tracing with an explicit filter directive.
///
/// `RUST_LOG` still wins when it is set.
pub fn init_with_filter(directive: &str) {
    tracing::init_with_default(directive);
}
