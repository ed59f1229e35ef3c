//! Process-wide logging setup.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogConfig, LogFormat, ParseLogFormatError};

/// Initialize tracing from the environment (`RUST_LOG`, `MATERIALS_LOG_FORMAT`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let config = LogConfig::from_env();
    self::tracing::init(&config);
}
