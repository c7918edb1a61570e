//! Logging setup shared by the binaries.

/// Tracing subscriber installation.
pub mod tracing;

pub use self::tracing::{LogFormat, ParseLogFormatError};

/// Initialize process-wide logging with the given output format.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init(format: LogFormat) -> bool {
    self::tracing::init(format)
}
