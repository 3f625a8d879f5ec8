//! Process-wide logging setup for `stockroom-api` (and anything else that
//! wants the same JSON log format).

pub mod tracing;

/// Install the global subscriber. Calling it again is harmless.
pub fn init() {
    tracing::init();
}
