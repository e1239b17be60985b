//! Observability sink for membership and gid changes.
//!
//! The convergence engine reports human-readable descriptions of what it is
//! about to change. Sinks are injected so tests can capture the messages.

use tracing::debug;

/// Receives change descriptions such as
/// `group[aj]: removing group members all your base`.
pub trait GroupEventSink: Send + Sync {
    fn record(&self, message: &str);
}

/// Forwards every message to `tracing` at debug level.
#[derive(Debug, Clone, Default)]
pub struct TracingEventSink;

impl GroupEventSink for TracingEventSink {
    fn record(&self, message: &str) {
        debug!("{message}");
    }
}

/// Discards all messages.
#[derive(Debug, Clone, Default)]
pub struct NoopEventSink;

impl GroupEventSink for NoopEventSink {
    fn record(&self, _message: &str) {}
}
