//! Event sink trait abstraction.
//!
//! The external analytics collector boundary. Forwarding is best-effort:
//! a sink failure must never affect the in-memory analytics log, so the
//! caller catches and reports errors to the diagnostic channel instead of
//! propagating them.

use serde_json::Value;

/// Event sink errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SinkError {
    /// The collector rejected or failed to receive the event
    #[error("Collector error: {0}")]
    Collector(String),
    /// The event could not be serialized for the collector
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Trait for forwarding analytics events to an external collector.
///
/// Implementations include the production HTTP collector adapter and
/// mock sinks for testing. `send` is synchronous from the caller's point
/// of view; implementations that talk to the network hand the work off to
/// a background task.
pub trait EventSink: Send + Sync {
    /// Forward one event to the collector.
    ///
    /// # Arguments
    /// * `name` - The event name (e.g. "navigate_page")
    /// * `params` - The event parameters as a JSON object
    fn send(&self, name: &str, params: &Value) -> Result<(), SinkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_error_display() {
        assert_eq!(
            SinkError::Collector("connection refused".to_string()).to_string(),
            "Collector error: connection refused"
        );
        assert_eq!(
            SinkError::Serialization("bad value".to_string()).to_string(),
            "Serialization error: bad value"
        );
    }
}
