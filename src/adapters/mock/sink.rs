//! Mock event sinks for testing.
//!
//! [`MockSink`] records every forwarded event for verification.
//! [`FailingSink`] always errors, for testing that forwarding failures are
//! isolated from the in-memory analytics log.

use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::traits::{EventSink, SinkError};

/// A forwarded event recorded by [`MockSink`].
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    /// Event name
    pub name: String,
    /// Event parameters
    pub params: Value,
}

/// Event sink that records forwarded events in memory.
#[derive(Debug, Clone, Default)]
pub struct MockSink {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl MockSink {
    /// Create a new mock sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all events forwarded to this sink.
    pub fn get_events(&self) -> Vec<RecordedEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for MockSink {
    fn send(&self, name: &str, params: &Value) -> Result<(), SinkError> {
        self.events.lock().unwrap().push(RecordedEvent {
            name: name.to_string(),
            params: params.clone(),
        });
        Ok(())
    }
}

/// Event sink that rejects every event.
#[derive(Debug, Clone, Default)]
pub struct FailingSink;

impl FailingSink {
    /// Create a new failing sink.
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for FailingSink {
    fn send(&self, _name: &str, _params: &Value) -> Result<(), SinkError> {
        Err(SinkError::Collector("sink unavailable".to_string()))
    }
}
