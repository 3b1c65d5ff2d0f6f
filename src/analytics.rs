//! In-memory analytics event log.
//!
//! An append-only, newest-first sequence of structured events. Every tracked
//! event is kept for the lifetime of the process and rendered in the debug
//! panel. Each event is additionally forwarded, best-effort, to an external
//! collector through the [`EventSink`] boundary; forwarding problems go to
//! the diagnostic channel and never touch the internal log.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;

use crate::traits::EventSink;

/// One structured analytics event.
#[derive(Debug, Clone)]
pub struct AnalyticsEvent {
    /// Event name (e.g. "navigate_page")
    pub name: String,
    /// Event parameters as a JSON object
    pub params: Value,
    /// When the event was tracked
    pub timestamp: DateTime<Utc>,
}

/// Append-only analytics log, newest first.
pub struct AnalyticsLog {
    events: Vec<AnalyticsEvent>,
    sink: Option<Arc<dyn EventSink>>,
}

impl AnalyticsLog {
    /// Create a log with no external collector configured.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            sink: None,
        }
    }

    /// Create a log forwarding to the given collector.
    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        Self {
            events: Vec::new(),
            sink: Some(sink),
        }
    }

    /// Track an event.
    ///
    /// The event is timestamped and prepended to the log, then forwarded to
    /// the collector if one is configured. A missing collector or a
    /// forwarding failure is reported via `tracing` only; the internal log
    /// is updated unconditionally before forwarding is attempted.
    pub fn track_event(&mut self, name: &str, params: Value) {
        let event = AnalyticsEvent {
            name: name.to_string(),
            params,
            timestamp: Utc::now(),
        };

        // Newest first
        self.events.insert(0, event.clone());

        match &self.sink {
            Some(sink) => {
                if let Err(e) = sink.send(&event.name, &event.params) {
                    tracing::error!(event = %event.name, error = %e, "analytics forwarding failed");
                }
            }
            None => {
                tracing::warn!(event = %event.name, "no analytics collector configured, event not sent");
            }
        }
    }

    /// Read-only view of the log, newest first.
    pub fn events(&self) -> &[AnalyticsEvent] {
        &self.events
    }

    /// Number of tracked events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for AnalyticsLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Pretty-print event params with 2-space indentation.
///
/// Absent, null, or empty params render as the literal `{}`.
pub fn pretty_print_json(params: Option<&Value>) -> String {
    match params {
        Some(Value::Object(map)) if !map.is_empty() => {
            serde_json::to_string_pretty(map).unwrap_or_else(|_| "{}".to_string())
        }
        _ => "{}".to_string(),
    }
}
