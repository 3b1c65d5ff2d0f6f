//! HTTP collector event sink adapter.
//!
//! Production [`EventSink`] implementation that forwards analytics events to
//! an external collector endpoint. Delivery is fire-and-forget: the POST runs
//! on a background task so tracking never blocks the UI loop, and transport
//! failures are reported to the diagnostic channel only.

use serde_json::{json, Value};

use crate::traits::{EventSink, SinkError};

/// Event sink that POSTs events to an HTTP collector.
#[derive(Debug, Clone)]
pub struct HttpEventSink {
    client: reqwest::Client,
    collector_url: String,
}

impl HttpEventSink {
    /// Create a new sink targeting the given collector URL.
    pub fn new(collector_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            collector_url: collector_url.into(),
        }
    }

    /// The configured collector URL.
    pub fn collector_url(&self) -> &str {
        &self.collector_url
    }
}

impl EventSink for HttpEventSink {
    fn send(&self, name: &str, params: &Value) -> Result<(), SinkError> {
        if !params.is_object() {
            return Err(SinkError::Serialization(format!(
                "event params must be a JSON object, got {}",
                params
            )));
        }

        let payload = json!({
            "event": name,
            "params": params,
        });

        let client = self.client.clone();
        let url = self.collector_url.clone();
        let event_name = name.to_string();

        tokio::spawn(async move {
            match client.post(&url).json(&payload).send().await {
                Ok(response) if !response.status().is_success() => {
                    tracing::error!(
                        event = %event_name,
                        status = response.status().as_u16(),
                        "collector rejected analytics event"
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!(
                        event = %event_name,
                        error = %e,
                        "failed to forward analytics event"
                    );
                }
            }
        });

        Ok(())
    }
}
