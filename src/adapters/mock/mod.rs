//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without network dependencies.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockSink`] - Event sink that records forwarded events
//! - [`FailingSink`] - Event sink that rejects every event

pub mod http;
pub mod sink;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use sink::{FailingSink, MockSink, RecordedEvent};
