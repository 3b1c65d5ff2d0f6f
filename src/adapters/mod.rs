//! Concrete implementations of trait abstractions.
//!
//! This module provides production-ready adapters that implement the traits
//! defined in `crate::traits`. These adapters enable dependency injection
//! and testability while keeping the same functionality.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`HttpEventSink`] - Analytics forwarding to an HTTP collector
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockSink`] / [`mock::FailingSink`] - Event sink doubles

pub mod http_sink;
pub mod mock;
pub mod reqwest_http;

pub use http_sink::HttpEventSink;
pub use mock::{FailingSink, MockHttpClient, MockSink};
pub use reqwest_http::ReqwestHttpClient;
