//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait-based abstractions for the two I/O seams of
//! the application, enabling dependency injection, mocking, and better
//! testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET)
//! - [`EventSink`] - External analytics collector boundary

pub mod http;
pub mod sink;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use sink::{EventSink, SinkError};
