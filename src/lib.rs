//! pixdeck - A terminal gallery browser for the picsum.photos catalog
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod analytics;
pub mod app;
pub mod cli;
pub mod models;
pub mod navigation;
pub mod pagination;
pub mod picsum;
pub mod prelude;
pub mod traits;
pub mod ui;
