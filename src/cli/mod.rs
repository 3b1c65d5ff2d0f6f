//! CLI module for pixdeck.
//!
//! This module provides command-line interface functionality:
//! - Argument parsing (initial route, collector endpoint)
//! - Version display
//!
//! The dispatcher should be called early in main() to handle command-line
//! flags before initializing the TUI.

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, TuiOptions};
pub use version::{handle_version_command, VERSION};
