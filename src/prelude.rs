//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types from the pixdeck library,
//! providing a convenient way to import the most frequently used items.
//!
//! # Usage
//!
//! ```ignore
//! use pixdeck::prelude::*;
//! ```

// Core application types
pub use crate::app::{App, AppMessage, ITEMS_PER_PAGE, TOTAL_PAGES};

// Model types
pub use crate::models::PicsumImage;

// Analytics
pub use crate::analytics::{pretty_print_json, AnalyticsEvent, AnalyticsLog};

// Navigation and pagination
pub use crate::navigation::{PageResolver, Route};
pub use crate::pagination::Paginator;

// API client
pub use crate::picsum::{PicsumClient, PicsumError, PICSUM_BASE_URL};

// UI
pub use crate::ui::render;
