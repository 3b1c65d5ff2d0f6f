//! Application state and the fetch/navigation controller.
//!
//! `App` owns all UI-facing state and is mutated only on the main loop task.
//! Fetches run on spawned tasks and report back through an unbounded mpsc
//! channel as [`AppMessage`]s. Each fetch carries a monotonically increasing
//! sequence token; results with a stale token are discarded, so a slow
//! response can never overwrite the state of a later navigation.

use serde_json::json;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::analytics::AnalyticsLog;
use crate::models::PicsumImage;
use crate::navigation::{PageResolver, Route};
use crate::pagination::Paginator;
use crate::picsum::PicsumClient;

/// Items requested per page.
pub const ITEMS_PER_PAGE: u32 = 12;

/// Total page count. The listing API exposes no pagination metadata, so
/// this is a fixed constant rather than a derived value.
pub const TOTAL_PAGES: u32 = 10;

/// Messages received from async fetch tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A page of images loaded successfully
    ImagesLoaded {
        seq: u64,
        page: u32,
        images: Vec<PicsumImage>,
    },
    /// A fetch failed
    ImagesLoadError {
        seq: u64,
        page: u32,
        url: String,
        error: String,
    },
}

/// Main application state
pub struct App {
    /// Current result set, replaced wholesale on each successful fetch
    pub images: Vec<PicsumImage>,
    /// Pagination state (current page, total pages)
    pub paginator: Paginator,
    /// Items requested per page
    pub items_per_page: u32,
    /// A fetch is in flight
    pub loading: bool,
    /// User-visible error from the last failed fetch
    pub error: Option<String>,
    /// Analytics event log (and collector forwarding)
    pub analytics: AnalyticsLog,
    /// Selected row in the gallery list
    pub selected: usize,
    /// Whether the analytics debug panel is visible
    pub show_log: bool,
    /// Scroll offset in the analytics panel
    pub log_scroll: u16,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Receiver for async messages (fetch results)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to fetch tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Picsum API client (shared across fetch tasks)
    client: Arc<PicsumClient>,
    /// Distinct-until-changed gate for resolved pages
    resolver: PageResolver,
    /// Sequence token of the most recent fetch
    fetch_seq: u64,
}

impl App {
    /// Create the application state.
    ///
    /// Tracks the `app_load` event. No fetch is issued until the first
    /// navigation (see [`App::navigate_to_route`]).
    pub fn new(client: Arc<PicsumClient>, mut analytics: AnalyticsLog) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        analytics.track_event("app_load", json!({ "component": "App" }));

        Self {
            images: Vec::new(),
            paginator: Paginator::new(TOTAL_PAGES),
            items_per_page: ITEMS_PER_PAGE,
            loading: true,
            error: None,
            analytics,
            selected: 0,
            show_log: true,
            log_scroll: 0,
            should_quit: false,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            client,
            resolver: PageResolver::new(),
            fetch_seq: 0,
        }
    }

    /// Navigate to a resolved route (initial navigation or deep link).
    pub fn navigate_to_route(&mut self, route: Route) {
        let Route::Gallery { page } = route;
        self.apply_page(page);
    }

    /// Previous-page intent from the pagination controls.
    pub fn previous_page(&mut self) {
        if let Some(page) = self.paginator.previous() {
            self.track_navigate(page);
            self.apply_page(page);
        }
    }

    /// Next-page intent from the pagination controls.
    pub fn next_page(&mut self) {
        if let Some(page) = self.paginator.next() {
            self.track_navigate(page);
            self.apply_page(page);
        }
    }

    /// Bounds-checked direct navigation from the pagination controls.
    ///
    /// Out-of-range pages are silent no-ops: no state change, no event.
    pub fn go_to_page(&mut self, page: u32) {
        if let Some(page) = self.paginator.go_to_page(page) {
            self.track_navigate(page);
            self.apply_page(page);
        }
    }

    /// Direct page selection (digit keys).
    ///
    /// Values are drawn only from the rendered page range, and re-selecting
    /// the current page is a no-op.
    pub fn select_page(&mut self, page: u32) {
        if !self.paginator.page_numbers().contains(&page) {
            return;
        }
        if page == self.paginator.current {
            return;
        }
        self.analytics.track_event(
            "select_page",
            json!({ "selected_page": page, "method": "direct" }),
        );
        self.apply_page(page);
    }

    fn track_navigate(&mut self, page: u32) {
        self.analytics.track_event(
            "navigate_page",
            json!({ "page_number": page, "method": "pagination_buttons" }),
        );
    }

    /// Complete a navigation: dedupe, update the current page, track the
    /// page view, and kick off the fetch.
    fn apply_page(&mut self, page: u32) {
        let Some(page) = self.resolver.emit(page) else {
            // Unchanged page, no downstream fetch
            return;
        };

        self.paginator.current = page;
        self.analytics.track_event(
            "page_view",
            json!({ "page_path": Route::Gallery { page }.path() }),
        );
        self.fetch_page(page, self.items_per_page);
    }

    /// Issue one fetch for a page of images.
    ///
    /// Sets `loading = true` and clears the error synchronously, then spawns
    /// the network call. The sequence token ties the eventual result back to
    /// this cycle.
    pub fn fetch_page(&mut self, page: u32, page_size: u32) {
        self.loading = true;
        self.error = None;
        self.fetch_seq += 1;

        let seq = self.fetch_seq;
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        let url = client.list_url(page, page_size);

        tracing::debug!(page, page_size, seq, "fetching image page");

        tokio::spawn(async move {
            match client.list_images(page, page_size).await {
                Ok(images) => {
                    let _ = tx.send(AppMessage::ImagesLoaded { seq, page, images });
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::ImagesLoadError {
                        seq,
                        page,
                        url,
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// Apply a fetch result to the UI state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::ImagesLoaded { seq, page, images } => {
                if seq != self.fetch_seq {
                    tracing::debug!(seq, page, "discarding stale fetch result");
                    return;
                }
                self.images = images;
                self.loading = false;
                self.selected = 0;
            }
            AppMessage::ImagesLoadError {
                seq,
                page,
                url,
                error,
            } => {
                if seq != self.fetch_seq {
                    tracing::debug!(seq, page, "discarding stale fetch error");
                    return;
                }
                self.error = Some(format!("Failed to fetch images. Error: {}", error));
                self.loading = false;
                self.analytics.track_event(
                    "api_error",
                    json!({ "error_message": error, "url": url }),
                );
            }
        }
    }

    /// Move the gallery selection up.
    pub fn select_previous_image(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the gallery selection down.
    pub fn select_next_image(&mut self) {
        if self.selected + 1 < self.images.len() {
            self.selected += 1;
        }
    }

    /// Toggle the analytics debug panel.
    pub fn toggle_log(&mut self) {
        self.show_log = !self.show_log;
    }

    /// Scroll the analytics panel up.
    pub fn scroll_log_up(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
    }

    /// Scroll the analytics panel down.
    pub fn scroll_log_down(&mut self) {
        self.log_scroll = self.log_scroll.saturating_add(1);
    }

    /// Advance the animation tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Current fetch sequence token (exposed for tests).
    pub fn fetch_seq(&self) -> u64 {
        self.fetch_seq
    }
}
