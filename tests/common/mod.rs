//! Common test utilities for integration tests.
//!
//! Provides reusable fixtures and helpers: canned listing API bodies and a
//! fully wired `App` backed by a mock HTTP client.

use std::sync::Arc;

use pixdeck::adapters::mock::MockHttpClient;
use pixdeck::analytics::AnalyticsLog;
use pixdeck::app::App;
use pixdeck::picsum::{PicsumClient, PICSUM_BASE_URL};

/// Build a JSON listing body with `count` images whose ids carry `prefix`.
pub fn images_json(count: usize, prefix: &str) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"id":"{prefix}-{i}","author":"Author {i}","width":2500,"height":1667,"download_url":"https://picsum.photos/id/{i}/2500/1667"}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

/// The listing URL the app requests for a page.
pub fn list_url(page: u32, limit: u32) -> String {
    format!("{}/v2/list?page={}&limit={}", PICSUM_BASE_URL, page, limit)
}

/// Build an `App` over the given mock HTTP client, with no collector.
pub fn test_app(http: Arc<MockHttpClient>) -> App {
    let client = Arc::new(PicsumClient::new(http));
    App::new(client, AnalyticsLog::new())
}

/// Count events with the given name in the app's analytics log.
pub fn count_events(app: &App, name: &str) -> usize {
    app.analytics
        .events()
        .iter()
        .filter(|e| e.name == name)
        .count()
}
