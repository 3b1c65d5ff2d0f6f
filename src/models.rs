//! Data models for the picsum.photos listing API.

use serde::{Deserialize, Serialize};

/// One catalog entry from `GET /v2/list`.
///
/// Immutable once fetched; the current result set is replaced wholesale on
/// each successful page load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PicsumImage {
    /// Catalog identifier, unique per image
    pub id: String,
    /// Author label
    pub author: String,
    /// Source width in pixels
    pub width: u32,
    /// Source height in pixels
    pub height: u32,
    /// Direct download URL
    pub download_url: String,
}

impl PicsumImage {
    /// Short "WxH" label for list rendering.
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_api_json() {
        let json = r#"{
            "id": "10",
            "author": "Paul Jarvis",
            "width": 2500,
            "height": 1667,
            "url": "https://unsplash.com/photos/6J--NXulQCs",
            "download_url": "https://picsum.photos/id/10/2500/1667"
        }"#;

        let image: PicsumImage = serde_json::from_str(json).unwrap();
        assert_eq!(image.id, "10");
        assert_eq!(image.author, "Paul Jarvis");
        assert_eq!(image.width, 2500);
        assert_eq!(image.height, 1667);
        assert_eq!(image.download_url, "https://picsum.photos/id/10/2500/1667");
    }

    #[test]
    fn test_dimensions_label() {
        let image = PicsumImage {
            id: "1".to_string(),
            author: "A".to_string(),
            width: 640,
            height: 480,
            download_url: "https://picsum.photos/id/1/640/480".to_string(),
        };
        assert_eq!(image.dimensions(), "640x480");
    }
}
