//! Thumbnail request and result types

use serde::{Deserialize, Serialize};

/// A single-page thumbnail request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Path or URI of the source PDF
    pub locator: String,
    /// Zero-based page index as supplied by the caller
    pub page_index: i64,
    /// Minimum length of the shorter edge, if any
    pub min_side: Option<u32>,
}

impl RenderRequest {
    pub fn new(locator: impl Into<String>, page_index: i64) -> Self {
        Self {
            locator: locator.into(),
            page_index,
            min_side: None,
        }
    }

    pub fn with_min_side(mut self, min_side: Option<u32>) -> Self {
        self.min_side = min_side;
        self
    }
}

/// A written thumbnail
///
/// The file belongs to the caller from here on; nothing tracks or cleans
/// up previously produced thumbnails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailResult {
    /// `file://` URI of the JPEG
    pub uri: String,
    pub width: u32,
    pub height: u32,
}
