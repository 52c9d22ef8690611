//! Document accessor
//!
//! Resolves locators to open documents and validates page indices.

use std::sync::Arc;

use super::locator;
use super::traits::{DocumentBackend, PdfDocument};
use crate::error::{Result, ThumbnailError};

/// Opens documents through a rendering backend
#[derive(Clone)]
pub struct DocumentAccessor {
    backend: Arc<dyn DocumentBackend>,
}

impl DocumentAccessor {
    pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
        Self { backend }
    }

    /// Open the document a locator points at
    ///
    /// Backend `NotFound` details are logged and replaced with the
    /// caller's locator so messages always name what the caller sent.
    pub fn open(&self, locator: &str) -> Result<Box<dyn PdfDocument>> {
        let path = locator::resolve(locator)?;

        self.backend.open(&path).map_err(|e| match e {
            ThumbnailError::NotFound(detail) => {
                tracing::debug!("Cannot open '{}': {}", locator, detail);
                ThumbnailError::NotFound(locator.to_string())
            }
            other => other,
        })
    }
}

/// Check a caller-supplied page index against the document
pub fn validate_page(document: &dyn PdfDocument, page: i64) -> Result<usize> {
    let page_count = document.page_count();

    match usize::try_from(page) {
        Ok(index) if index < page_count => Ok(index),
        _ => Err(ThumbnailError::InvalidPage { page, page_count }),
    }
}
