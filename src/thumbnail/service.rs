//! Thumbnail request pipeline
//!
//! Each request walks `open → validate → render → write` and stops at the
//! first failure. Nothing is retried, and nothing is shared between
//! requests except the backend and the output directory.

use std::sync::Arc;

use super::renderer::render_page;
use super::sizing::min_side_constraint;
use super::types::{RenderRequest, ThumbnailResult};
use super::writer::ThumbnailWriter;
use crate::document::{validate_page, DocumentAccessor, DocumentBackend, PdfDocument};
use crate::error::{Result, ThumbnailError};

/// Generates page thumbnails for PDF locators
///
/// Methods are synchronous and CPU-bound. Async callers should go through
/// [`ThumbnailService::run_blocking`].
#[derive(Clone)]
pub struct ThumbnailService {
    accessor: DocumentAccessor,
    writer: Arc<ThumbnailWriter>,
}

impl ThumbnailService {
    pub fn new(backend: Arc<dyn DocumentBackend>, writer: ThumbnailWriter) -> Self {
        Self {
            accessor: DocumentAccessor::new(backend),
            writer: Arc::new(writer),
        }
    }

    pub fn writer(&self) -> &ThumbnailWriter {
        &self.writer
    }

    /// Render one page at native resolution
    pub fn generate(&self, locator: &str, page: i64) -> Result<ThumbnailResult> {
        self.run(&RenderRequest::new(locator, page))
    }

    /// Render one page with its shorter side scaled up to at least `min_side`
    ///
    /// Non-positive `min_side` behaves like [`generate`](Self::generate).
    pub fn generate_with_min_side(
        &self,
        locator: &str,
        page: i64,
        min_side: i64,
    ) -> Result<ThumbnailResult> {
        self.run(&RenderRequest::new(locator, page).with_min_side(min_side_constraint(min_side)))
    }

    /// Render every page at native resolution, in page order
    ///
    /// The first failing page aborts the batch. Thumbnails already written
    /// for earlier pages stay on disk.
    pub fn generate_all_pages(&self, locator: &str) -> Result<Vec<ThumbnailResult>> {
        let document = self.accessor.open(locator)?;
        let page_count = document.page_count();
        tracing::debug!("Generating {} thumbnails for {}", page_count, locator);

        let mut results = Vec::with_capacity(page_count);
        for index in 0..page_count {
            match self.render_and_write(document.as_ref(), locator, index, None) {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::warn!(
                        "Page {} of {} failed, {} thumbnails already written are left in place: {}",
                        index,
                        locator,
                        results.len(),
                        e
                    );
                    return Err(e);
                }
            }
        }

        Ok(results)
    }

    /// Run a single-page request
    pub fn run(&self, request: &RenderRequest) -> Result<ThumbnailResult> {
        let document = self.accessor.open(&request.locator)?;
        let index = validate_page(document.as_ref(), request.page_index)?;

        self.render_and_write(document.as_ref(), &request.locator, index, request.min_side)
            .map_err(|e| {
                tracing::warn!(
                    "Thumbnail for page {} of {} failed: {}",
                    index,
                    request.locator,
                    e
                );
                e
            })
    }

    /// Run `f` against this service on the blocking thread pool
    pub async fn run_blocking<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ThumbnailService) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let service = self.clone();
        tokio::task::spawn_blocking(move || f(&service))
            .await
            .map_err(|e| ThumbnailError::Render(format!("Task join error: {}", e)))?
    }

    fn render_and_write(
        &self,
        document: &dyn PdfDocument,
        locator: &str,
        index: usize,
        min_side: Option<u32>,
    ) -> Result<ThumbnailResult> {
        let surface = render_page(document, index, min_side)?;
        self.writer.write(&surface, locator, index)
    }
}
