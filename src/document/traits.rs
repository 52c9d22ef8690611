//! Document renderer capability
//!
//! Backend-agnostic interfaces for opening a PDF, reading page geometry,
//! and rasterizing a page. The thumbnail pipeline only ever talks to these.

use std::path::Path;

use image::RgbaImage;

use super::types::{PageSize, TargetSize};
use crate::error::Result;

/// Opens documents from local files
pub trait DocumentBackend: Send + Sync {
    /// Open the document at `path`
    ///
    /// Fails with `NotFound` when the file cannot be read or does not parse
    /// as a PDF. Any file handle is released before this returns or when
    /// the document is dropped.
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>>;
}

/// An open document, owned by a single request
pub trait PdfDocument {
    /// Number of pages
    fn page_count(&self) -> usize;

    /// Load a page by zero-based index
    fn open_page(&self, index: usize) -> Result<Box<dyn PdfPage>>;
}

/// A loaded page, scoped to one rendering operation
pub trait PdfPage {
    /// Native page geometry
    fn size(&self) -> PageSize;

    /// Rasterize into a straight-alpha RGBA surface of exactly `size`
    ///
    /// Consumes the page so it is released once the surface exists.
    fn render(self: Box<Self>, size: TargetSize) -> Result<RgbaImage>;
}
