//! In-memory backend for exercising the pipeline without MuPDF

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use image::{Rgba, RgbaImage};

use super::traits::{DocumentBackend, PdfDocument, PdfPage};
use super::types::{PageSize, TargetSize};
use crate::error::{Result, ThumbnailError};

/// Backend that serves fixed page sizes for any existing file
///
/// Pages render fully transparent except for an opaque black square in
/// the top-left quarter.
#[derive(Clone)]
pub struct FakeBackend {
    pages: Arc<Vec<PageSize>>,
    fail_on_page: Option<usize>,
    open_documents: Arc<AtomicUsize>,
    renders: Arc<AtomicUsize>,
}

impl FakeBackend {
    pub fn new(pages: Vec<PageSize>) -> Self {
        Self {
            pages: Arc::new(pages),
            fail_on_page: None,
            open_documents: Arc::new(AtomicUsize::new(0)),
            renders: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Make rendering of `index` fail
    pub fn failing_on(mut self, index: usize) -> Self {
        self.fail_on_page = Some(index);
        self
    }

    /// Documents currently alive
    pub fn open_documents(&self) -> usize {
        self.open_documents.load(Ordering::SeqCst)
    }

    /// Pages rasterized so far
    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }
}

impl DocumentBackend for FakeBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>> {
        if !path.is_file() {
            return Err(ThumbnailError::NotFound(path.display().to_string()));
        }

        self.open_documents.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeDocument {
            backend: self.clone(),
        }))
    }
}

struct FakeDocument {
    backend: FakeBackend,
}

impl Drop for FakeDocument {
    fn drop(&mut self) {
        self.backend.open_documents.fetch_sub(1, Ordering::SeqCst);
    }
}

impl PdfDocument for FakeDocument {
    fn page_count(&self) -> usize {
        self.backend.pages.len()
    }

    fn open_page(&self, index: usize) -> Result<Box<dyn PdfPage>> {
        let size = self
            .backend
            .pages
            .get(index)
            .copied()
            .ok_or_else(|| ThumbnailError::Render(format!("No page {}", index)))?;

        Ok(Box::new(FakePage {
            size,
            fail: self.backend.fail_on_page == Some(index),
            renders: Arc::clone(&self.backend.renders),
        }))
    }
}

struct FakePage {
    size: PageSize,
    fail: bool,
    renders: Arc<AtomicUsize>,
}

impl PdfPage for FakePage {
    fn size(&self) -> PageSize {
        self.size
    }

    fn render(self: Box<Self>, size: TargetSize) -> Result<RgbaImage> {
        if self.fail {
            return Err(ThumbnailError::Render("simulated rasterizer failure".into()));
        }
        self.renders.fetch_add(1, Ordering::SeqCst);

        let (half_w, half_h) = (size.width / 2, size.height / 2);
        Ok(RgbaImage::from_fn(size.width, size.height, |x, y| {
            if x < half_w && y < half_h {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        }))
    }
}
