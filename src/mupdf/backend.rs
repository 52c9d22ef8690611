//! MuPDF document backend
//!
//! Documents are opened from an in-memory copy of the file, so the file
//! handle is closed before `open` returns. MuPDF documents and pages are
//! reference counted and freed on drop.

use std::path::Path;

use image::{Rgba, RgbaImage};
use mupdf::{Colorspace, Document, Matrix, Page, Pixmap};

use crate::document::{
    has_pdf_signature, DocumentBackend, PageSize, PdfDocument, PdfPage, TargetSize,
};
use crate::error::{Result, ThumbnailError};

const PDF_MIME: &str = "application/pdf";

/// Renders PDF pages with MuPDF
#[derive(Debug, Clone, Copy, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentBackend for MupdfBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>> {
        let not_found = |reason: String| {
            ThumbnailError::NotFound(format!("{}: {}", path.display(), reason))
        };

        let data = std::fs::read(path).map_err(|e| not_found(e.to_string()))?;
        if !has_pdf_signature(&data) {
            return Err(not_found("missing PDF header".to_string()));
        }

        let doc = Document::from_bytes(&data, PDF_MIME).map_err(|e| not_found(e.to_string()))?;
        let page_count = doc.page_count().map_err(|e| not_found(e.to_string()))?;

        tracing::debug!(
            "Opened {} ({} bytes, {} pages)",
            path.display(),
            data.len(),
            page_count
        );

        Ok(Box::new(MupdfDocument {
            doc,
            page_count: usize::try_from(page_count).unwrap_or(0),
        }))
    }
}

struct MupdfDocument {
    doc: Document,
    page_count: usize,
}

impl PdfDocument for MupdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn open_page(&self, index: usize) -> Result<Box<dyn PdfPage>> {
        let page_number = i32::try_from(index)
            .map_err(|_| ThumbnailError::Render(format!("Page index {} out of range", index)))?;

        let page = self.doc.load_page(page_number)?;
        let bounds = page.bounds()?;
        let size = PageSize::new(bounds.x1 - bounds.x0, bounds.y1 - bounds.y0);

        Ok(Box::new(MupdfPage { page, size }))
    }
}

struct MupdfPage {
    page: Page,
    size: PageSize,
}

impl PdfPage for MupdfPage {
    fn size(&self) -> PageSize {
        self.size
    }

    fn render(self: Box<Self>, size: TargetSize) -> Result<RgbaImage> {
        let scale_x = size.width as f32 / self.size.width;
        let scale_y = size.height as f32 / self.size.height;

        // Alpha channel on, so unpainted areas stay transparent
        let matrix = Matrix::new_scale(scale_x, scale_y);
        let colorspace = Colorspace::device_rgb();
        let pixmap = self.page.to_pixmap(&matrix, &colorspace, true, false)?;

        Ok(pixmap_to_rgba(&pixmap, size))
    }
}

fn pixmap_to_rgba(pixmap: &Pixmap, size: TargetSize) -> RgbaImage {
    samples_to_rgba(
        pixmap.samples(),
        pixmap.width() as usize,
        pixmap.height() as usize,
        pixmap.n() as usize,
        size,
    )
}

/// Copy MuPDF samples into a straight-alpha surface of exactly `size`
///
/// MuPDF rounds pixmap bounds outward, so the source may be a pixel larger
/// or smaller than requested. Extra pixels are cropped and missing ones
/// left transparent.
fn samples_to_rgba(
    samples: &[u8],
    src_width: usize,
    src_height: usize,
    n: usize,
    size: TargetSize,
) -> RgbaImage {
    RgbaImage::from_fn(size.width, size.height, |x, y| {
        let (x, y) = (x as usize, y as usize);
        if x >= src_width || y >= src_height || n < 3 {
            return Rgba([0, 0, 0, 0]);
        }

        let offset = (y * src_width + x) * n;
        match samples.get(offset..offset + n) {
            Some(px) if n >= 4 => unpremultiply(px[0], px[1], px[2], px[3]),
            Some(px) => Rgba([px[0], px[1], px[2], 255]),
            None => Rgba([0, 0, 0, 0]),
        }
    })
}

/// MuPDF alpha pixmaps are premultiplied
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> Rgba<u8> {
    if a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    if a == 255 {
        return Rgba([r, g, b, 255]);
    }

    let a32 = a as u32;
    let channel = |c: u8| ((c as u32 * 255 + a32 / 2) / a32).min(255) as u8;
    Rgba([channel(r), channel(g), channel(b), a])
}
