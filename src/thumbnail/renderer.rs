//! Page rendering
//!
//! Computes the target size for a page, rasterizes it through the
//! document backend, and flattens the result onto white.

use image::RgbImage;

use super::compositor::flatten_onto_white;
use super::sizing::{scale_factor, target_size};
use crate::document::PdfDocument;
use crate::error::{Result, ThumbnailError};

/// Refuse surfaces larger than this many pixels (~1.6 GB of RGBA)
const MAX_SURFACE_PIXELS: u64 = 400_000_000;

/// Render one page into an opaque RGB surface
///
/// The page is released as soon as rasterization finishes. The returned
/// surface's dimensions are the final thumbnail dimensions.
pub fn render_page(
    document: &dyn PdfDocument,
    index: usize,
    min_side: Option<u32>,
) -> Result<RgbImage> {
    let page = document.open_page(index)?;
    let native = page.size();

    if !(native.width.is_finite() && native.height.is_finite())
        || native.width <= 0.0
        || native.height <= 0.0
    {
        return Err(ThumbnailError::Render(format!(
            "Page {} has invalid size {}x{}",
            index, native.width, native.height
        )));
    }

    let target = target_size(native, min_side);
    if target.area() > MAX_SURFACE_PIXELS {
        return Err(ThumbnailError::Render(format!(
            "Page {} would render at {}x{}, exceeding the surface limit",
            index, target.width, target.height
        )));
    }

    tracing::debug!(
        "Rendering page {} ({}x{} pt) at {}x{} px (scale {:.3})",
        index,
        native.width,
        native.height,
        target.width,
        target.height,
        scale_factor(native, min_side)
    );

    let surface = page.render(target)?;
    if surface.dimensions() != (target.width, target.height) {
        return Err(ThumbnailError::Render(format!(
            "Backend returned {}x{} surface, expected {}x{}",
            surface.width(),
            surface.height(),
            target.width,
            target.height
        )));
    }

    Ok(flatten_onto_white(surface))
}
