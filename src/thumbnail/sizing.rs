//! Target size computation
//!
//! Pages render at native size unless a minimum side is requested and the
//! page's shorter edge falls below it, in which case both edges are scaled
//! up by the same factor. Pages are never scaled down.

use crate::document::{PageSize, TargetSize};

/// Page boxes come out of f32 arithmetic. An edge a few f32 ulps below an
/// integer is that integer (611.99994 pt is 612 pt); anything further off
/// truncates.
const F32_NOISE: f64 = 4.0 * f32::EPSILON as f64;

/// Interpret a caller-supplied minimum side
///
/// Non-positive values mean "no constraint".
pub fn min_side_constraint(raw: i64) -> Option<u32> {
    if raw <= 0 {
        tracing::debug!("Ignoring non-positive minimum side {}", raw);
        return None;
    }
    Some(u32::try_from(raw).unwrap_or(u32::MAX))
}

/// Upscaling ratio as `(min_side, original_min)`, if the page needs one
fn upscale_ratio(native: PageSize, min_side: Option<u32>) -> Option<(f64, f64)> {
    let original_min = native.min_side() as f64;
    match min_side {
        Some(min_side) if original_min < min_side as f64 => Some((min_side as f64, original_min)),
        _ => None,
    }
}

/// Factor applied to both edges of `native`
pub fn scale_factor(native: PageSize, min_side: Option<u32>) -> f64 {
    upscale_ratio(native, min_side).map_or(1.0, |(min_side, original_min)| min_side / original_min)
}

/// Pixel size a page renders to
///
/// Equivalent to `floor(edge * scale_factor)`, computed as
/// `edge * min_side / original_min` so the shorter edge lands exactly on
/// `min_side`. Both edges are at least one pixel.
pub fn target_size(native: PageSize, min_side: Option<u32>) -> TargetSize {
    let ratio = upscale_ratio(native, min_side);
    let scaled = |edge: f32| -> f64 {
        match ratio {
            Some((min_side, original_min)) => edge as f64 * min_side / original_min,
            None => edge as f64,
        }
    };

    TargetSize::new(to_pixels(scaled(native.width)), to_pixels(scaled(native.height)))
}

fn to_pixels(edge: f64) -> u32 {
    // `as` saturates and maps NaN to 0
    ((edge + edge.abs() * F32_NOISE).floor() as u32).max(1)
}
