//! Core document types
//!
//! Page geometry and pixel sizes shared by every rendering backend.

use serde::{Deserialize, Serialize};

/// How far into the file the `%PDF` header may appear
const SIGNATURE_WINDOW: usize = 1024;

/// Native page geometry in points (72 points = 1 inch)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The shorter of the two edges
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// Pixel dimensions a page is rasterized to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels in the surface
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Check for a PDF header near the start of the file
///
/// Readers tolerate leading junk before `%PDF`, so the header is searched
/// for within the first kilobyte rather than required at offset zero.
pub fn has_pdf_signature(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(SIGNATURE_WINDOW)];
    window.windows(4).any(|w| w == b"%PDF")
}
