//! Thumbnail persistence
//!
//! Encodes flattened surfaces as JPEG into the cache directory under
//! `{prefix}-thumbnail-{page}-{random}.jpg`. The random suffix makes
//! collisions between concurrent requests unlikely; it does not rule
//! them out, and an existing file of the same name is overwritten.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use rand::Rng;
use url::Url;

use super::types::ThumbnailResult;
use crate::config::ThumbnailConfig;
use crate::error::{Result, ThumbnailError};

/// Prefix used when the locator has no usable final segment
const FALLBACK_PREFIX: &str = "pdf";

/// Writes encoded thumbnails into a cache directory
#[derive(Debug, Clone)]
pub struct ThumbnailWriter {
    output_dir: PathBuf,
    quality: u8,
}

impl ThumbnailWriter {
    pub fn new(output_dir: impl Into<PathBuf>, quality: u8) -> Self {
        Self {
            output_dir: output_dir.into(),
            quality: quality.clamp(1, 100),
        }
    }

    /// Create the configured directory and resolve it to an absolute path
    pub fn from_config(config: &ThumbnailConfig) -> Result<Self> {
        fs::create_dir_all(&config.output_dir).map_err(|e| {
            ThumbnailError::Write(format!(
                "Cannot create {}: {}",
                config.output_dir.display(),
                e
            ))
        })?;
        let output_dir = fs::canonicalize(&config.output_dir).map_err(|e| {
            ThumbnailError::Write(format!(
                "Cannot resolve {}: {}",
                config.output_dir.display(),
                e
            ))
        })?;

        Ok(Self::new(output_dir, config.jpeg_quality))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Encode and persist a surface, returning its location and size
    ///
    /// A partially written file is removed before the error is returned.
    pub fn write(&self, surface: &RgbImage, locator: &str, page: usize) -> Result<ThumbnailResult> {
        let random = rand::thread_rng().gen_range(0..i64::MAX) as u64;
        let path = self.output_dir.join(output_filename(locator, page, random));

        if let Err(e) = self.encode_to(surface, &path) {
            if path.exists() {
                if let Err(remove_err) = fs::remove_file(&path) {
                    tracing::warn!(
                        "Failed to remove partial thumbnail {}: {}",
                        path.display(),
                        remove_err
                    );
                }
            }
            return Err(e);
        }

        let uri = Url::from_file_path(&path)
            .map_err(|_| {
                ThumbnailError::Write(format!("{} is not an absolute path", path.display()))
            })?
            .to_string();

        tracing::info!(
            "Wrote {}x{} thumbnail for page {} to {}",
            surface.width(),
            surface.height(),
            page,
            path.display()
        );

        Ok(ThumbnailResult {
            uri,
            width: surface.width(),
            height: surface.height(),
        })
    }

    fn encode_to(&self, surface: &RgbImage, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| {
            ThumbnailError::Write(format!("Cannot create {}: {}", path.display(), e))
        })?;
        let mut out = BufWriter::new(file);

        JpegEncoder::new_with_quality(&mut out, self.quality).encode_image(surface)?;

        out.flush()
            .map_err(|e| ThumbnailError::Write(format!("Cannot write {}: {}", path.display(), e)))
    }
}

/// Filename prefix derived from the locator's last path segment
///
/// Dots become dashes so `report.pdf` does not yield `report.pdf-...jpg`.
pub fn filename_prefix(locator: &str) -> String {
    match locator.rsplit(['/', '\\']).next() {
        Some(segment) if !segment.is_empty() => segment.replace('.', "-"),
        _ => FALLBACK_PREFIX.to_string(),
    }
}

/// Full output filename for a page
pub fn output_filename(locator: &str, page: usize, random: u64) -> String {
    format!("{}-thumbnail-{}-{}.jpg", filename_prefix(locator), page, random)
}
