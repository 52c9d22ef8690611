//! Locator resolution
//!
//! Maps a caller-supplied path or URI to a local file path.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Result, ThumbnailError};

/// Resolve a locator to a local path
///
/// Accepts absolute filesystem paths and `file:` URIs. Everything else,
/// including `content:` URIs that need a platform content resolver, is
/// reported as `NotFound`.
pub fn resolve(locator: &str) -> Result<PathBuf> {
    if locator.is_empty() {
        return Err(ThumbnailError::NotFound(locator.to_string()));
    }

    if Path::new(locator).is_absolute() {
        return Ok(PathBuf::from(locator));
    }

    let url = Url::parse(locator).map_err(|e| {
        tracing::debug!("Locator '{}' is neither a path nor a URI: {}", locator, e);
        ThumbnailError::NotFound(locator.to_string())
    })?;

    match url.scheme() {
        "file" => url.to_file_path().map_err(|_| {
            tracing::debug!("File URI '{}' has no local path", locator);
            ThumbnailError::NotFound(locator.to_string())
        }),
        scheme => {
            tracing::debug!("Unsupported locator scheme '{}' in '{}'", scheme, locator);
            Err(ThumbnailError::NotFound(locator.to_string()))
        }
    }
}
