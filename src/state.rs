//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::thumbnail::ThumbnailService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    thumbnails: ThumbnailService,
}

impl AppState {
    pub fn new(config: Config, thumbnails: ThumbnailService) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, thumbnails }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the thumbnail service
    pub fn thumbnails(&self) -> &ThumbnailService {
        &self.inner.thumbnails
    }
}
