//! Configuration management for the thumbnail server

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// JPEG quality used when none is configured
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub thumbnails: ThumbnailConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct ThumbnailConfig {
    /// Cache directory thumbnails are written into
    pub output_dir: PathBuf,
    /// Lossy encoding quality (1-100)
    pub jpeg_quality: u8,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            thumbnails: ThumbnailConfig::default(),
        }
    }
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        ThumbnailConfig {
            output_dir: env::temp_dir(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: raw,
            })?,
            None => 3000,
        };

        let jpeg_quality = match lookup("THUMBNAIL_JPEG_QUALITY") {
            Some(raw) => match raw.parse::<u8>() {
                Ok(q) if (1..=100).contains(&q) => q,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "THUMBNAIL_JPEG_QUALITY",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_JPEG_QUALITY,
        };

        Ok(Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port,
            },
            thumbnails: ThumbnailConfig {
                output_dir: lookup("THUMBNAIL_DIR")
                    .filter(|dir| !dir.is_empty())
                    .map(PathBuf::from)
                    .unwrap_or_else(env::temp_dir),
                jpeg_quality,
            },
        })
    }
}
