//! PDF Thumbnail Library
//!
//! Renders PDF pages into white-backed JPEG thumbnails in a cache
//! directory. The server binary in main.rs exposes this over HTTP.
//!
//! # Modules
//!
//! - `document`: Locator resolution, page validation, renderer capability
//! - `mupdf`: MuPDF implementation of the renderer capability
//! - `thumbnail`: Sizing, compositing, encoding and the request pipeline
//! - `routes`: HTTP bridge over the thumbnail service

pub mod config;
pub mod document;
pub mod error;
pub mod mupdf;
pub mod routes;
pub mod state;
pub mod thumbnail;

pub use error::{ErrorCode, Result, ThumbnailError};
pub use thumbnail::{RenderRequest, ThumbnailResult, ThumbnailService};
