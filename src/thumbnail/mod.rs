//! Thumbnail generation
//!
//! # Pipeline
//!
//! ```text
//! RenderRequest
//!      │
//!      ▼
//! DocumentAccessor::open ──▶ validate_page ──▶ render_page ──▶ ThumbnailWriter::write
//!                                               │  target_size        │  JPEG, q=80
//!                                               │  rasterize          │  random filename
//!                                               │  flatten on white   ▼
//!                                               ▼              ThumbnailResult
//! ```
//!
//! - `sizing`: native or minimum-side scaling
//! - `compositor`: alpha removal onto a white background
//! - `renderer`: ties sizing, rasterization and compositing together
//! - `writer`: naming, encoding and persistence
//! - `service`: the per-request state machine and the three entry points

mod compositor;
mod renderer;
mod service;
mod sizing;
mod types;
mod writer;

pub use compositor::flatten_onto_white;
pub use renderer::render_page;
pub use service::ThumbnailService;
pub use sizing::{min_side_constraint, scale_factor, target_size};
pub use types::{RenderRequest, ThumbnailResult};
pub use writer::{filename_prefix, output_filename, ThumbnailWriter};
