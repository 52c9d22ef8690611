//! MuPDF rendering backend
//!
//! Implements the [`DocumentBackend`](crate::document::DocumentBackend)
//! capability on top of the `mupdf` crate.
//!
//! MuPDF's `fz_context` is not thread-safe. Each request opens its own
//! document on the worker thread running it, and nothing MuPDF-owned is
//! shared between requests.

mod backend;

pub use backend::MupdfBackend;
