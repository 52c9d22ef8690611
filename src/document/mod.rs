//! Document access
//!
//! Resolves caller locators to open documents and abstracts the PDF
//! rendering engine behind a small capability:
//!
//! ```text
//!   locator ──resolve──▶ path ──DocumentBackend::open──▶ PdfDocument
//!                                                          │
//!                                          open_page(index)▼
//!                                                        PdfPage
//!                                                 size() / render(size)
//! ```
//!
//! Documents and pages are owned values; dropping them releases the
//! underlying engine resources, so every exit path cleans up.

mod accessor;
mod locator;
mod traits;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use accessor::{validate_page, DocumentAccessor};
pub use traits::{DocumentBackend, PdfDocument, PdfPage};
pub use types::{has_pdf_signature, PageSize, TargetSize};
