//! Brand collateral generation for Dependable Home Improvement.
//!
//! The crate turns a [`theme::BrandTheme`] and a [`model::DocumentFlow`] of
//! content blocks into finished artifacts: letter-format PDFs rendered through
//! [`genpdf`] with trailing page numbers stamped in a second pass, and a DOCX
//! sales proposal written through `docx-rs`.  The ready-made flows for the
//! brand book, the logo concept sheet, and the website proposal live in
//! [`documents`].

pub mod builders;
pub mod docx;
pub mod elements;
pub mod export;
pub mod fonts;
pub mod model;
pub mod render;
pub mod richtext;
pub mod theme;

pub mod documents;

#[cfg(feature = "bookmarks")]
pub mod bookmarks;
