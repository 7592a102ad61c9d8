//! Acadgen Parser Library
//!
//! Input parsers for the homepage generators.
//!
//! # Modules
//!
//! - [`bibtex`] - BibTeX bibliography files
//! - [`presentation`] - blank-line-separated presentation logs

pub mod bibtex;
pub mod presentation;

pub use bibtex::{BibtexError, Entry};
pub use presentation::{PresentationError, Record};
