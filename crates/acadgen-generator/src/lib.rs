//! Acadgen Generator Library
//!
//! Rendering for the homepage generators.
//!
//! # Modules
//!
//! - [`html`] - page shell and HTML escaping
//! - [`publications`] - publication tables from BibTeX entries
//! - [`presentations`] - presentation tables from log records
//! - [`chart`] - SVG chart of presentations per year
//! - [`output`] - output file writing

pub mod chart;
pub mod html;
pub mod output;
pub mod presentations;
pub mod publications;

pub use html::PageShell;
pub use output::write_file;
