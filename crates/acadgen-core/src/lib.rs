//! Acadgen Core Library
//!
//! Shared types, configuration, and error handling for the acadgen
//! homepage generators.

pub mod config;
pub mod error;
pub mod latex;

pub use config::Config;
pub use error::{CoreError, Result};
pub use latex::{latex_to_unicode, normalize_journal};
