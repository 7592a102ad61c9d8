//! Presentation log parser.
//!
//! Logs are plain UTF-8 text: one record per blank-line-separated block,
//! each line a `Key: value` pair. Recognized keys are `Presenters`,
//! `Title`, `Event`, `Location`, `Dates`, `Type`, `Memo`, and `URL`.
//! Lines without a colon are ignored.

use std::{
    fs,
    path::{Path, PathBuf},
};

use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Presentation log errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    /// Failed to read an input file.
    #[error("failed to read presentation log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for presentation log operations.
pub type Result<T> = std::result::Result<T, PresentationError>;

/// A single presentation record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Presenter names, as written in the log.
    pub presenters: String,

    /// Presentation title.
    pub title: String,

    /// Conference or seminar name.
    pub event: String,

    /// Venue.
    pub location: String,

    /// Date or date range, e.g. `2024-06-03` or `2024-06-03; 2024-06-07`.
    pub dates: String,

    /// Oral, poster, and the like.
    pub kind: String,

    /// Free-form remark (invited, award, ...).
    pub memo: String,

    /// Link target for the title, when present.
    pub url: String,
}

impl Record {
    /// Year of the start date, when the `Dates` value yields one.
    ///
    /// A range splits on `;` or `–`; the first segment's leading four
    /// digits are taken as the year.
    pub fn year(&self) -> Option<i32> {
        let separator = Regex::new(r"[;–]").unwrap();
        let start = separator.split(&self.dates).next()?.trim();
        start.get(..4)?.parse().ok()
    }

    fn is_empty(&self) -> bool {
        self.presenters.is_empty()
            && self.title.is_empty()
            && self.event.is_empty()
            && self.location.is_empty()
            && self.dates.is_empty()
            && self.kind.is_empty()
            && self.memo.is_empty()
            && self.url.is_empty()
    }

    fn set(&mut self, key: &str, value: &str) {
        let value = value.trim();
        match key.trim().to_lowercase().as_str() {
            "presenters" => self.presenters = value.to_string(),
            "title" => self.title = value.to_string(),
            "event" => self.event = value.to_string(),
            "location" => self.location = value.to_string(),
            "dates" => self.dates = value.to_string(),
            "type" => self.kind = value.to_string(),
            "memo" => self.memo = value.to_string(),
            "url" => self.url = value.to_string(),
            other => debug!(key = other, "ignoring unknown presentation key"),
        }
    }
}

/// Parse a presentation log file into records.
pub fn parse_file(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|source| PresentationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_str(&content);
    debug!(path = %path.display(), records = records.len(), "parsed presentation log");
    Ok(records)
}

/// Parse presentation log text into records.
pub fn parse_str(input: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current = Record::default();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                records.push(std::mem::take(&mut current));
            }
            continue;
        }

        // Lines without a colon carry no field and are skipped.
        if let Some((key, value)) = line.split_once(':') {
            current.set(key, value);
        }
    }

    // A trailing block without a final blank line still counts.
    if !current.is_empty() {
        records.push(current);
    }

    records
}
