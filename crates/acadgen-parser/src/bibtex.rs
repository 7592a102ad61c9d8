//! BibTeX bibliography parser.
//!
//! Covers the subset of BibTeX that reference exporters actually emit:
//! `@type{key, field = {value}, ...}` with braced, quoted, or bare field
//! values. `@comment` blocks are skipped; `@string`, `@preamble`, and
//! `#` concatenation are rejected with a diagnostic.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

/// BibTeX parsing errors.
#[derive(Debug, Error)]
pub enum BibtexError {
    /// Failed to read an input file.
    #[error("failed to read BibTeX file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed BibTeX content.
    #[error("syntax error in {path} at line {line}: {message}")]
    Syntax {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Result type for BibTeX operations.
pub type Result<T> = std::result::Result<T, BibtexError>;

/// A single parsed BibTeX entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Entry type, lowercased (`article`, `inproceedings`, ...).
    pub entry_type: String,

    /// Citation key.
    pub key: String,

    /// Field values keyed by lowercased field name.
    pub fields: BTreeMap<String, String>,
}

impl Entry {
    /// Look up a field by name, case-insensitively.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Publication year, when the `year` field parses as an integer.
    pub fn year(&self) -> Option<i32> {
        self.field("year").and_then(|y| y.trim().parse().ok())
    }

    /// Author names from the `author` field, split on `and` at brace
    /// depth zero. Empty when the field is absent.
    pub fn authors(&self) -> Vec<String> {
        let Some(field) = self.field("author") else {
            return Vec::new();
        };
        split_authors(field)
    }
}

/// Split an author field on the `and` keyword, ignoring any `and`
/// nested inside braces.
fn split_authors(field: &str) -> Vec<String> {
    let chars: Vec<char> = field.chars().collect();
    let mut names = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            _ => {}
        }

        if depth == 0 && c.is_whitespace() && matches_and(&chars, i) {
            names.push(current.trim().to_string());
            current.clear();
            i += 5; // skip " and "
            continue;
        }

        current.push(c);
        i += 1;
    }

    names.push(current.trim().to_string());
    names.retain(|n| !n.is_empty());
    names
}

/// Whether `chars[i..]` starts a ` and ` separator (case-insensitive).
fn matches_and(chars: &[char], i: usize) -> bool {
    if i + 4 >= chars.len() {
        return false;
    }
    chars[i + 1].eq_ignore_ascii_case(&'a')
        && chars[i + 2].eq_ignore_ascii_case(&'n')
        && chars[i + 3].eq_ignore_ascii_case(&'d')
        && chars[i + 4].is_whitespace()
}

/// Parse a BibTeX file into entries.
pub fn parse_file(path: &Path) -> Result<Vec<Entry>> {
    let content = fs::read_to_string(path).map_err(|source| BibtexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_str(&content, path)?;
    debug!(path = %path.display(), entries = entries.len(), "parsed BibTeX file");
    Ok(entries)
}

/// Parse BibTeX text into entries. `path` is used only for diagnostics.
pub fn parse_str(input: &str, path: &Path) -> Result<Vec<Entry>> {
    Scanner::new(input, path).parse_all()
}

/// Character scanner over BibTeX text.
struct Scanner<'a> {
    chars: Vec<char>,
    pos: usize,
    path: &'a Path,
}

impl<'a> Scanner<'a> {
    fn new(input: &str, path: &'a Path) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            path,
        }
    }

    fn parse_all(mut self) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();

        // Anything outside an @entry is commentary and is skipped.
        while self.skip_to_entry() {
            if let Some(entry) = self.parse_entry()? {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    fn error(&self, message: impl Into<String>) -> BibtexError {
        let line = self.chars[..self.pos.min(self.chars.len())]
            .iter()
            .filter(|c| **c == '\n')
            .count()
            + 1;
        BibtexError::Syntax {
            path: self.path.to_path_buf(),
            line,
            message: message.into(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Advance past inter-entry text to the next `@`. Returns false at EOF.
    fn skip_to_entry(&mut self) -> bool {
        while let Some(c) = self.peek() {
            if c == '@' {
                self.pos += 1;
                return true;
            }
            self.pos += 1;
        }
        false
    }

    fn read_identifier(&mut self) -> String {
        let mut ident = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                ident.push(c);
                self.pos += 1;
            } else {
                break;
            }
        }
        ident
    }

    /// Parse one `@type{...}` block. Returns `None` for skipped blocks.
    fn parse_entry(&mut self) -> Result<Option<Entry>> {
        self.skip_whitespace();
        let entry_type = self.read_identifier().to_lowercase();
        if entry_type.is_empty() {
            return Err(self.error("expected entry type after '@'"));
        }

        match entry_type.as_str() {
            "comment" => {
                self.skip_block()?;
                return Ok(None);
            }
            "string" | "preamble" => {
                return Err(self.error(format!("@{entry_type} is not supported")));
            }
            _ => {}
        }

        self.skip_whitespace();
        let close = match self.bump() {
            Some('{') => '}',
            Some('(') => ')',
            _ => return Err(self.error(format!("expected '{{' after @{entry_type}"))),
        };

        self.skip_whitespace();
        let key = self.read_citation_key(close)?;

        let mut fields = BTreeMap::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(c) if c == close => {
                    self.pos += 1;
                    break;
                }
                Some(',') => {
                    self.pos += 1;
                    continue;
                }
                Some(_) => {
                    let (name, value) = self.parse_field(close)?;
                    fields.insert(name, value);
                }
                None => return Err(self.error(format!("unterminated entry '{key}'"))),
            }
        }

        Ok(Some(Entry {
            entry_type,
            key,
            fields,
        }))
    }

    fn read_citation_key(&mut self, close: char) -> Result<String> {
        let mut key = String::new();
        while let Some(c) = self.peek() {
            if c == ',' || c == close || c.is_whitespace() {
                break;
            }
            key.push(c);
            self.pos += 1;
        }
        if key.is_empty() {
            return Err(self.error("missing citation key"));
        }
        Ok(key)
    }

    fn parse_field(&mut self, close: char) -> Result<(String, String)> {
        let name = self.read_identifier().to_lowercase();
        if name.is_empty() {
            return Err(self.error("expected field name"));
        }

        self.skip_whitespace();
        if self.bump() != Some('=') {
            return Err(self.error(format!("expected '=' after field '{name}'")));
        }

        self.skip_whitespace();
        let value = match self.peek() {
            Some('{') => self.parse_braced_value()?,
            Some('"') => self.parse_quoted_value()?,
            Some(_) => {
                let value = self.parse_bare_value(close);
                if value.is_empty() {
                    return Err(self.error(format!("missing value for field '{name}'")));
                }
                value
            }
            None => return Err(self.error(format!("missing value for field '{name}'"))),
        };

        self.skip_whitespace();
        if self.peek() == Some('#') {
            return Err(self.error(format!(
                "string concatenation with '#' in field '{name}' is not supported"
            )));
        }

        Ok((name, normalize_whitespace(&value)))
    }

    fn parse_braced_value(&mut self) -> Result<String> {
        self.pos += 1; // opening brace
        let mut value = String::new();
        let mut depth = 1usize;

        while let Some(c) = self.bump() {
            match c {
                '{' => {
                    depth += 1;
                    value.push(c);
                }
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(value);
                    }
                    value.push(c);
                }
                _ => value.push(c),
            }
        }

        Err(self.error("unterminated braced value"))
    }

    fn parse_quoted_value(&mut self) -> Result<String> {
        self.pos += 1; // opening quote
        let mut value = String::new();
        let mut depth = 0usize;

        while let Some(c) = self.bump() {
            match c {
                '{' => {
                    depth += 1;
                    value.push(c);
                }
                '}' => {
                    depth = depth.saturating_sub(1);
                    value.push(c);
                }
                '"' if depth == 0 => return Ok(value),
                _ => value.push(c),
            }
        }

        Err(self.error("unterminated quoted value"))
    }

    fn parse_bare_value(&mut self, close: char) -> String {
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if c == ',' || c == close || c.is_whitespace() {
                break;
            }
            value.push(c);
            self.pos += 1;
        }
        value
    }

    /// Skip a balanced `{...}` block, as used by `@comment`.
    fn skip_block(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.bump() != Some('{') {
            return Err(self.error("expected '{' after @comment"));
        }

        let mut depth = 1usize;
        while let Some(c) = self.bump() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }

        Err(self.error("unterminated @comment block"))
    }
}

/// Collapse runs of whitespace (including line wraps) to single spaces.
fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<Entry> {
        parse_str(input, Path::new("test.bib")).expect("parse")
    }

    #[test]
    fn test_parse_single_entry() {
        let entries = parse(
            r#"@article{doe2024,
    author = {Doe, Jane and Smith, John},
    title = {A Study of Things},
    journal = {\apj},
    volume = {42},
    pages = {100--110},
    year = {2024},
    doi = {10.1000/xyz},
}"#,
        );

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.entry_type, "article");
        assert_eq!(entry.key, "doe2024");
        assert_eq!(entry.field("title"), Some("A Study of Things"));
        assert_eq!(entry.field("volume"), Some("42"));
        assert_eq!(entry.year(), Some(2024));
    }

    #[test]
    fn test_quoted_and_bare_values() {
        let entries = parse(
            r#"@article{k1,
    title = "Quoted {Title}",
    year = 2023
}"#,
        );

        assert_eq!(entries[0].field("title"), Some("Quoted {Title}"));
        assert_eq!(entries[0].year(), Some(2023));
    }

    #[test]
    fn test_multiple_entries_and_commentary() {
        let entries = parse(
            r#"Exported from somewhere.

@article{a, title = {First}, year = {2020}}

% a stray remark
@article{b, title = {Second}, year = {2021}}"#,
        );

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "a");
        assert_eq!(entries[1].key, "b");
    }

    #[test]
    fn test_comment_block_skipped() {
        let entries = parse(
            r#"@comment{nothing to see {here}}
@article{a, title = {Kept}, year = {2020}}"#,
        );

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].field("title"), Some("Kept"));
    }

    #[test]
    fn test_author_splitting() {
        let entries = parse(
            r#"@article{a,
    author = {Doe, Jane and {van der Berg and Sons} and M\"uller, Kai},
    year = {2020}
}"#,
        );

        let authors = entries[0].authors();
        assert_eq!(authors.len(), 3);
        assert_eq!(authors[0], "Doe, Jane");
        assert_eq!(authors[1], "{van der Berg and Sons}");
        assert_eq!(authors[2], r#"M\"uller, Kai"#);
    }

    #[test]
    fn test_line_wrapped_value_normalized() {
        let entries = parse(
            "@article{a,\n    title = {A Title\n        Wrapped Over Lines},\n    year = {2020}\n}",
        );

        assert_eq!(entries[0].field("title"), Some("A Title Wrapped Over Lines"));
    }

    #[test]
    fn test_missing_year_field() {
        let entries = parse("@misc{a, title = {No Year}}");
        assert_eq!(entries[0].year(), None);
    }

    #[test]
    fn test_unterminated_entry_is_error() {
        let result = parse_str("@article{a, title = {Oops}", Path::new("bad.bib"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("bad.bib"));
    }

    #[test]
    fn test_concatenation_rejected() {
        let result = parse_str(
            r#"@article{a, title = "X" # " Y", year = {2020}}"#,
            Path::new("bad.bib"),
        );
        assert!(result.unwrap_err().to_string().contains('#'));
    }

    #[test]
    fn test_string_directive_rejected() {
        let result = parse_str(r#"@string{apj = "ApJ"}"#, Path::new("bad.bib"));
        assert!(result.unwrap_err().to_string().contains("@string"));
    }

    #[test]
    fn test_syntax_error_reports_line() {
        let result = parse_str("@article{a,\n  title = {Fine},\n  year = \n}", Path::new("bad.bib"));
        match result.unwrap_err() {
            BibtexError::Syntax { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_file_from_disk() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("refs.bib");
        std::fs::write(&path, "@article{a, title = {On Disk}, year = {2020}}").expect("write");

        let entries = parse_file(&path).expect("parse");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].field("title"), Some("On Disk"));
    }

    #[test]
    fn test_missing_file() {
        let result = parse_file(Path::new("/nonexistent/refs.bib"));
        assert!(result.unwrap_err().to_string().contains("/nonexistent/refs.bib"));
    }
}
