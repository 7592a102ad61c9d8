//! Publication tables from BibTeX entries.
//!
//! Entries are grouped by authorship position: the first-author table
//! bolds the first author and truncates long author lists, the
//! Nth-author table lists every author untouched.

use acadgen_core::{latex_to_unicode, normalize_journal, Config};
use acadgen_parser::bibtex::Entry;

use crate::html::{html_escape, PageShell};

/// Sort key for entries without a usable year; sorts after real years.
const MISSING_YEAR: i32 = 9999;

/// Render the full publications page.
///
/// Either group may be empty, in which case its table (heading
/// included) is omitted.
pub fn page_html(config: &Config, first: Vec<Entry>, nth: Vec<Entry>) -> String {
    let mut tables = String::new();

    if !first.is_empty() {
        tables.push_str(&table_html(
            &config.publications.first_author_heading,
            first,
            true,
            config.publications.max_authors,
        ));
    }
    if !nth.is_empty() {
        tables.push_str(&table_html(
            &config.publications.nth_author_heading,
            nth,
            false,
            config.publications.max_authors,
        ));
    }

    PageShell::new(config.site.clone()).render(&config.publications.page_title, &tables)
}

/// Render one publication table, sorted by year ascending.
pub fn table_html(
    heading: &str,
    mut entries: Vec<Entry>,
    first_author: bool,
    max_authors: usize,
) -> String {
    // Stable sort keeps input order within a year.
    entries.sort_by_key(|e| e.year().unwrap_or(MISSING_YEAR));

    let rows: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| row_html(i + 1, entry, first_author, max_authors))
        .collect();

    format!(
        "      <h1>{heading}</h1>\n      <hr>\n      <table class=\"pub-list\">\n        <tr>\n          <th>#</th>\n          <th>Authors</th>\n          <th>Title</th>\n          <th>Journal / Year</th>\n        </tr>\n{rows}\n      </table>\n",
        heading = html_escape(heading),
        rows = rows.join("\n"),
    )
}

fn row_html(index: usize, entry: &Entry, first_author: bool, max_authors: usize) -> String {
    format!(
        "        <tr>\n          <td>{index}</td>\n          <td class='authors'>{authors}</td>\n          <td>{title}</td>\n          <td>{journal}</td>\n        </tr>",
        authors = authors_html(entry, first_author, max_authors),
        title = title_html(entry),
        journal = journal_info(entry),
    )
}

/// Author list cell. Bolds and truncates only in the first-author table.
fn authors_html(entry: &Entry, first_author: bool, max_authors: usize) -> String {
    let mut authors: Vec<String> = entry
        .authors()
        .iter()
        .map(|name| html_escape(&latex_to_unicode(name)))
        .collect();

    if authors.is_empty() {
        return "Unknown".to_string();
    }

    if first_author {
        authors[0] = format!("<b>{}</b>", authors[0]);
        if authors.len() > max_authors {
            authors.truncate(max_authors);
            return format!("{}, et al.", authors.join(", "));
        }
    }

    authors.join(", ")
}

/// Linked title cell. DOI wins over a plain `url` field.
fn title_html(entry: &Entry) -> String {
    let title = latex_to_unicode(entry.field("title").unwrap_or("No title"));
    let href = match entry.field("doi") {
        Some(doi) if !doi.is_empty() => format!("https://doi.org/{doi}"),
        _ => entry.field("url").unwrap_or("#").to_string(),
    };

    format!(
        "<a href=\"{}\" target=\"_blank\">{}</a>",
        html_escape(&href),
        html_escape(&title)
    )
}

/// Journal, volume, pages, and year joined with commas; empty parts drop.
fn journal_info(entry: &Entry) -> String {
    let journal = normalize_journal(entry.field("journal").unwrap_or(""));
    let parts = [
        journal.as_str(),
        entry.field("volume").unwrap_or(""),
        entry.field("pages").unwrap_or(""),
        entry.field("year").unwrap_or(""),
    ];

    parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| html_escape(p))
        .collect::<Vec<_>>()
        .join(", ")
}
