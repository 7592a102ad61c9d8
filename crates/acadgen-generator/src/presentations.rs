//! Presentation tables from log records.

use acadgen_core::Config;
use acadgen_parser::presentation::Record;
use chrono::NaiveDate;

use crate::html::{html_escape, PageShell};

/// Render the full presentations page.
///
/// `today` stamps the "last updated" line; it is passed in rather than
/// read from the clock so rendering stays deterministic under test.
/// `figure` is the path of the yearly-counts chart to reference, when
/// one is being generated.
pub fn page_html(
    config: &Config,
    domestic: &[Record],
    international: &[Record],
    figure: Option<&str>,
    today: NaiveDate,
) -> String {
    let mut body = format!(
        "      <p>List of my presentations. Last updated on {}.</p>\n",
        today.format("%Y-%m-%d")
    );

    if let Some(figure) = figure {
        body.push_str(&format!(
            "      <img src=\"{}\" alt=\"Presentations per Year\" style=\"max-width:100%;height:auto;\">\n",
            html_escape(figure)
        ));
    }

    body.push('\n');
    body.push_str(&table_html(&config.presentations.domestic_heading, domestic));
    body.push_str(&table_html(
        &config.presentations.international_heading,
        international,
    ));

    PageShell::new(config.site.clone()).render(&config.presentations.page_title, &body)
}

/// Render one presentation table; one data row per record.
pub fn table_html(heading: &str, records: &[Record]) -> String {
    let rows: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(i, record)| row_html(i + 1, record))
        .collect();

    format!(
        "      <h1>{heading}</h1>\n      <hr>\n      <table class=\"pub-list\">\n        <tr>\n          <th>#</th>\n          <th>Presenters</th>\n          <th>Title</th>\n          <th>Event</th>\n          <th>Location</th>\n          <th>Dates</th>\n          <th>Type</th>\n          <th>Memo</th>\n        </tr>\n{rows}\n      </table>\n",
        heading = html_escape(heading),
        rows = rows.join("\n"),
    )
}

fn row_html(index: usize, record: &Record) -> String {
    let title = if record.url.is_empty() {
        html_escape(&record.title)
    } else {
        format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            html_escape(&record.url),
            html_escape(&record.title)
        )
    };

    format!(
        "        <tr>\n          <td>{index}</td>\n          <td class='authors'>{presenters}</td>\n          <td>{title}</td>\n          <td>{event}</td>\n          <td>{location}</td>\n          <td>{dates}</td>\n          <td>{kind}</td>\n          <td>{memo}</td>\n        </tr>",
        presenters = html_escape(&record.presenters),
        event = html_escape(&record.event),
        location = html_escape(&record.location),
        dates = html_escape(&record.dates),
        kind = html_escape(&record.kind),
        memo = html_escape(&record.memo),
    )
}
