//! End-to-end tests: parse real input files from disk and render pages.

use std::fs;

use acadgen_core::Config;
use acadgen_generator::{chart, output, presentations, publications};
use acadgen_parser::{bibtex, presentation};
use chrono::NaiveDate;

const PAPER_X: &str = r#"@article{x2021,
    author = {Doe, Jane and Smith, John},
    title = {X},
    journal = {\apj},
    year = {2021},
    doi = {10.1000/x}
}"#;

const PAPER_Y: &str = r#"@article{y2019,
    author = {Roe, Richard},
    title = {Y},
    journal = {MNRAS},
    year = {2019}
}"#;

#[test]
fn test_nth_only_grouping_scenario() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let paper1 = dir.path().join("paper1.bib");
    let paper2 = dir.path().join("paper2.bib");
    fs::write(&paper1, PAPER_X).expect("write paper1");
    fs::write(&paper2, PAPER_Y).expect("write paper2");

    // --first matched zero files, both papers passed as --Nth.
    let mut nth = bibtex::parse_file(&paper1).expect("parse paper1");
    nth.extend(bibtex::parse_file(&paper2).expect("parse paper2"));

    let config = Config::default();
    let page = publications::page_html(&config, Vec::new(), nth);

    assert_eq!(page.matches("<td class='authors'>").count(), 2);
    assert!(page.contains(">X</a>"));
    assert!(page.contains(">Y</a>"));
    assert!(page.contains("Refereed Articles (Nth author)"));
    assert!(!page.contains("Refereed Articles (First author)"));

    // Sorted by year: Y (2019) before X (2021).
    assert!(page.find(">Y</a>").expect("Y") < page.find(">X</a>").expect("X"));
}

#[test]
fn test_publication_page_deterministic() {
    let config = Config::default();
    let entries = || bibtex::parse_str(PAPER_X, std::path::Path::new("x.bib")).expect("parse");

    let a = publications::page_html(&config, entries(), Vec::new());
    let b = publications::page_html(&config, entries(), Vec::new());
    assert_eq!(a, b);
}

#[test]
fn test_missing_bibtex_file_leaves_no_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output_path = dir.path().join("publications.html");

    // Parsing fails before anything is rendered or written.
    let result = bibtex::parse_file(&dir.path().join("missing.bib"));
    assert!(result.is_err());
    assert!(!output_path.exists());
}

#[test]
fn test_presentation_pipeline_from_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let domestic_path = dir.path().join("domestic.txt");
    let international_path = dir.path().join("international.txt");
    fs::write(
        &domestic_path,
        "Title: A\nDates: 2023-05-01\n\nTitle: B\nDates: 2024-02-10\n\nTitle: C\nDates: 2024-09-01\n",
    )
    .expect("write domestic");
    fs::write(&international_path, "Title: D\nDates: 2022-08-15\n").expect("write international");

    let domestic = presentation::parse_file(&domestic_path).expect("parse domestic");
    let international = presentation::parse_file(&international_path).expect("parse international");
    assert_eq!(domestic.len(), 3);
    assert_eq!(international.len(), 1);

    let config = Config::default();
    let today = NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date");
    let page = presentations::page_html(
        &config,
        &domestic,
        &international,
        Some("fig/years.svg"),
        today,
    );

    assert_eq!(page.matches("<td class='authors'>").count(), 4);
    assert!(page.contains("Last updated on 2025-01-15"));

    let svg = chart::render_svg(&domestic, &international);
    // Years 2022, 2023, 2024 across both logs, three series.
    assert_eq!(svg.matches("<circle").count(), 9);

    let page_path = dir.path().join("presentations.html");
    let svg_path = dir.path().join("years.svg");
    output::write_file(&page_path, &page).expect("write page");
    output::write_file(&svg_path, &svg).expect("write chart");

    assert_eq!(fs::read_to_string(&page_path).expect("read page"), page);
    assert!(fs::read_to_string(&svg_path).expect("read svg").starts_with("<svg"));
}
