//! SVG chart of presentations per year.
//!
//! Line chart with three series (domestic, international, total), one
//! point per year that appears in either log. Records whose dates yield
//! no year are skipped.

use std::collections::BTreeMap;
use std::fmt::Write;

use acadgen_parser::presentation::Record;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 45.0;

/// One plotted series.
struct Series<'a> {
    label: &'a str,
    color: &'a str,
    values: Vec<usize>,
}

/// Count records per start-date year.
pub fn yearly_counts(records: &[Record]) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        if let Some(year) = record.year() {
            *counts.entry(year).or_insert(0) += 1;
        }
    }
    counts
}

/// Render the yearly-counts chart as a standalone SVG document.
pub fn render_svg(domestic: &[Record], international: &[Record]) -> String {
    let domestic_counts = yearly_counts(domestic);
    let international_counts = yearly_counts(international);

    let years: Vec<i32> = domestic_counts
        .keys()
        .chain(international_counts.keys())
        .copied()
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();

    let domestic_vals: Vec<usize> = years
        .iter()
        .map(|y| domestic_counts.get(y).copied().unwrap_or(0))
        .collect();
    let international_vals: Vec<usize> = years
        .iter()
        .map(|y| international_counts.get(y).copied().unwrap_or(0))
        .collect();
    let total_vals: Vec<usize> = domestic_vals
        .iter()
        .zip(&international_vals)
        .map(|(d, i)| d + i)
        .collect();

    let series = [
        Series {
            label: "Domestic",
            color: "#1f77b4",
            values: domestic_vals,
        },
        Series {
            label: "International",
            color: "#d62728",
            values: international_vals,
        },
        Series {
            label: "Total",
            color: "#2ca02c",
            values: total_vals,
        },
    ];

    let max_count = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .max()
        .unwrap_or(0)
        .max(1);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" font-family=\"sans-serif\" font-size=\"12\">"
    );
    let _ = writeln!(
        svg,
        "  <text x=\"{:.1}\" y=\"20\" text-anchor=\"middle\" font-size=\"16\">Presentations per Year</text>",
        WIDTH / 2.0
    );

    draw_axes(&mut svg, &years, max_count);
    for s in &series {
        draw_series(&mut svg, s, &years, max_count);
    }
    draw_legend(&mut svg, &series);

    svg.push_str("</svg>\n");
    svg
}

/// Horizontal position of the point for year index `i`.
fn x_pos(i: usize, n_years: usize) -> f64 {
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let step = plot_width / (n_years.saturating_sub(1).max(1) as f64);
    MARGIN_LEFT + step * i as f64
}

/// Vertical position of a count value.
fn y_pos(count: usize, max_count: usize) -> f64 {
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    HEIGHT - MARGIN_BOTTOM - plot_height * (count as f64) / (max_count as f64)
}

fn draw_axes(svg: &mut String, years: &[i32], max_count: usize) {
    let x_end = WIDTH - MARGIN_RIGHT;
    let y_base = HEIGHT - MARGIN_BOTTOM;

    let _ = writeln!(
        svg,
        "  <line x1=\"{MARGIN_LEFT}\" y1=\"{y_base}\" x2=\"{x_end}\" y2=\"{y_base}\" stroke=\"#333\"/>"
    );
    let _ = writeln!(
        svg,
        "  <line x1=\"{MARGIN_LEFT}\" y1=\"{MARGIN_TOP}\" x2=\"{MARGIN_LEFT}\" y2=\"{y_base}\" stroke=\"#333\"/>"
    );

    for (i, year) in years.iter().enumerate() {
        let x = x_pos(i, years.len());
        let _ = writeln!(
            svg,
            "  <text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{year}</text>",
            y_base + 18.0
        );
    }

    let step = (max_count / 5).max(1);
    let mut tick = 0;
    while tick <= max_count {
        let y = y_pos(tick, max_count);
        let _ = writeln!(
            svg,
            "  <line x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{x_end}\" y2=\"{y:.1}\" stroke=\"#eee\"/>"
        );
        let _ = writeln!(
            svg,
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\">{tick}</text>",
            MARGIN_LEFT - 8.0,
            y + 4.0
        );
        tick += step;
    }

    let _ = writeln!(
        svg,
        "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">Year</text>",
        MARGIN_LEFT + (x_end - MARGIN_LEFT) / 2.0,
        HEIGHT - 8.0
    );
}

fn draw_series(svg: &mut String, series: &Series, years: &[i32], max_count: usize) {
    if years.is_empty() {
        return;
    }

    let points: Vec<String> = series
        .values
        .iter()
        .enumerate()
        .map(|(i, count)| format!("{:.1},{:.1}", x_pos(i, years.len()), y_pos(*count, max_count)))
        .collect();

    let _ = writeln!(
        svg,
        "  <polyline fill=\"none\" stroke=\"{}\" stroke-width=\"2\" points=\"{}\"/>",
        series.color,
        points.join(" ")
    );

    for (i, count) in series.values.iter().enumerate() {
        let _ = writeln!(
            svg,
            "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3\" fill=\"{}\"/>",
            x_pos(i, years.len()),
            y_pos(*count, max_count),
            series.color
        );
    }
}

fn draw_legend(svg: &mut String, series: &[Series; 3]) {
    for (i, s) in series.iter().enumerate() {
        let y = MARGIN_TOP + 16.0 * i as f64;
        let x = WIDTH - MARGIN_RIGHT - 120.0;
        let _ = writeln!(
            svg,
            "  <rect x=\"{x:.1}\" y=\"{:.1}\" width=\"12\" height=\"12\" fill=\"{}\"/>",
            y - 10.0,
            s.color
        );
        let _ = writeln!(svg, "  <text x=\"{:.1}\" y=\"{y:.1}\">{}</text>", x + 18.0, s.label);
    }
}

#[cfg(test)]
mod tests {
    use acadgen_parser::presentation::parse_str;

    use super::*;

    fn records(dates: &[&str]) -> Vec<Record> {
        let log: String = dates
            .iter()
            .map(|d| format!("Title: T\nDates: {d}\n\n"))
            .collect();
        parse_str(&log)
    }

    #[test]
    fn test_yearly_counts() {
        let counts = yearly_counts(&records(&["2020-01-01", "2020-05-02", "2022-03-03", "TBD"]));

        assert_eq!(counts.get(&2020), Some(&2));
        assert_eq!(counts.get(&2022), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_svg_has_three_series() {
        let svg = render_svg(
            &records(&["2020-01-01", "2021-01-01"]),
            &records(&["2021-06-01"]),
        );

        assert_eq!(svg.matches("<polyline").count(), 3);
        assert!(svg.contains("Domestic"));
        assert!(svg.contains("International"));
        assert!(svg.contains("Total"));
    }

    #[test]
    fn test_one_point_per_year_per_series() {
        let svg = render_svg(
            &records(&["2020-01-01", "2021-01-01"]),
            &records(&["2022-06-01"]),
        );

        // Three distinct years across both logs, three series.
        assert_eq!(svg.matches("<circle").count(), 9);
    }

    #[test]
    fn test_empty_logs_render_valid_svg() {
        let svg = render_svg(&[], &[]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert_eq!(svg.matches("<circle").count(), 0);
    }

    #[test]
    fn test_single_year_does_not_divide_by_zero() {
        let svg = render_svg(&records(&["2024-01-01"]), &[]);
        assert!(svg.contains("2024"));
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }
}
