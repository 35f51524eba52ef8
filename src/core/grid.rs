//! Table locator and grid builder.
//!
//! Parses an HTML document (tolerant of malformed markup), picks the first
//! `<table>` matching a CSS selector in document order, and walks its own
//! rows and cells into a [`Grid`]. Rows of nested tables are not attributed
//! to the outer table.
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::core::params::DEFAULT_SELECTOR;
use crate::error::{Error, Result};
use crate::types::Grid;

/// Build a grid from the first `<table>` in `html`.
pub fn build_grid(html: &str) -> Result<Grid> {
    build_grid_with_selector(html, DEFAULT_SELECTOR)
}

/// Build a grid from the first `<table>` element matching `selector`.
///
/// Elements that match the selector but are not tables are skipped, so
/// `#results` and `table#results` behave the same.
pub fn build_grid_with_selector(html: &str, selector: &str) -> Result<Grid> {
    let table_selector = Selector::parse(selector).map_err(|e| Error::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;

    let document = Html::parse_document(html);
    let table = document
        .select(&table_selector)
        .find(|el| is_named(el, "table"))
        .ok_or_else(|| Error::NoTable {
            selector: selector.to_string(),
        })?;

    let grid: Grid = table_rows(table)
        .map(|row| row_cells(row).map(cell_text).collect())
        .collect();

    debug!(
        "Extracted {} rows (widest {} cells) using selector `{}`",
        grid.len(),
        grid.iter().map(Vec::len).max().unwrap_or(0),
        selector
    );
    Ok(grid)
}

fn is_named(el: &ElementRef<'_>, name: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(name)
}

/// `<tr>` elements whose nearest enclosing table is `table`, in document order.
fn table_rows<'a>(table: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    let table_id = table.id();
    table
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| is_named(el, "tr"))
        .filter(move |row| {
            row.ancestors()
                .filter_map(ElementRef::wrap)
                .find(|el| is_named(el, "table"))
                .map(|owner| owner.id())
                == Some(table_id)
        })
}

/// Direct `<td>`/`<th>` children of a row; header and data cells are equal.
fn row_cells<'a>(row: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| is_named(el, "td") || is_named(el, "th"))
}

/// Elements that start a new line when rendered.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Visible text of a cell, trimmed, with internal whitespace runs collapsed.
/// Line breaks and block boundaries count as whitespace.
fn cell_text(cell: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_visible_text(cell, &mut raw);
    collapse_whitespace(&raw)
}

fn push_visible_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            continue;
        }
        let Some(child_el) = ElementRef::wrap(child) else {
            continue;
        };
        let name = child_el.value().name();
        if name.eq_ignore_ascii_case("br") {
            out.push(' ');
        } else if matches!(name, "script" | "style" | "template") {
            continue;
        } else if BLOCK_ELEMENTS.iter().any(|b| name.eq_ignore_ascii_case(b)) {
            out.push(' ');
            push_visible_text(child_el, out);
            out.push(' ');
        } else {
            push_visible_text(child_el, out);
        }
    }
}

pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn header_and_data_cells_are_treated_alike() {
        let html = "<table><tr><th>Name</th><th>Phone</th></tr>\
                    <tr><td>Jane Doe</td><td>555-1234</td></tr></table>";
        let grid = build_grid(html).unwrap();
        assert_eq!(
            grid,
            vec![row(&["Name", "Phone"]), row(&["Jane Doe", "555-1234"])]
        );
    }

    #[test]
    fn cell_text_is_trimmed_and_collapsed() {
        let html = "<table><tr><td>\n   Smith,\n\t John   <b>\"The Rep\"</b>\n</td></tr></table>";
        let grid = build_grid(html).unwrap();
        assert_eq!(grid, vec![row(&["Smith, John \"The Rep\""])]);
    }

    #[test]
    fn inline_markup_does_not_split_words() {
        let html = "<table><tr><td><b>J</b>ane <i>Doe</i></td></tr></table>";
        assert_eq!(build_grid(html).unwrap(), vec![row(&["Jane Doe"])]);
    }

    #[test]
    fn line_breaks_separate_words() {
        let html = "<table><tr><td>Jane<br>Doe</td><td>a<br/><br/>b</td></tr></table>";
        assert_eq!(build_grid(html).unwrap(), vec![row(&["Jane Doe", "a b"])]);
    }

    #[test]
    fn block_elements_separate_words() {
        let html = "<table><tr><td><p>a</p><p>b</p></td>\
                    <td><div>x</div>y<ul><li>1</li><li>2</li></ul></td></tr></table>";
        assert_eq!(build_grid(html).unwrap(), vec![row(&["a b", "x y 1 2"])]);
    }

    #[test]
    fn scripts_and_styles_are_not_visible_text() {
        let html = "<table><tr><td>kept<script>var x = 1;</script><style>td{}</style></td>\
                    </tr></table>";
        assert_eq!(build_grid(html).unwrap(), vec![row(&["kept"])]);
    }

    #[test]
    fn no_table_is_an_error() {
        let err = build_grid("<html><body><p>nothing here</p></body></html>").unwrap_err();
        assert!(matches!(err, Error::NoTable { .. }));
        assert!(err.to_string().contains("No table found"));
    }

    #[test]
    fn first_table_in_document_order_wins() {
        let html = "<table><tr><td>first</td></tr></table>\
                    <table><tr><td>second</td></tr></table>";
        assert_eq!(build_grid(html).unwrap(), vec![row(&["first"])]);
    }

    #[test]
    fn thead_tbody_tfoot_rows_keep_document_order() {
        let html = "<table><thead><tr><th>h</th></tr></thead>\
                    <tbody><tr><td>1</td></tr><tr><td>2</td></tr></tbody>\
                    <tfoot><tr><td>total</td></tr></tfoot></table>";
        assert_eq!(
            build_grid(html).unwrap(),
            vec![row(&["h"]), row(&["1"]), row(&["2"]), row(&["total"])]
        );
    }

    #[test]
    fn ragged_rows_keep_their_own_length() {
        let html = "<table><tr><td>a</td><td>b</td><td>c</td></tr>\
                    <tr><td>d</td></tr><tr></tr></table>";
        let grid = build_grid(html).unwrap();
        assert_eq!(grid, vec![row(&["a", "b", "c"]), row(&["d"]), row(&[])]);
    }

    #[test]
    fn nested_table_rows_are_not_lifted_into_outer_table() {
        let html = "<table><tr><td>outer</td>\
                    <td><table><tr><td>inner</td></tr></table></td></tr></table>";
        let grid = build_grid(html).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0][0], "outer");
    }

    #[test]
    fn malformed_markup_is_tolerated() {
        let html = "<table><tr><td>a<td>b<tr><td>c";
        let grid = build_grid(html).unwrap();
        assert_eq!(grid, vec![row(&["a", "b"]), row(&["c"])]);
    }

    #[test]
    fn selector_picks_the_matching_table() {
        let html = "<table><tr><td>nav</td></tr></table>\
                    <table id=\"resultsGrid\"><tr><td>wanted</td></tr></table>";
        let grid = build_grid_with_selector(html, "#resultsGrid").unwrap();
        assert_eq!(grid, vec![row(&["wanted"])]);
    }

    #[test]
    fn selector_skips_non_table_matches() {
        let html = "<div class=\"data\">x</div>\
                    <table class=\"data\"><tr><td>y</td></tr></table>";
        let grid = build_grid_with_selector(html, ".data").unwrap();
        assert_eq!(grid, vec![row(&["y"])]);
    }

    #[test]
    fn selector_without_match_reports_no_table() {
        let html = "<table><tr><td>x</td></tr></table>";
        let err = build_grid_with_selector(html, "#missing").unwrap_err();
        match err {
            Error::NoTable { selector } => assert_eq!(selector, "#missing"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_selector_is_rejected() {
        let err = build_grid_with_selector("<table></table>", "td[").unwrap_err();
        assert!(matches!(err, Error::InvalidSelector { .. }));
    }

    #[test]
    fn collapse_whitespace_handles_blank_input() {
        assert_eq!(collapse_whitespace(" \n\t "), "");
        assert_eq!(collapse_whitespace("a\n\nb"), "a b");
    }

    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }

    /// Render a cell with the given padding and a whitespace run in place of
    /// every inner space.
    fn render_cell(tag: &str, text: &str, pad: &str, gap: &str) -> String {
        let body = escape_html(text).replace(' ', gap);
        format!("<{tag}>{pad}{body}{pad}</{tag}>")
    }

    fn table_case() -> impl Strategy<Value = (Grid, String, String)> {
        (1usize..5, 1usize..6).prop_flat_map(|(cols, rows)| {
            (
                proptest::collection::vec(
                    proptest::collection::vec(
                        "[a-zA-Z0-9&<>\"',]{1,5}( [a-zA-Z0-9&<>\"',]{1,5}){0,2}",
                        cols,
                    ),
                    rows,
                ),
                "[ \t\n]{0,3}",
                "[ \t\n]{1,3}",
            )
        })
    }

    proptest! {
        #[test]
        fn table_shape_and_text_survive_extraction((expected, pad, gap) in table_case()) {
            let mut html = String::from("<html><body>\n<table>\n");
            for (i, cells) in expected.iter().enumerate() {
                let tag = if i == 0 { "th" } else { "td" };
                html.push_str("  <tr>");
                for cell in cells {
                    html.push_str(&render_cell(tag, cell, &pad, &gap));
                }
                html.push_str("</tr>\n");
            }
            html.push_str("</table>\n</body></html>");

            let grid = build_grid(&html).unwrap();
            prop_assert_eq!(grid.len(), expected.len());
            for row in &grid {
                prop_assert_eq!(row.len(), expected[0].len());
            }
            prop_assert_eq!(grid, expected);
        }
    }
}
