//! Minimal single-sheet XLSX writer.
//!
//! Emits the five parts a SpreadsheetML package needs (content types, package
//! relationships, workbook, workbook relationships, one worksheet). Every
//! cell of the padded grid is written, empty ones included, so readers see
//! the full rectangle. Cells are inline strings unless numeric coercion is
//! on and the value passes [`numeric_value`]. No styles, formulas or document
//! properties are written, and every archive entry carries the same fixed
//! timestamp, so identical grids produce identical bytes.
use std::io::{Seek, Write};

use quick_xml::escape::escape;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::{Error, Result};
use crate::io::writers::{grid_width, padded_rows};
use crate::types::Grid;

pub const SHEET_NAME: &str = "Sheet1";

const MAX_ROWS: usize = 1_048_576;
const MAX_COLS: usize = 16_384;

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    r#"</Types>"#
);

const PACKAGE_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
    r#"</Relationships>"#
);

const WORKBOOK_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
    r#"</Relationships>"#
);

fn workbook_xml() -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            r#"<sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets>"#,
            r#"</workbook>"#
        ),
        SHEET_NAME
    )
}

/// Significant digits a spreadsheet keeps for a number.
pub const MAX_SIGNIFICANT_DIGITS: usize = 15;

/// Parse `text` as a number only if writing the number back gives `text`
/// and it has at most [`MAX_SIGNIFICANT_DIGITS`] digits after leading zeros.
///
/// `"555"`, `"-1.5"` and `"0.25"` qualify; `"007"`, `"1.50"`, `"+3"`, `"1e3"`,
/// `"NaN"`, `"inf"` and `"12345678901234568"` stay text, so a coerced cell
/// reads back unchanged.
pub fn numeric_value(text: &str) -> Option<f64> {
    let value: f64 = text.parse().ok()?;
    let digits = text
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|&c| c == '0')
        .count();
    (value.is_finite() && digits <= MAX_SIGNIFICANT_DIGITS && value.to_string() == text)
        .then_some(value)
}

/// 1-based column number to its A1-style letters (1 -> A, 27 -> AA).
fn column_letters(mut col: usize) -> String {
    let mut letters = Vec::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        col = (col - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Characters XML 1.0 cannot carry are dropped.
fn xml_safe(text: &str) -> String {
    text.chars()
        .filter(|&c| {
            matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
        })
        .collect()
}

fn sheet_xml(grid: &Grid, coerce_numbers: bool) -> String {
    let width = grid_width(grid);
    let mut xml = String::with_capacity(256 + grid.len() * width.max(1) * 48);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#);
    if width > 0 && !grid.is_empty() {
        xml.push_str(&format!(
            r#"<dimension ref="A1:{}{}"/>"#,
            column_letters(width),
            grid.len()
        ));
    }
    xml.push_str("<sheetData>");

    let columns: Vec<String> = (1..=width).map(column_letters).collect();
    for (row_idx, row) in padded_rows(grid).enumerate() {
        let row_num = row_idx + 1;
        xml.push_str(&format!(r#"<row r="{}">"#, row_num));
        for (col_idx, value) in row.iter().enumerate() {
            let cell_ref = format!("{}{}", columns[col_idx], row_num);
            if coerce_numbers && numeric_value(value).is_some() {
                xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, cell_ref, value));
            } else {
                let text = xml_safe(value);
                xml.push_str(&format!(
                    r#"<c r="{}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                    cell_ref,
                    escape(&text)
                ));
            }
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Write `grid` as a single-sheet workbook into `writer`, returning it.
///
/// Short rows are padded to the widest row (the padding is empty cells).
pub fn write_workbook<W: Write + Seek>(
    writer: W,
    grid: &Grid,
    coerce_numbers: bool,
) -> Result<W> {
    let width = grid_width(grid);
    if grid.len() > MAX_ROWS || width > MAX_COLS {
        return Err(Error::SheetTooLarge {
            rows: grid.len(),
            cols: width,
        });
    }

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let workbook = workbook_xml();
    let sheet = sheet_xml(grid, coerce_numbers);
    debug!(
        "Workbook sheet: {} rows x {} columns, {} bytes of XML",
        grid.len(),
        width,
        sheet.len()
    );

    let parts: [(&str, &[u8]); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
        ("_rels/.rels", PACKAGE_RELS_XML.as_bytes()),
        ("xl/workbook.xml", workbook.as_bytes()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML.as_bytes()),
        ("xl/worksheets/sheet1.xml", sheet.as_bytes()),
    ];

    let mut zip = ZipWriter::new(writer);
    for (name, body) in parts {
        zip.start_file(name, options)?;
        zip.write_all(body)?;
    }
    Ok(zip.finish()?)
}
