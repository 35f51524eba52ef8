use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Result;
use crate::io::writers::padded_rows;
use crate::types::Grid;

/// Record terminator of the host platform.
fn line_terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}

/// Write `grid` as delimited text, one record per row.
///
/// Fields containing the delimiter, a quote, CR or LF are quoted with inner
/// quotes doubled. Short rows are padded with empty fields to the widest row.
pub fn write_delimited<W: Write>(writer: W, grid: &Grid, delimiter: u8) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(line_terminator())
        .from_writer(writer);

    for row in padded_rows(grid) {
        wtr.write_record(row.iter().map(|cell| cell.as_bytes()))?;
    }
    wtr.flush()?;
    Ok(())
}
