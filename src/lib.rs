#![doc = r#"
html2sheet — pull the table out of an HTML page and save it as CSV, TSV or XLSX.

The crate finds the first `<table>` in a document (or the first one matching a
CSS selector), turns its rows and cells into a grid of trimmed,
whitespace-collapsed strings, and writes that grid as delimited text or as a
single-sheet workbook. It powers the `html2sheet` CLI and can be embedded
directly.

Quick start: convert a file
---------------------------
```rust,no_run
use std::path::Path;
use html2sheet::{convert_html_file, ExtractParams, OutputFormat};

fn main() -> html2sheet::Result<()> {
    let params = ExtractParams {
        default_format: OutputFormat::Csv,
        ..ExtractParams::default()
    };
    // Writes agents.csv next to agents.html
    let target = convert_html_file(Path::new("agents.html"), None, &params)?;
    println!("saved to {}", target.path.display());
    Ok(())
}
```

Extract in memory
-----------------
```rust
use html2sheet::build_grid;

let grid = build_grid(
    "<table><tr><th>Name</th><th>Phone</th></tr>\
     <tr><td> Jane\n Doe </td><td>555-1234</td></tr></table>",
)
.unwrap();
assert_eq!(grid, vec![vec!["Name", "Phone"], vec!["Jane Doe", "555-1234"]]);
```

Error handling
--------------
All public functions return `html2sheet::Result<T>`; match on `html2sheet::Error`
to tell the failing stage apart.

```rust
use html2sheet::{build_grid, Error};

match build_grid("<p>no table</p>") {
    Err(Error::NoTable { selector }) => assert_eq!(selector, "table"),
    other => panic!("unexpected: {other:?}"),
}
```

Conventions
-----------
- Rows shorter than the widest row are padded with empty cells on output.
- Outputs are written to a temporary file and renamed into place, so a
  failed run never leaves a partial file.
- Workbook cells are text unless `ExtractParams::coerce_numbers` is set; see
  [`io::writers::xlsx::numeric_value`] for the exact rule.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — grid builder, parameters and output target resolution.
- [`io`] — input reading and the CSV/TSV/XLSX writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::grid::{build_grid, build_grid_with_selector};
pub use crate::core::params::ExtractParams;
pub use crate::core::target::{OutputTarget, resolve_target};
pub use error::{Error, Result};
pub use types::{Grid, OutputFormat};

pub use io::writers::write_grid;

pub use api::{BatchReport, convert_directory, convert_html_file, extract_grid};
