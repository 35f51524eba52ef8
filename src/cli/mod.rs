//! Command Line Interface (CLI) layer for html2sheet.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file and batch
//! conversion. It wires user-provided options to the library API
//! exposed via `html2sheet::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
