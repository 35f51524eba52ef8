use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use html2sheet::{ExtractParams, convert_directory, convert_html_file};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn convert_single_file(
    input: &Path,
    output: Option<&Path>,
    params: &ExtractParams,
) -> Result<(), AppError> {
    info!("Converting {:?} with selector `{}`", input, params.selector);
    let target = convert_html_file(input, output, params)?;
    println!(
        "Table successfully extracted and saved to {}",
        target.path.display()
    );
    Ok(())
}

fn convert_batch(
    input_dir: &Path,
    output_dir: &Path,
    params: &ExtractParams,
) -> Result<(), AppError> {
    info!("Starting batch conversion from directory: {:?}", input_dir);
    info!("Output directory: {:?}", output_dir);

    let report = convert_directory(input_dir, output_dir, params, true)?;

    info!("Batch conversion complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);
    println!(
        "Converted {} files into {} ({} skipped, {} failed)",
        report.processed,
        output_dir.display(),
        report.skipped,
        report.errors
    );

    if report.errors > 0 {
        return Err(AppError::BatchFailures {
            errors: report.errors,
            total: report.processed + report.errors,
        });
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    let params = args.params();

    if let Some(input_dir) = args.input_dir.as_deref() {
        if args.input.is_some() {
            return Err(AppError::ConflictingArguments {
                first: "--input-dir",
                second: "an INPUT file",
            });
        }
        let output_dir = args.output_dir.as_deref().ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;
        return convert_batch(input_dir, output_dir, &params);
    }

    if args.output_dir.is_some() {
        return Err(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        });
    }
    let input = args.input.as_deref().ok_or(AppError::MissingArgument {
        arg: "INPUT".to_string(),
    })?;
    convert_single_file(input, args.output.as_deref(), &params)
}
