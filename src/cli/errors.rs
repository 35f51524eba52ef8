use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("{first} cannot be combined with {second}")]
    ConflictingArguments {
        first: &'static str,
        second: &'static str,
    },

    #[error("{errors} of {total} files failed to convert")]
    BatchFailures { errors: usize, total: usize },

    #[error(transparent)]
    Convert(#[from] html2sheet::Error),
}
