use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Invalid validation pattern. Original error: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The target file could not be read or written back.
    #[error("Cannot substitute in '{}'. Original error: {source}", .file.display())]
    SubstitutionError { file: PathBuf, source: std::io::Error },

    #[error("Setup has already been finalized.")]
    AlreadyFinalized,
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
