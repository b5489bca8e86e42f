//! Error handling for formsmith.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for formsmith operations.
///
/// Every failure aborts the operation that triggered it. Parsed entries and the
/// value store are left exactly as they were before the failing call.
#[derive(Error, Debug)]
pub enum Error {
    /// A described manifest node has no `default`.
    #[error("Manifest error: entry '{description}' has no default value")]
    ManifestError { description: String },

    /// The manifest document could not be parsed.
    #[error("Manifest format error: {0}")]
    ManifestFormatError(String),

    /// No manifest file exists at the given location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Errors raised while walking the template tree
    #[error("IO error while scanning templates: {0}")]
    WalkDirError(#[from] walkdir::Error),

    /// A persisted blob is corrupt or was not produced by this tool.
    #[error("Codec error: {0}")]
    CodecError(String),

    /// Represents errors in the manifest's ignore patterns
    #[error("Ignore pattern error: {0}")]
    IgnorePatternError(String),

    #[error("Output directory '{output_dir}' already exists. Use --force to overwrite it")]
    OutputDirectoryExistsError { output_dir: String },

    /// Represents errors that occur during user interaction
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// A `KEY=VALUE` override given on the command line is malformed.
    #[error("Invalid override '{0}': expected KEY=VALUE")]
    InvalidOverride(String),
}

/// Convenience type alias for Results with formsmith's [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
