//! Command-line interface implementation for formsmith.
//! Provides argument parsing using clap.

use crate::error::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for formsmith.
#[derive(Parser, Debug)]
#[command(author, version, about = "formsmith: fill out a configuration form and render templates", long_about = None)]
pub struct Args {
    /// Manifest file, or a directory containing manifest.yaml / manifest.yml / manifest.json
    #[arg(value_name = "MANIFEST", default_value = ".")]
    pub manifest: PathBuf,

    /// Export the rendered templates into this directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Load saved overrides from a blob file before anything else
    #[arg(short, long, value_name = "FILE")]
    pub load: Option<PathBuf>,

    /// Save the final overrides as a blob file
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Override an entry, e.g. --set 'srv|port=9090'. An empty value clears it
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Fill out the form interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// List all configuration entries
    #[arg(long)]
    pub list: bool,

    /// Print the rendered templates without writing anything
    #[arg(short, long)]
    pub preview: bool,

    /// Export even if the target directory already exists
    #[arg(short, long)]
    pub force: bool,

    /// Skip the confirmation before exporting
    #[arg(short, long)]
    pub yes: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Splits a `KEY=VALUE` override at its first `=`.
pub fn parse_override(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(Error::InvalidOverride(raw.to_string())),
    }
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
