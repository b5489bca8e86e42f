//! formsmith turns a declarative manifest of configuration items into a form,
//! collects the user's overrides and renders a directory of templates with them.
//! Overrides can be saved to and restored from a compact text blob.

/// Command-line interface module
pub mod cli;

/// Save/load format for overrides
pub mod codec;

pub mod constants;

/// Error types and handling for formsmith
pub mod error;

/// Writing rendered output to disk
pub mod export;

/// Ignore patterns for the template tree
pub mod ignore;

pub mod logger;

/// Manifest loading and flattening
/// Supports JSON and YAML manifests
pub mod manifest;

/// Session state tying manifest, templates and overrides together
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Placeholder substitution and destination paths
pub mod renderer;

/// Template discovery
pub mod scanner;

/// Override storage
pub mod store;
