//! Ignore pattern handling for the template tree.
//! Files matching these patterns are never treated as templates.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Compiles the manifest's `target.ignore` patterns.
///
/// Only the listed patterns are applied. With an empty list every file under
/// the template root is a template.
///
/// # Arguments
/// * `patterns` - Glob patterns matched against paths relative to the template root
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns for path matching
///
/// # Errors
/// * `Error::IgnorePatternError` if a pattern is not a valid glob
///
/// # Example
/// ```yaml
/// target:
///   base: templates
///   ignore:
///     - "*.bak"
///     - "drafts/**"
/// ```
pub fn build_ignore_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns.iter().map(|p| p.as_ref()) {
        debug!("Adding ignore pattern '{pattern}'");
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::IgnorePatternError(format!("invalid pattern '{pattern}': {e}"))
        })?);
    }
    builder.build().map_err(|e| Error::IgnorePatternError(e.to_string()))
}
