//! Template rendering for formsmith.
//! Substitutes `{identifier}` placeholders in template files and works out where
//! each rendered file belongs. Nothing here writes to the filesystem.
use crate::constants::PREVIEW_ROOT;
use crate::error::Result;
use crate::manifest::ConfigEntry;
use crate::scanner::TemplateFile;
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given values.
    ///
    /// # Arguments
    /// * `template` - Template text to render
    /// * `values` - Identifier to value map
    ///
    /// # Returns
    /// * `String` - Rendered text
    fn render(&self, template: &str, values: &IndexMap<String, String>) -> String;
}

/// Flat `{identifier}` substitution.
///
/// * `{key}` is replaced by the value of `key`, or by nothing when `key` is unknown.
/// * `{{` and `}}` produce a literal `{` and `}`.
/// * A `{` with no closing `}` on the same line, and a lone `}`, are kept as is.
///
/// Identifiers may contain any character other than braces and newlines, so
/// `{srv|port}` and `{db.host}` are both single placeholders.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, values: &IndexMap<String, String>) -> String {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(pos) = rest.find(|c: char| c == '{' || c == '}') {
            output.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if tail.starts_with("{{") {
                output.push('{');
                rest = &tail[2..];
            } else if tail.starts_with("}}") {
                output.push('}');
                rest = &tail[2..];
            } else if tail.starts_with('}') {
                output.push('}');
                rest = &tail[1..];
            } else {
                let body = &tail[1..];
                match body.find(|c: char| c == '{' || c == '}' || c == '\n') {
                    Some(end) if body[end..].starts_with('}') => {
                        let key = &body[..end];
                        output.push_str(values.get(key).map(String::as_str).unwrap_or(""));
                        rest = &body[end + 1..];
                    }
                    _ => {
                        output.push('{');
                        rest = body;
                    }
                }
            }
        }

        output.push_str(rest);
        output
    }
}

/// A rendered template ready to be written by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub destination: PathBuf,
    pub content: String,
}

/// Computes where a template lands: `export_root/relative`, or below
/// [`PREVIEW_ROOT`] when no export root is given.
pub fn destination_path(relative: &Path, export_root: Option<&Path>) -> PathBuf {
    match export_root {
        Some(root) => root.join(relative),
        None => Path::new(PREVIEW_ROOT).join(relative),
    }
}

/// Renders every template with [`PlaceholderRenderer`].
///
/// # Arguments
/// * `entries` - Manifest entries; their defaults fill identifiers missing from `values`
/// * `templates` - Templates in scan order
/// * `values` - Resolved identifier to value map
/// * `export_root` - Output root, or `None` for a preview
///
/// # Returns
/// * `Result<Vec<RenderedFile>>` - One rendered file per template, in the same order
///
/// # Errors
/// * `Error::IoError` if any template cannot be read; no output is returned then
pub fn render(
    entries: &[ConfigEntry],
    templates: &[TemplateFile],
    values: &IndexMap<String, String>,
    export_root: Option<&Path>,
) -> Result<Vec<RenderedFile>> {
    render_with(&PlaceholderRenderer, entries, templates, values, export_root)
}

/// Same as [`render`] with a caller-supplied engine.
pub fn render_with(
    engine: &dyn TemplateRenderer,
    entries: &[ConfigEntry],
    templates: &[TemplateFile],
    values: &IndexMap<String, String>,
    export_root: Option<&Path>,
) -> Result<Vec<RenderedFile>> {
    let mut context: IndexMap<String, String> = entries
        .iter()
        .map(|entry| (entry.identifier.clone(), entry.default.clone()))
        .collect();
    context.extend(values.iter().map(|(k, v)| (k.clone(), v.clone())));

    templates
        .iter()
        .map(|template| -> Result<RenderedFile> {
            debug!("Rendering {}", template.source.display());
            let text = fs::read_to_string(&template.source)?;
            Ok(RenderedFile {
                destination: destination_path(&template.relative, export_root),
                content: engine.render(&text, &context),
            })
        })
        .collect()
}

/// Formats rendered files as a single preview listing.
pub fn format_preview(files: &[RenderedFile]) -> String {
    files
        .iter()
        .map(|file| format!("=====> {} <=====\n{}\n\n", file.destination.display(), file.content))
        .collect()
}
