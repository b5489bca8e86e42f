//! Template discovery.
//! Enumerates the regular files below a template root. File contents are not
//! touched here; the renderer reads them when it needs them.

use crate::error::Result;
use globset::GlobSet;
use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A discovered template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Location of the template on disk
    pub source: PathBuf,
    /// Path below the template root, reproduced verbatim under the export root
    pub relative: PathBuf,
}

/// Lists every regular file under `root`.
///
/// Directories are traversed but not returned. Symlinks are neither followed
/// nor returned. Entries are visited in file name order within each directory,
/// so the result is stable for an unchanged tree.
///
/// # Errors
/// * `Error::IoError` if `root` is not a readable directory
/// * `Error::WalkDirError` if any directory below it cannot be read
pub fn scan<P: AsRef<Path>>(root: P) -> Result<Vec<TemplateFile>> {
    scan_filtered(root.as_ref(), None)
}

/// Like [`scan`], but skips files whose relative path matches `ignored`.
pub fn scan_with_ignore<P: AsRef<Path>>(root: P, ignored: &GlobSet) -> Result<Vec<TemplateFile>> {
    scan_filtered(root.as_ref(), Some(ignored))
}

fn scan_filtered(root: &Path, ignored: Option<&GlobSet>) -> Result<Vec<TemplateFile>> {
    if !std::fs::metadata(root)?.is_dir() {
        return Err(io::Error::other(format!(
            "template root '{}' is not a directory",
            root.display()
        ))
        .into());
    }

    let mut templates = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let source = entry.path().to_path_buf();
        let relative = source
            .strip_prefix(root)
            .map_err(|e| io::Error::other(e.to_string()))?
            .to_path_buf();

        if ignored.is_some_and(|set| set.is_match(&relative)) {
            debug!("Skipping ignored file {}", relative.display());
            continue;
        }
        debug!("Found template {}", relative.display());
        templates.push(TemplateFile { source, relative });
    }

    info!("Found {} template files in {}", templates.len(), root.display());
    Ok(templates)
}
