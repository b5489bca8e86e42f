//! Writing rendered output to disk.
//!
//! Files are written one after another. A failure part way leaves the files
//! written so far in place.

use crate::error::{Error, Result};
use crate::renderer::RenderedFile;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Ensures the output directory is safe to write to.
///
/// # Arguments
/// * `output_dir` - Target directory path for generated output
/// * `force` - Whether to overwrite existing directory
///
/// # Returns
/// * `Result<PathBuf>` - Validated output directory path
///
/// # Errors
/// * Returns `Error::OutputDirectoryExistsError` if directory exists and force is false
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

fn write_file(content: &str, dest_path: &Path) -> Result<()> {
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest_path, content)?;
    Ok(())
}

/// Writes every rendered file, creating parent directories as needed.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths written, in order
pub fn write_rendered(files: &[RenderedFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        write_file(&file.content, &file.destination)?;
        debug!("File {} written", file.destination.display());
        written.push(file.destination.clone());
    }
    Ok(written)
}
