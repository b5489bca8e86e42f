//! Manifest handling for formsmith.
//! This module loads the declarative manifest document and flattens its nested
//! `config` tree into an ordered list of addressable configuration entries.

use crate::constants::{IDENT_SEPARATOR, MANIFEST_FILES};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A scalar manifest value. YAML authors write `version: 1.2` or `default: 8080`
/// without quotes, so numbers and booleans are accepted and used as their text.
///
/// Numbers keep YAML's number formatting: `1.0` stays `1.0` and integers up to
/// `u64::MAX` are kept exactly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Str(String),
    Number(serde_yaml::Number),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => write!(f, "{s}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Product metadata shown to the user.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    pub title: String,
    pub version: Scalar,
}

/// Where the templates live and how the output tree is laid out.
#[derive(Debug, Clone, Deserialize)]
pub struct Target {
    /// Template root directory
    pub base: PathBuf,

    /// Glob patterns, relative to `base`, of files that are not templates
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Folder created under the export directory to hold the rendered tree
    #[serde(default)]
    pub export_folder: Option<PathBuf>,
}

/// One node of the nested configuration tree.
///
/// A node with a `description` declares an entry; a node without one only
/// groups its children (and extends their prefix when it carries an `ident`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestNode {
    #[serde(default)]
    pub ident: Option<Scalar>,
    #[serde(default)]
    pub description: Option<Scalar>,
    #[serde(default)]
    pub default: Option<Scalar>,
    #[serde(default)]
    pub subs: Vec<ManifestNode>,
}

/// The whole manifest document.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub meta: Meta,
    pub target: Target,
    pub config: ManifestNode,
}

/// A single user-configurable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub identifier: String,
    pub description: String,
    pub default: String,
}

/// Flattens a manifest tree into its entries, in pre-order.
///
/// # Arguments
/// * `root` - Root node of the configuration tree
///
/// # Returns
/// * `Result<Vec<ConfigEntry>>` - One entry per node carrying a `description`
///
/// # Errors
/// * `Error::ManifestError` if a described node has no `default`
pub fn flatten(root: &ManifestNode) -> Result<Vec<ConfigEntry>> {
    let mut entries = Vec::new();
    collect_entries(root, &[], &mut entries)?;
    debug!("Flattened manifest into {} entries", entries.len());
    Ok(entries)
}

fn collect_entries(
    node: &ManifestNode,
    parent_prefix: &[String],
    entries: &mut Vec<ConfigEntry>,
) -> Result<()> {
    // Each node gets its own copy so siblings never see each other's fragments.
    let mut prefix = parent_prefix.to_vec();
    if let Some(ident) = &node.ident {
        prefix.push(ident.to_string());
    }

    if let Some(description) = &node.description {
        let description = description.to_string();
        let default = match &node.default {
            Some(default) => default.to_string(),
            None => return Err(Error::ManifestError { description }),
        };
        entries.push(ConfigEntry {
            identifier: prefix.join(IDENT_SEPARATOR),
            description,
            default,
        });
    }

    for sub in &node.subs {
        collect_entries(sub, &prefix, entries)?;
    }
    Ok(())
}

/// Parses manifest content, trying JSON first and YAML second.
pub fn parse_manifest(content: &str) -> Result<Manifest> {
    match serde_json::from_str(content) {
        Ok(manifest) => Ok(manifest),
        Err(_) => serde_yaml::from_str(content).map_err(|e| {
            Error::ManifestFormatError(format!("Invalid manifest format: {e}"))
        }),
    }
}

/// Resolves the manifest file for a path that is either the file itself or a
/// directory holding one of [`MANIFEST_FILES`].
pub fn locate_manifest<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if path.is_dir() {
        for file in MANIFEST_FILES {
            let candidate = path.join(file);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
        return Err(Error::ManifestNotFound {
            path: format!("{} (tried: {})", path.display(), MANIFEST_FILES.join(", ")),
        });
    }
    Err(Error::ManifestNotFound { path: path.display().to_string() })
}

/// Loads a manifest from disk.
///
/// A relative `target.base` is resolved against the directory containing the
/// manifest file.
///
/// # Errors
/// * `Error::ManifestNotFound` if no manifest exists at `path`
/// * `Error::IoError` if the file cannot be read
/// * `Error::ManifestFormatError` if the document is malformed
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Manifest> {
    let manifest_path = locate_manifest(path)?;
    debug!("Loading manifest from {}", manifest_path.display());
    let content = std::fs::read_to_string(&manifest_path)?;
    let mut manifest = parse_manifest(&content)?;

    if manifest.target.base.is_relative() {
        if let Some(dir) = manifest_path.parent() {
            manifest.target.base = dir.join(&manifest.target.base);
        }
    }
    Ok(manifest)
}
