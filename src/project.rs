//! A configuration session: the parsed manifest, its templates and the user's overrides.

use crate::codec;
use crate::error::Result;
use crate::ignore::build_ignore_set;
use crate::manifest::{flatten, load_manifest, ConfigEntry, Manifest};
use crate::renderer::{format_preview, render, RenderedFile};
use crate::scanner::{scan_with_ignore, TemplateFile};
use crate::store::ValueStore;
use indexmap::IndexMap;
use log::info;
use std::path::{Path, PathBuf};

/// Everything the presentation layer works with.
///
/// Entries and templates are fixed once the project is opened; only the
/// value store changes afterwards.
#[derive(Debug)]
pub struct Project {
    manifest: Manifest,
    entries: Vec<ConfigEntry>,
    templates: Vec<TemplateFile>,
    store: ValueStore,
}

impl Project {
    /// Loads the manifest at `path`, flattens it and scans its template root.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let manifest = load_manifest(path)?;
        Self::from_manifest(manifest)
    }

    pub fn from_manifest(manifest: Manifest) -> Result<Self> {
        info!("Welcome to {} Ver {}.", manifest.meta.title, manifest.meta.version);

        let entries = flatten(&manifest.config)?;
        info!("We got {} config entries in all.", entries.len());

        let ignored = build_ignore_set(&manifest.target.ignore)?;
        let templates = scan_with_ignore(&manifest.target.base, &ignored)?;

        Ok(Self { manifest, entries, templates, store: ValueStore::new() })
    }

    /// Window-title style banner, `"<title> v<version>"`.
    pub fn banner(&self) -> String {
        format!("{} v{}", self.manifest.meta.title, self.manifest.meta.version)
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    pub fn templates(&self) -> &[TemplateFile] {
        &self.templates
    }

    pub fn store(&self) -> &ValueStore {
        &self.store
    }

    pub fn set(&mut self, identifier: &str, value: &str) {
        self.store.set(identifier, value);
    }

    pub fn clear(&mut self, identifier: &str) {
        self.store.clear(identifier);
    }

    /// Current value of `identifier`: its override, else its default.
    pub fn value(&self, identifier: &str) -> Option<&str> {
        self.store.get(identifier).or_else(|| {
            self.entries
                .iter()
                .rev()
                .find(|entry| entry.identifier == identifier)
                .map(|entry| entry.default.as_str())
        })
    }

    /// What a form field shows for `entry`: the override, or empty when the
    /// entry is at its default.
    pub fn form_value(&self, entry: &ConfigEntry) -> String {
        match self.store.get(&entry.identifier) {
            Some(value) if value != entry.default => value.to_string(),
            _ => String::new(),
        }
    }

    pub fn resolved(&self) -> IndexMap<String, String> {
        self.store.resolved(&self.entries)
    }

    /// Renders all templates. `None` renders a preview with cosmetic paths.
    pub fn render(&self, export_root: Option<&Path>) -> Result<Vec<RenderedFile>> {
        render(&self.entries, &self.templates, &self.resolved(), export_root)
    }

    pub fn preview(&self) -> Result<String> {
        Ok(format_preview(&self.render(None)?))
    }

    /// Directory that an export into `dir` actually fills.
    pub fn export_root(&self, dir: &Path) -> PathBuf {
        match &self.manifest.target.export_folder {
            Some(folder) => dir.join(folder),
            None => dir.to_path_buf(),
        }
    }

    pub fn encode(&self) -> Result<String> {
        codec::encode(&self.store)
    }

    /// Replaces all overrides with those in `blob`. On error the store is unchanged.
    pub fn decode(&mut self, blob: &str) -> Result<()> {
        self.store = codec::decode(blob)?;
        Ok(())
    }

    pub fn save_blob<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        codec::save_to_file(&self.store, path)
    }

    pub fn load_blob<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.store = codec::load_from_file(path)?;
        Ok(())
    }
}
