//! Save/load format for user overrides.
//!
//! A blob is the store's JSON object form wrapped in standard base64, which
//! keeps it on a single printable-ASCII line with no quotes or braces. Such a
//! blob can be pasted into chat, a ticket or a config file without escaping.

use crate::error::{Error, Result};
use crate::store::ValueStore;
use base64::{engine::general_purpose, Engine as _};
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes the overrides into a blob.
pub fn encode(store: &ValueStore) -> Result<String> {
    let json = serde_json::to_string(store)
        .map_err(|e| Error::CodecError(format!("cannot serialize overrides: {e}")))?;
    debug!("Encoding overrides: {json}");
    Ok(general_purpose::STANDARD.encode(json.as_bytes()))
}

/// Restores overrides from a blob produced by [`encode`].
///
/// Surrounding whitespace (such as a trailing newline in a saved file) is ignored.
///
/// # Errors
/// * `Error::CodecError` if the blob is not valid base64, not UTF-8, or not a
///   JSON object of string values
pub fn decode(blob: &str) -> Result<ValueStore> {
    let bytes = general_purpose::STANDARD
        .decode(blob.trim())
        .map_err(|e| Error::CodecError(format!("invalid base64: {e}")))?;
    let json = String::from_utf8(bytes)
        .map_err(|e| Error::CodecError(format!("payload is not UTF-8: {e}")))?;
    debug!("Decoded overrides: {json}");

    let overrides: IndexMap<String, String> = serde_json::from_str(&json)
        .map_err(|e| Error::CodecError(format!("invalid payload: {e}")))?;

    let mut store = ValueStore::new();
    store.replace(overrides);
    Ok(store)
}

/// Writes the blob for `store` to `path`.
pub fn save_to_file<P: AsRef<Path>>(store: &ValueStore, path: P) -> Result<()> {
    let blob = encode(store)?;
    fs::write(path.as_ref(), blob)?;
    debug!("Saved {} overrides to {}", store.len(), path.as_ref().display());
    Ok(())
}

/// Reads and decodes a blob file.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ValueStore> {
    let blob = fs::read_to_string(path.as_ref())?;
    decode(&blob)
}
