//! Common constants used throughout formsmith.

/// Joins the `ident` fragments of nested manifest nodes into an entry identifier.
pub const IDENT_SEPARATOR: &str = "|";

/// Manifest file names looked up when a directory is given instead of a file
pub const MANIFEST_FILES: [&str; 3] = ["manifest.yaml", "manifest.yml", "manifest.json"];

/// Root used for destination paths when rendering without an export root.
/// Purely cosmetic: nothing is ever written below it.
pub const PREVIEW_ROOT: &str = "preview_root";
