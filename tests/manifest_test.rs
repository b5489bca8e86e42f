use formsmith::error::Error;
use formsmith::manifest::{flatten, load_manifest, locate_manifest, parse_manifest, ManifestNode};
use std::fs;
use tempfile::TempDir;

const SERVER_MANIFEST: &str = r#"
meta:
  title: Server Kit
  version: 1.2
target:
  base: templates
config:
  ident: srv
  subs:
    - ident: port
      description: Listen port
      default: 8080
"#;

fn config_of(yaml: &str) -> ManifestNode {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn test_single_entry_scenario() {
    let manifest = parse_manifest(SERVER_MANIFEST).unwrap();
    let entries = flatten(&manifest.config).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].identifier, "srv|port");
    assert_eq!(entries[0].description, "Listen port");
    assert_eq!(entries[0].default, "8080");
    assert_eq!(manifest.meta.title, "Server Kit");
    assert_eq!(manifest.meta.version.to_string(), "1.2");
}

#[test]
fn test_entry_count_matches_described_nodes() {
    let root = config_of(
        r#"
subs:
  - ident: a
    description: A
    default: "1"
    subs:
      - ident: b
        description: B
        default: "2"
      - subs:
          - ident: c
            subs:
              - description: C
                default: "3"
  - ident: grouping
  - description: D
    default: "4"
"#,
    );
    let entries = flatten(&root).unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e.identifier.as_str()).collect();

    assert_eq!(entries.len(), 4);
    // pre-order; transparent wrappers keep the prefix, described nodes without ident inherit it
    assert_eq!(ids, vec!["a", "a|b", "a|c", ""]);
}

#[test]
fn test_described_node_without_ident_inherits_prefix() {
    let root = config_of(
        r#"
ident: db
subs:
  - ident: host
    subs:
      - description: Database host
        default: localhost
"#,
    );
    let entries = flatten(&root).unwrap();
    assert_eq!(entries[0].identifier, "db|host");
}

#[test]
fn test_root_node_can_declare_entry() {
    let root = config_of("ident: name\ndescription: Product name\ndefault: demo\n");
    let entries = flatten(&root).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].identifier, "name");
}

#[test]
fn test_missing_default_is_fatal() {
    let root = config_of(
        r#"
subs:
  - ident: ok
    description: Fine
    default: x
  - ident: bad
    description: Broken entry
"#,
    );
    match flatten(&root) {
        Err(Error::ManifestError { description }) => assert_eq!(description, "Broken entry"),
        other => panic!("Expected ManifestError, got {other:?}"),
    }
}

#[test]
fn test_numbers_keep_their_text() {
    let yaml = r#"
meta: {title: Ratio Kit, version: 2.0}
target: {base: templates}
config:
  subs:
    - {ident: ratio, description: Ratio, default: 1.0}
    - {ident: big, description: Big number, default: 18446744073709551615}
    - {ident: 7, description: Numeric ident, default: -3}
"#;
    let manifest = parse_manifest(yaml).unwrap();
    assert_eq!(manifest.meta.version.to_string(), "2.0");

    let entries = flatten(&manifest.config).unwrap();
    assert_eq!(entries[0].default, "1.0");
    assert_eq!(entries[1].default, "18446744073709551615");
    assert_eq!(entries[2].identifier, "7");
    assert_eq!(entries[2].default, "-3");

    let json = r#"{
        "meta": {"title": "T", "version": 2.0},
        "target": {"base": "tpl"},
        "config": {"ident": "ratio", "description": "Ratio", "default": 1.0}
    }"#;
    let manifest = parse_manifest(json).unwrap();
    assert_eq!(manifest.meta.version.to_string(), "2.0");
    assert_eq!(flatten(&manifest.config).unwrap()[0].default, "1.0");
}

#[test]
fn test_json_manifest() {
    let content = r#"{
        "meta": {"title": "T", "version": "2"},
        "target": {"base": "tpl", "ignore": ["*.bak"], "export_folder": "Out"},
        "config": {"ident": "x", "description": "X", "default": true}
    }"#;
    let manifest = parse_manifest(content).unwrap();
    assert_eq!(manifest.target.ignore, vec!["*.bak"]);
    assert_eq!(manifest.target.export_folder.as_deref(), Some(std::path::Path::new("Out")));

    let entries = flatten(&manifest.config).unwrap();
    assert_eq!(entries[0].default, "true");
}

#[test]
fn test_malformed_manifest() {
    let result = parse_manifest("meta: [unterminated");
    assert!(matches!(result, Err(Error::ManifestFormatError(_))));

    let result = parse_manifest("meta:\n  title: T\n  version: 1\n");
    assert!(matches!(result, Err(Error::ManifestFormatError(_))));
}

#[test]
fn test_load_manifest_resolves_base_against_manifest_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("manifest.yaml"), SERVER_MANIFEST).unwrap();

    // A directory is searched for a manifest file
    let manifest = load_manifest(temp_dir.path()).unwrap();
    assert_eq!(manifest.target.base, temp_dir.path().join("templates"));
}

#[test]
fn test_locate_manifest() {
    let temp_dir = TempDir::new().unwrap();
    assert!(matches!(
        locate_manifest(temp_dir.path()),
        Err(Error::ManifestNotFound { .. })
    ));
    assert!(matches!(
        locate_manifest(temp_dir.path().join("missing.yaml")),
        Err(Error::ManifestNotFound { .. })
    ));

    let json = temp_dir.path().join("manifest.json");
    fs::write(&json, "{}").unwrap();
    assert_eq!(locate_manifest(temp_dir.path()).unwrap(), json);

    let yaml = temp_dir.path().join("manifest.yaml");
    fs::write(&yaml, "").unwrap();
    assert_eq!(locate_manifest(temp_dir.path()).unwrap(), yaml);
    assert_eq!(locate_manifest(&json).unwrap(), json);
}
