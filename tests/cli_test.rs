use clap::Parser;
use formsmith::cli::{parse_override, Args};
use formsmith::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("formsmith")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["./manifest.yaml"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.manifest, PathBuf::from("./manifest.yaml"));
    assert!(parsed.output.is_none());
    assert!(parsed.load.is_none());
    assert!(parsed.save.is_none());
    assert!(parsed.overrides.is_empty());
    assert!(!parsed.interactive);
    assert!(!parsed.preview);
    assert!(!parsed.force);
    assert!(!parsed.yes);
    assert!(!parsed.verbose);
}

#[test]
fn test_manifest_defaults_to_current_dir() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();
    assert_eq!(parsed.manifest, PathBuf::from("."));
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--output",
        "./out",
        "--load",
        "saved.txt",
        "--save",
        "next.txt",
        "--set",
        "srv|port=9090",
        "--set",
        "srv|host=",
        "--interactive",
        "--list",
        "--preview",
        "--force",
        "--yes",
        "--verbose",
        "./manifest.yaml",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.output, Some(PathBuf::from("./out")));
    assert_eq!(parsed.load, Some(PathBuf::from("saved.txt")));
    assert_eq!(parsed.save, Some(PathBuf::from("next.txt")));
    assert_eq!(parsed.overrides, vec!["srv|port=9090", "srv|host="]);
    assert!(parsed.interactive);
    assert!(parsed.list);
    assert!(parsed.preview);
    assert!(parsed.force);
    assert!(parsed.yes);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-o", "out", "-l", "blob", "-i", "-p", "-f", "-y", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.output, Some(PathBuf::from("out")));
    assert_eq!(parsed.load, Some(PathBuf::from("blob")));
    assert!(parsed.interactive);
    assert!(parsed.preview);
    assert!(parsed.force);
    assert!(parsed.yes);
    assert!(parsed.verbose);
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./manifest.yaml", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_parse_override() {
    assert_eq!(
        parse_override("srv|port=9090").unwrap(),
        ("srv|port".to_string(), "9090".to_string())
    );
    assert_eq!(parse_override("a=b=c").unwrap(), ("a".to_string(), "b=c".to_string()));
    assert_eq!(parse_override("a=").unwrap(), ("a".to_string(), String::new()));
    assert!(matches!(parse_override("novalue"), Err(Error::InvalidOverride(_))));
    assert!(matches!(parse_override("=value"), Err(Error::InvalidOverride(_))));
}
