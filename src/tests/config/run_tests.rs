//! Tests for RunConfig loading.

use crate::config::{ConfigFormat, RunConfig};
use crate::error::ConfigurationError;
use std::path::Path;

#[test]
fn config_format_from_extension() {
    assert_eq!(
        ConfigFormat::from_path(Path::new("run.json")),
        Some(ConfigFormat::Json)
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("run.YML")),
        Some(ConfigFormat::Yaml)
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("run.toml")),
        Some(ConfigFormat::Toml)
    );
    assert_eq!(ConfigFormat::from_path(Path::new("run.ini")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("run")), None);
}

#[test]
fn builder_collects_formatters_in_order() {
    let cfg = RunConfig::new()
        .add_formatter("pretty")
        .add_formatter("json:out.json")
        .with_base_dir("target/reports");

    assert_eq!(cfg.formatters, vec!["pretty", "json:out.json"]);
    assert_eq!(cfg.base_dir.as_deref(), Some(Path::new("target/reports")));
}

#[cfg(feature = "json")]
#[test]
fn parse_json_config() {
    let cfg = RunConfig::from_str_as(
        r#"{ "formatters": ["progress", "rerun:rerun.txt"] }"#,
        ConfigFormat::Json,
    )
    .unwrap();
    assert_eq!(cfg.formatters, vec!["progress", "rerun:rerun.txt"]);
    assert_eq!(cfg.base_dir, None);
}

#[cfg(feature = "json")]
#[test]
fn malformed_json_config_is_invalid_config() {
    let err = RunConfig::from_str_as("{ formatters: ", ConfigFormat::Json).unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidConfig(_)));
    assert!(
        err.to_string()
            .starts_with("invalid formatter configuration: ")
    );
}

#[cfg(feature = "yaml")]
#[test]
fn parse_yaml_config() {
    let yaml = r#"
formatters:
  - pretty
  - junit:target/junit.xml
base_dir: build
"#;
    let cfg = RunConfig::from_str_as(yaml, ConfigFormat::Yaml).unwrap();
    assert_eq!(cfg.formatters.len(), 2);
    assert_eq!(cfg.base_dir.as_deref(), Some(Path::new("build")));
}

#[cfg(feature = "toml")]
#[test]
fn parse_toml_config() {
    let cfg = RunConfig::from_str_as(
        "formatters = [\"usage\"]\nbase_dir = \"out\"\n",
        ConfigFormat::Toml,
    )
    .unwrap();
    assert_eq!(cfg.formatters, vec!["usage"]);
}

#[test]
fn from_path_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.ini");
    std::fs::write(&path, "formatters = pretty").unwrap();

    let err = RunConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidConfig(_)));
}

#[test]
fn from_path_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RunConfig::from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidConfig(_)));
}

#[cfg(feature = "json")]
#[test]
fn from_path_reads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    std::fs::write(&path, r#"{"formatters":["null"]}"#).unwrap();

    let cfg = RunConfig::from_path(&path).unwrap();
    assert_eq!(cfg.formatters, vec!["null"]);
}
