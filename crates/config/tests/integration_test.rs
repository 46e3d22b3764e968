//! Integration tests for configuration access through the public API.
//!
//! These tests drive the full chain (env variable -> resolved file -> section
//! view -> fields) the way an application would, using temporary directories
//! for every document on disk.

use jsoncfg::{
    CasePolicy, ConfigError, ConfigSource, SectionView, SourceDescriptor, VaultContainer,
    ViewOptions,
};
use secrecy::SecretString;
use serde_json::json;
use serial_test::serial;
use std::collections::BTreeMap;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

const TEST_ENV_VAR: &str = "_JSONCFG_IT_CONFIGFILE";

fn descriptor() -> SourceDescriptor {
    SourceDescriptor::config().with_env_var(TEST_ENV_VAR)
}

fn write_document(dir: &TempDir, name: &str, body: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

/// Test that an env override naming a full path is used verbatim
#[test]
#[serial]
fn test_open_with_full_path_override() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_document(&temp_dir, "app.json", r#"{"host": "a", "port": 80}"#);

    temp_env::with_vars([(TEST_ENV_VAR, Some(path.as_str()))], || {
        let view = SectionView::open(&descriptor(), ViewOptions::new()).unwrap();
        assert_eq!(view.lookup("host"), Some(&json!("a")));
        assert_eq!(view.source().path().unwrap().to_string_lossy(), path);
    });
}

/// Test that the extension is appended when the raw token is not a file
#[test]
#[serial]
fn test_open_appends_extension() {
    let temp_dir = TempDir::new().unwrap();
    write_document(&temp_dir, "app.json", r#"{"host": "b"}"#);
    let token = temp_dir.path().join("app").to_string_lossy().into_owned();

    temp_env::with_vars([(TEST_ENV_VAR, Some(token.as_str()))], || {
        let view = SectionView::open(&descriptor(), ViewOptions::new()).unwrap();
        assert_eq!(view.lookup("host"), Some(&json!("b")));
    });
}

/// Test that nothing resolvable is reported as SourceNotFound
#[test]
#[serial]
fn test_open_without_any_candidate() {
    let temp_dir = TempDir::new().unwrap();
    let token = temp_dir.path().join("absent").to_string_lossy().into_owned();
    let descriptor = descriptor().with_default_base_name("_jsoncfg_no_such_default");

    temp_env::with_vars([(TEST_ENV_VAR, Some(token.as_str()))], || {
        let result = SectionView::open(&descriptor, ViewOptions::new());
        assert!(matches!(result, Err(ConfigError::SourceNotFound { .. })));
    });
}

/// Test the uppercase policy end to end
#[test]
fn test_uppercase_policy() {
    let view =
        SectionView::from_text("{\n\"host\": \"a\"\n}", ViewOptions::new().uppercase()).unwrap();

    assert_eq!(view.case_policy(), CasePolicy::Upper);
    assert!(view.enumerate(None).contains_key("HOST"));
    assert_eq!(view.lookup("host"), Some(&json!("a")));
    assert_eq!(view.lookup("HOST"), Some(&json!("a")));
    assert_eq!(view.lookup("Host"), Some(&json!("a")));
}

/// Test that loading "a.b" directly equals loading "a" and extracting "b"
#[test]
fn test_section_narrowing_is_compositional() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_document(
        &temp_dir,
        "configuration.json",
        r#"{"a": {"b": {"x": 1, "y": [1, 2]}, "z": 0}}"#,
    );
    let source = Arc::new(ConfigSource::from_text(path));

    let direct = SectionView::from_source(
        Arc::clone(&source),
        "json",
        ViewOptions::new().with_section("a.b"),
    )
    .unwrap();
    let stepwise = SectionView::from_source(
        Arc::clone(&source),
        "json",
        ViewOptions::new().with_section("a"),
    )
    .unwrap()
    .extract(Some("b"), None)
    .unwrap();

    assert_eq!(direct.enumerate(None), stepwise.enumerate(None));
    assert_eq!(direct.section(), stepwise.section());
}

/// Test that reload replaces rather than merges fields
#[test]
fn test_reload_replaces_not_merges() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_document(&temp_dir, "configuration.json", r#"{"x": 1}"#);
    let mut view = SectionView::from_text(path.clone(), ViewOptions::new()).unwrap();

    fs::write(&path, r#"{"y": 2}"#).unwrap();
    view.reload().unwrap();

    assert_eq!(
        view.enumerate(None),
        BTreeMap::from([("y".to_string(), json!(2))])
    );
}

/// Test that a missing section names the full dotted path
#[test]
fn test_missing_section_error() {
    let result = SectionView::from_text(
        "{\n\"a\": 1\n}",
        ViewOptions::new().with_section("missing.path"),
    );
    match result {
        Err(ConfigError::SectionNotFound(section)) => assert_eq!(section, "missing.path"),
        other => panic!("unexpected result: {other:?}"),
    }
}

/// Test that DB matches both DB_HOST and DBX
#[test]
fn test_prefix_filter_is_substring_at_start() {
    let view = SectionView::from_text(
        "{\n\"DB_HOST\": \"h\", \"DBX\": 1, \"CACHE\": true\n}",
        ViewOptions::new(),
    )
    .unwrap();

    let selected = view.enumerate(Some("DB"));
    assert!(selected.contains_key("DB_HOST"));
    assert!(selected.contains_key("DBX"));
    assert!(!selected.contains_key("CACHE"));
}

/// Test that a document key shadowing a reserved field is rejected
#[test]
fn test_reserved_field_collision() {
    let result = SectionView::from_text("{\n\"extension\": \"yaml\"\n}", ViewOptions::new());
    assert!(matches!(result, Err(ConfigError::ReservedField { .. })));
}

/// Test that vault provisioning is idempotent
#[test]
fn test_vault_idempotent_creation() {
    let temp_dir = TempDir::new().unwrap();
    let vault = VaultContainer::builder(SourceDescriptor::vault())
        .with_base_dir(temp_dir.path())
        .with_token("keys/app.vault")
        .with_key(SecretString::new("k".to_string().into()))
        .build()
        .unwrap();

    assert!(vault.ensure_exists().unwrap());
    fs::write(vault.path(), "kept").unwrap();
    assert!(!vault.ensure_exists().unwrap());
    assert_eq!(fs::read_to_string(vault.path()).unwrap(), "kept");
}

/// Test that a vault without any key cannot be constructed
#[test]
fn test_vault_requires_key() {
    let result = VaultContainer::at("unused.vault", None, None);
    assert!(matches!(result, Err(ConfigError::InvalidKey)));
}
