//! Integration tests for file-backed configurations.
//!
//! Every test works on a real file inside a temporary directory, exercising
//! the loader, the lookup protocol, validation, the serializer and the file
//! store together through the public API.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use cfgkit_core::{ConfigError, Configuration, FileStore, FormatError, WriteStrategy};
use proptest::prelude::*;
use tempfile::TempDir;

const EXAMPLE: &str = include_str!("fixtures/example.cfg");

/// Copies `contents` into a fresh temporary directory and returns its path.
///
/// The `TempDir` must be kept alive for as long as the file is used.
fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.cfg");
    fs::write(&path, contents).expect("write fixture");
    (dir, path)
}

fn example() -> (TempDir, PathBuf, Configuration) {
    let (dir, path) = temp_config(EXAMPLE);
    let config = Configuration::open(&path).expect("fixture must load");
    (dir, path, config)
}

// ── Reading ───────────────────────────────────────────────────────────────────

#[test]
fn test_values_are_read_by_section_and_key() {
    let (_dir, _path, config) = example();

    assert_eq!(config.get(("header", "project")).unwrap(), "Programming Test");
    assert_eq!(
        config.get(HashMap::from([("meta data", "correction text")])).unwrap(),
        "I meant 'moderately,' not 'tediously,' above."
    );
    assert_eq!(config.get(("trailer", "budget")).unwrap(), "all out of budget.");
}

#[test]
fn test_padded_keys_and_values_are_trimmed() {
    let (_dir, _path, config) = example();

    assert_eq!(config.get(("header", "budget")).unwrap(), "4.5");
    assert_eq!(config.get(("header", "accessed")).unwrap(), "205");
}

#[test]
fn test_wrapped_values_join_with_indentation_preserved() {
    let (_dir, _path, config) = example();

    assert_eq!(
        config.get(("meta data", "description")).unwrap(),
        "This is a tediously long description of the Lonely Planet  programming test that \
         you are taking. Tedious isn't the right word, but  it's the first word that comes \
         to mind."
    );
}

#[test]
fn test_improper_lookups_are_shape_errors() {
    let (_dir, _path, config) = example();

    assert!(matches!(config.get("hi"), Err(ConfigError::LookupShape)));
    assert!(matches!(
        config.get(None::<HashMap<&str, &str>>),
        Err(ConfigError::LookupShape)
    ));
    assert!(matches!(
        config.get(BTreeMap::from([("foo", None::<&str>)])),
        Err(ConfigError::LookupShape)
    ));
}

#[test]
fn test_absent_entries_are_not_found() {
    let (_dir, _path, config) = example();

    let err = config.get(("header", "missing")).unwrap_err();
    assert!(err.is_not_found());
    let err = config.get(("missing", "project")).unwrap_err();
    assert!(err.is_not_found());
}

// ── Loading failures ──────────────────────────────────────────────────────────

#[test]
fn test_file_without_leading_section_fails_to_load() {
    let (_dir, path) = temp_config("project: Programming Test\n[header]\n");

    let err = Configuration::open(&path).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::Format(FormatError::MissingSection { line: 1, .. })
    ));
}

#[test]
fn test_invalid_line_fails_to_load() {
    let (_dir, path) = temp_config("[header]\nproject: x\nthis line has no colon\n");

    let err = Configuration::open(&path).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::Format(FormatError::InvalidLine { line: 3, .. })
    ));
    assert!(err.to_string().contains("this line has no colon"));
}

#[test]
fn test_missing_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();

    let err = Configuration::open(dir.path().join("absent.cfg")).unwrap_err();

    assert!(matches!(err, ConfigError::Store(ref e) if e.is_not_found()));
}

// ── Writing ───────────────────────────────────────────────────────────────────

#[test]
fn test_stored_values_are_readable_immediately() {
    let (_dir, _path, mut config) = example();

    config.set(("planet", "name"), "lonely").unwrap();

    assert_eq!(config.get(("planet", "name")).unwrap(), "lonely");
}

#[test]
fn test_every_write_updates_the_file() {
    // Arrange
    let (_dir, path, mut config) = example();

    // Act
    config.set(("planet", "popularity"), "max!").unwrap();

    // Assert
    let reloaded = Configuration::open(&path).unwrap();
    assert_eq!(reloaded.get(("planet", "popularity")).unwrap(), "max!");
}

#[test]
#[allow(clippy::approx_constant)]
fn test_numeric_values_are_stored_as_strings() {
    let (_dir, path, mut config) = example();

    config.set(("constants", "pi"), 3.14159).unwrap();

    assert_eq!(config.get(("constants", "pi")).unwrap(), "3.14159");
    let reloaded = Configuration::open(&path).unwrap();
    assert_eq!(reloaded.get(("constants", "pi")).unwrap(), "3.14159");
}

#[test]
fn test_written_file_is_canonical_crlf() {
    // Arrange
    let (_dir, path, mut config) = example();

    // Act
    config.set(("trailer", "budget"), "replenished").unwrap();

    // Assert
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[header]\r\nproject: Programming Test\r\nbudget: 4.5\r\n"));
    assert!(text.ends_with("[trailer]\r\nbudget: replenished\r\n\r\n"));
    assert!(!text.replace("\r\n", "").contains('\n'));
}

#[test]
fn test_improper_writes_are_shape_errors() {
    let (_dir, _path, mut config) = example();

    assert!(matches!(config.set("hi", 1), Err(ConfigError::LookupShape)));
    assert!(matches!(
        config.set(None::<(&str, &str)>, "ok"),
        Err(ConfigError::LookupShape)
    ));
    assert!(matches!(
        config.set(HashMap::from([("foo", None::<&str>)]), 1.2),
        Err(ConfigError::LookupShape)
    ));
}

#[test]
fn test_illegal_names_leave_file_and_document_unchanged() {
    // Arrange
    let (_dir, path, mut config) = example();
    let text_before = fs::read_to_string(&path).unwrap();
    let doc_before = config.document().clone();

    // Act
    let bad_section = config.set(("bad]section", "key"), "v");
    let bad_key = config.set(("header", "bad:key"), "v");

    // Assert
    assert!(matches!(
        bad_section,
        Err(ConfigError::Format(FormatError::IllegalSectionName(_)))
    ));
    assert!(matches!(
        bad_key,
        Err(ConfigError::Format(FormatError::IllegalKeyName(_)))
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), text_before);
    assert_eq!(config.document(), &doc_before);
}

#[test]
fn test_entry_that_would_reload_as_section_is_refused() {
    // Arrange
    let (_dir, path, mut config) = example();
    let text_before = fs::read_to_string(&path).unwrap();

    // Act
    let result = config.set(("header", "[x"), "y]");

    // Assert
    assert!(matches!(
        result,
        Err(ConfigError::Format(FormatError::UnrepresentableName(ref key))) if key == "[x"
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), text_before);
    let reloaded = Configuration::open(&path).unwrap();
    assert_eq!(reloaded.document(), config.document());
    assert!(!reloaded.document().contains_section("x: y"));
}

#[test]
fn test_bracketed_keys_that_stay_entries_round_trip() {
    let (_dir, path, mut config) = example();

    config.set(("header", "[x]"), "y]").unwrap();
    config.set(("header", "[z"), "w] x").unwrap();

    let reloaded = Configuration::open(&path).unwrap();
    assert_eq!(reloaded.get(("header", "[x]")).unwrap(), "y]");
    assert_eq!(reloaded.get(("header", "[z")).unwrap(), "w] x");
}

#[test]
fn test_open_or_create_creates_file_on_first_write() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.cfg");
    let mut config = Configuration::open_or_create(&path).unwrap();
    assert!(!path.exists());

    // Act
    config.set(("planet", "name"), "lonely").unwrap();

    // Assert
    assert_eq!(fs::read_to_string(&path).unwrap(), "[planet]\r\nname: lonely\r\n\r\n");
}

#[test]
fn test_atomic_store_round_trips() {
    let (_dir, path) = temp_config(EXAMPLE);
    let store = FileStore::new(&path).with_strategy(WriteStrategy::Atomic);
    let mut config = Configuration::with_store(store).unwrap();

    config.set(("planet", "name"), "lonely").unwrap();

    let reloaded = Configuration::open(&path).unwrap();
    assert_eq!(reloaded.get(("planet", "name")).unwrap(), "lonely");
    assert_eq!(reloaded.document(), config.document());
}

#[test]
fn test_reload_picks_up_external_changes() {
    let (_dir, path, mut config) = example();
    fs::write(&path, "[header]\r\nproject: Rewritten\r\n").unwrap();

    config.reload().unwrap();

    assert_eq!(config.get(("header", "project")).unwrap(), "Rewritten");
    assert!(config.get(("trailer", "budget")).unwrap_err().is_not_found());
}

#[test]
fn test_path_reports_backing_file() {
    let (_dir, path, config) = example();
    assert_eq!(config.path(), path.as_path());
}

// ── Round-trip property ───────────────────────────────────────────────────────

fn section() -> impl Strategy<Value = String> {
    // Printable, no brackets or colons, no surrounding whitespace.
    "[a-zA-Z0-9_.-][a-zA-Z0-9 _.-]{0,12}[a-zA-Z0-9_.-]|[a-zA-Z0-9]"
}

fn key() -> impl Strategy<Value = String> {
    // Like a section name, but brackets are allowed.
    r"[a-zA-Z0-9_.\[\]-][a-zA-Z0-9 _.\[\]-]{0,12}[a-zA-Z0-9_.\[\]-]|[a-zA-Z0-9\[\]]"
}

fn value() -> impl Strategy<Value = String> {
    "[ -~]{0,32}".prop_map(|s| s.trim().to_string())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_written_values_survive_reload(
        writes in prop::collection::vec((section(), key(), value()), 1..12)
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prop.cfg");
        let mut config = Configuration::open_or_create(&path).unwrap();

        let mut expected = HashMap::new();
        for (section, key, value) in &writes {
            match config.set((section, key), value) {
                Ok(()) => {
                    expected.insert((section.clone(), key.clone()), value.clone());
                }
                Err(ConfigError::Format(FormatError::UnrepresentableName(_))) => {
                    // Only `[key: value]` shaped lines are refused.
                    prop_assert!(key.starts_with('[') && value.ends_with(']'));
                }
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            }
        }

        let reloaded = Configuration::open(&path).unwrap();
        for ((section, key), value) in &expected {
            prop_assert_eq!(reloaded.get((section, key)).unwrap(), value.as_str());
        }
        prop_assert_eq!(reloaded.document(), config.document());
    }
}
