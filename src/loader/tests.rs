//! Tests for fixture loader module

use super::*;
use crate::error::Error;
use crate::types::{LoadInitialParams, LoadParams, PositionalInitialParams, SourceKind};
use crate::walk::{walk_keyed, Direction, WalkConfig};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;

// ============================================================================
// Basic Loading Tests
// ============================================================================

#[test]
fn test_load_items_fixture() {
    let yaml = r#"
name: numbers
source:
  items: [1, 2, 3, 4, 5]
"#;

    let def = load_fixture_from_str(yaml).unwrap();
    assert_eq!(def.name, "numbers");
    assert_eq!(def.version, "0.1.0");
    assert!(def.description.is_none());
    assert_eq!(def.source.type_name(), "items");

    let source = def.build();
    assert_eq!(source.kind(), SourceKind::PreloadedItems);

    let page = source
        .positional()
        .unwrap()
        .create()
        .load_initial(&PositionalInitialParams::new(-3, 4));
    assert_eq!(page.items, vec![json!(1), json!(2), json!(3), json!(4)]);
    assert_eq!(page.total_count, 5);
}

#[test]
fn test_load_fixture_with_version_and_description() {
    let yaml = r#"
name: catalog
version: "2.1.0"
description: Product catalog
source:
  items: []
"#;

    let def = load_fixture_from_str(yaml).unwrap();
    assert_eq!(def.version, "2.1.0");
    assert_eq!(def.description.as_deref(), Some("Product catalog"));
    assert_eq!(def.build().kind(), SourceKind::Empty);
}

#[test]
fn test_load_page_array_fixture() {
    let yaml = r#"
name: chapters
source:
  page_array:
    key_offset: 1
    initial_key: 2
    pages:
      - [a, b]
      - null
      - [c]
"#;

    let def = load_fixture_from_str(yaml).unwrap();
    let FixtureSource::Indexed(factory) = def.build() else {
        panic!("Expected Indexed");
    };
    assert_eq!(factory.kind(), SourceKind::PreloadedPages);

    let source = factory.create();
    let page = source.load_initial(&LoadInitialParams::new(10));
    assert!(page.items.is_empty());
    assert_eq!(page.prev_key, Some(1));
    assert_eq!(page.next_key, Some(3));

    let last = source.load_after(&LoadParams::new(3, 10));
    assert_eq!(last.items, vec![json!("c")]);
    assert_eq!(last.adjacent_key, None);
}

#[test]
fn test_load_page_array_with_fragments() {
    let yaml = r#"
name: sections
source:
  page_array:
    pages:
      - [a1, a2]
      - null
      - [c1]
    headers:
      0: [A]
      1: [B]
    footers:
      2: [end]
"#;

    let def = load_fixture_from_str(yaml).unwrap();
    let FixtureSource::Indexed(factory) = def.build() else {
        panic!("Expected Indexed");
    };
    assert_eq!(factory.kind(), SourceKind::Separated);

    let walk = walk_keyed(&*factory.create(), &WalkConfig::new(Direction::Forward));
    assert_eq!(
        walk.into_items(),
        vec![json!("A"), json!("a1"), json!("a2"), json!("B"), json!("c1"), json!("end")]
    );
}

#[test]
fn test_load_keyed_fixture() {
    let yaml = r#"
name: threads
source:
  keyed:
    initial: middle
    pages:
      first: [1]
      middle: [2, 3]
      last: [4]
    links:
      first: { next: middle }
      middle: { prev: first, next: last }
      last: { prev: middle }
"#;

    let def = load_fixture_from_str(yaml).unwrap();
    let FixtureSource::Keyed(factory) = def.build() else {
        panic!("Expected Keyed");
    };
    assert_eq!(factory.kind(), SourceKind::Generator);

    let walk = walk_keyed(&*factory.create(), &WalkConfig::new(Direction::Both));
    assert_eq!(walk.into_items(), vec![json!(1), json!(2), json!(3), json!(4)]);
}

#[test]
fn test_load_keyed_fixture_with_headers() {
    let yaml = r#"
name: grouped
source:
  keyed:
    initial: a
    pages:
      a: [x]
    headers:
      a: [{ title: A }]
      b: [{ title: B }]
    links:
      a: { next: b }
"#;

    let def = load_fixture_from_str(yaml).unwrap();
    let source = def.build();
    assert_eq!(source.kind(), SourceKind::Separated);

    let FixtureSource::Keyed(factory) = source else {
        panic!("Expected Keyed");
    };
    let page = factory
        .create()
        .load_after(&LoadParams::new("b".to_string(), 10));
    assert_eq!(page.items, vec![json!({"title": "B"})]);
    assert_eq!(page.adjacent_key, None);
}

#[test]
fn test_load_json_fixture() {
    let json_text = r#"{
        "name": "json-pages",
        "source": {
            "page_array": {
                "pages": [["a"], ["b"]],
                "headers": {"1": ["H"]}
            }
        }
    }"#;

    let def = load_fixture_from_json(json_text).unwrap();
    let FixtureSource::Indexed(factory) = def.build() else {
        panic!("Expected Indexed");
    };
    let page = factory.create().load_after(&LoadParams::new(1, 10));
    assert_eq!(page.items, vec![json!("H"), json!("b")]);
}

#[test]
fn test_source_shape_matches_between_yaml_and_json() {
    let yaml = r#"
name: shared
source:
  page_array:
    key_offset: 3
    pages: [[a], [b]]
"#;
    let json_text = r#"{
        "name": "shared",
        "source": {"page_array": {"key_offset": 3, "pages": [["a"], ["b"]]}}
    }"#;

    let from_yaml = load_fixture_from_str(yaml).unwrap();
    let from_json = load_fixture_from_json(json_text).unwrap();
    assert_eq!(from_yaml, from_json);
    assert_eq!(from_yaml.source.type_name(), "page_array");

    let written = serde_yaml::to_string(&from_yaml).unwrap();
    assert!(written.contains("page_array:"));
    assert_eq!(load_fixture_from_str(&written).unwrap(), from_yaml);
}

#[test]
fn test_range_on_keyed_fixture_is_rejected() {
    let yaml = r#"
name: keyed
source:
  keyed:
    initial: a
    pages:
      a: [1]
"#;

    let def = load_fixture_from_str(yaml).unwrap();
    let err = def.build().positional().unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_empty_name_rejected() {
    let yaml = r#"
name: "  "
source:
  items: [1]
"#;

    let err = load_fixture_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("name cannot be empty"));
}

#[test]
fn test_missing_source_rejected() {
    let err = load_fixture_from_str("name: nothing\n").unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}

#[test]
fn test_unknown_source_type_rejected() {
    let yaml = r#"
name: bogus
source:
  cursor: [1]
"#;

    let err = load_fixture_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}

#[test]
fn test_initial_key_out_of_range_rejected() {
    let yaml = r#"
name: chapters
source:
  page_array:
    key_offset: 10
    initial_key: 3
    pages:
      - [a]
      - [b]
"#;

    let err = load_fixture_from_str(yaml).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid fixture value for 'initial_key': 3 is outside the page keys 10..12"
    );
}

#[test]
fn test_key_offset_overflow_rejected() {
    let yaml = r#"
name: huge
source:
  page_array:
    key_offset: 9223372036854775807
    pages: [[1], [2]]
    headers: {}
"#;

    let err = load_fixture_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "key_offset"));
}

#[test]
fn test_key_offset_at_last_addressable_key_accepted() {
    let yaml = r#"
name: edge
source:
  page_array:
    key_offset: 9223372036854775806
    pages: [[1], [2]]
    footers:
      9223372036854775807: [end]
"#;

    let def = load_fixture_from_str(yaml).unwrap();
    let FixtureSource::Indexed(factory) = def.build() else {
        panic!("Expected Indexed");
    };
    let walk = walk_keyed(&*factory.create(), &WalkConfig::new(Direction::Forward));
    assert_eq!(walk.into_items(), vec![json!(1), json!(2), json!("end")]);
}

#[test]
fn test_build_unvalidated_overflowing_array_does_not_panic() {
    let def = FixtureDefinition {
        name: "huge".to_string(),
        version: "0.1.0".to_string(),
        description: None,
        source: SourceDefinition::PageArray(PageArrayDefinition {
            pages: vec![Some(vec![json!(1)]), Some(vec![json!(2)])],
            key_offset: i64::MAX,
            headers: Some(std::collections::HashMap::new()),
            ..Default::default()
        }),
    };

    let FixtureSource::Indexed(factory) = def.build() else {
        panic!("Expected Indexed");
    };
    let source = factory.create();
    let page = source.load_initial(&LoadInitialParams::new(10));
    assert_eq!(page.items, vec![json!(1)]);
    assert_eq!(page.next_key, None);
}

#[test]
fn test_unknown_initial_key_rejected() {
    let yaml = r#"
name: threads
source:
  keyed:
    initial: nowhere
    pages:
      a: [1]
"#;

    let err = load_fixture_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "initial"));
}

#[test]
fn test_empty_initial_key_rejected() {
    let yaml = r#"
name: threads
source:
  keyed:
    initial: ""
    pages:
      a: [1]
"#;

    let err = load_fixture_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { .. }));
}

#[test]
fn test_dangling_link_rejected() {
    let yaml = r#"
name: threads
source:
  keyed:
    initial: a
    pages:
      a: [1]
    links:
      a: { next: b }
"#;

    let err = load_fixture_from_str(yaml).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid fixture value for 'links': 'a' links to unknown key 'b'"
    );
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_fixture_from_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numbers.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "name: numbers\nsource:\n  items: [1, 2]").unwrap();

    let def = load_fixture(&path).unwrap();
    assert_eq!(def.name, "numbers");
}

#[test]
fn test_load_fixture_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numbers.JSON");
    std::fs::write(&path, r#"{"name": "numbers", "source": {"items": [1]}}"#).unwrap();

    let def = load_fixture(&path).unwrap();
    assert_eq!(def.source, SourceDefinition::Items(vec![json!(1)]));
}

#[test]
fn test_load_fixture_unreadable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_fixture(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!err.is_fixture_error());
}

#[test]
fn test_load_fixture_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_fixture(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
    assert!(!err.is_fixture_error());
}
