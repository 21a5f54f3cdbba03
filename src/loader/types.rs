//! Loader types
//!
//! Declarative fixture definition types for YAML/JSON parsing.

use crate::error::{Error, Result};
use crate::mock::MockSource;
use crate::source::{KeyedFactory, PositionalFactory};
use crate::types::{JsonValue, SourceKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Fixture Definition
// ============================================================================

/// Top-level fixture definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FixtureDefinition {
    /// Fixture name
    pub name: String,
    /// Fixture version
    #[serde(default = "default_version")]
    pub version: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Data the source serves, written as a single-key map such as
    /// `items: [..]`
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub source: SourceDefinition,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

// ============================================================================
// Source Definition
// ============================================================================

/// Backing data of a fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceDefinition {
    /// Position-paged list of items
    Items(Vec<JsonValue>),
    /// Array of pages with integer keys
    PageArray(PageArrayDefinition),
    /// Pages addressed by string keys with explicit links
    Keyed(KeyedDefinition),
}

impl SourceDefinition {
    /// Get the snake_case name of this definition
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Items(_) => "items",
            Self::PageArray(_) => "page_array",
            Self::Keyed(_) => "keyed",
        }
    }
}

/// Array of pages; the page at index `i` has key `i + key_offset`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PageArrayDefinition {
    /// Pages in key order, `null` for a missing page
    #[serde(default)]
    pub pages: Vec<Option<Vec<JsonValue>>>,
    /// Key of the first page
    #[serde(default)]
    pub key_offset: i64,
    /// Key of the page to start from (defaults to the first page)
    #[serde(default)]
    pub initial_key: Option<i64>,
    /// Header fragments by page key
    #[serde(default)]
    pub headers: Option<HashMap<i64, Vec<JsonValue>>>,
    /// Footer fragments by page key
    #[serde(default)]
    pub footers: Option<HashMap<i64, Vec<JsonValue>>>,
}

impl PageArrayDefinition {
    /// Key of the page the first load starts from
    pub fn start_key(&self) -> i64 {
        self.initial_key.unwrap_or(self.key_offset)
    }

    /// Check if a key addresses a page inside the array
    pub fn contains_key(&self, key: i64) -> bool {
        key.checked_sub(self.key_offset)
            .and_then(|index| usize::try_from(index).ok())
            .is_some_and(|index| index < self.pages.len())
    }

    /// Key of the last page, `None` when the array is empty or its keys
    /// run past `i64::MAX`
    pub fn last_key(&self) -> Option<i64> {
        let last = i64::try_from(self.pages.len().checked_sub(1)?).ok()?;
        self.key_offset.checked_add(last)
    }

    fn has_fragments(&self) -> bool {
        self.headers.is_some() || self.footers.is_some()
    }
}

/// Pages addressed by string keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KeyedDefinition {
    /// Key of the first page
    pub initial: String,
    /// Content pages by key
    #[serde(default)]
    pub pages: HashMap<String, Vec<JsonValue>>,
    /// Header fragments by key
    #[serde(default)]
    pub headers: Option<HashMap<String, Vec<JsonValue>>>,
    /// Footer fragments by key
    #[serde(default)]
    pub footers: Option<HashMap<String, Vec<JsonValue>>>,
    /// Neighbours of each key; unlisted keys have none
    #[serde(default)]
    pub links: HashMap<String, LinkDefinition>,
}

impl KeyedDefinition {
    /// Check if a key is mentioned anywhere in the definition
    pub fn knows_key(&self, key: &str) -> bool {
        self.pages.contains_key(key)
            || self.links.contains_key(key)
            || self.headers.as_ref().is_some_and(|m| m.contains_key(key))
            || self.footers.as_ref().is_some_and(|m| m.contains_key(key))
    }

    fn has_fragments(&self) -> bool {
        self.headers.is_some() || self.footers.is_some()
    }
}

/// Neighbours of a keyed page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LinkDefinition {
    /// Key of the previous page
    #[serde(default)]
    pub prev: Option<String>,
    /// Key of the next page
    #[serde(default)]
    pub next: Option<String>,
}

// ============================================================================
// Built Sources
// ============================================================================

/// Factory built from a fixture
#[derive(Debug, Clone)]
pub enum FixtureSource {
    /// Position-paged items
    Positional(PositionalFactory<JsonValue>),
    /// Key-paged with integer keys
    Indexed(KeyedFactory<i64, JsonValue>),
    /// Key-paged with string keys
    Keyed(KeyedFactory<String, JsonValue>),
}

impl FixtureSource {
    /// Which implementation the built source is
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Positional(factory) => factory.kind(),
            Self::Indexed(factory) => factory.kind(),
            Self::Keyed(factory) => factory.kind(),
        }
    }

    /// Get the positional factory, failing for key-paged fixtures
    pub fn positional(&self) -> Result<&PositionalFactory<JsonValue>> {
        match self {
            Self::Positional(factory) => Ok(factory),
            _ => Err(Error::config(
                "Fixture is key-paged; range loads need an items fixture",
            )),
        }
    }
}

impl FixtureDefinition {
    /// Build the fixture's source and wrap it in a factory
    pub fn build(&self) -> FixtureSource {
        match &self.source {
            SourceDefinition::Items(items) => {
                FixtureSource::Positional(MockSource::items(items.clone()))
            }
            SourceDefinition::PageArray(def) if def.has_fragments() => {
                FixtureSource::Indexed(build_separated_array(def))
            }
            SourceDefinition::PageArray(def) => FixtureSource::Indexed(MockSource::page_array(
                def.pages.clone(),
                def.key_offset,
                def.initial_key,
            )),
            SourceDefinition::Keyed(def) => FixtureSource::Keyed(build_keyed(def)),
        }
    }
}

/// Page array with fragments: map-backed separated source navigating by
/// array bounds
fn build_separated_array(def: &PageArrayDefinition) -> KeyedFactory<i64, JsonValue> {
    let offset = def.key_offset;
    let len = def.pages.len() as i64;
    let pages: HashMap<i64, Vec<JsonValue>> = def
        .pages
        .iter()
        .enumerate()
        .filter_map(|(index, page)| {
            let key = i64::try_from(index).ok().and_then(|i| offset.checked_add(i))?;
            page.clone().map(|page| (key, page))
        })
        .collect();

    MockSource::separated_pages_from_maps(
        def.start_key(),
        pages,
        def.headers.clone(),
        def.footers.clone(),
        move |key: &i64| {
            if key.saturating_sub(offset) > 0 {
                key.checked_sub(1)
            } else {
                None
            }
        },
        move |key: &i64| {
            if key.saturating_sub(offset).saturating_add(1) < len {
                key.checked_add(1)
            } else {
                None
            }
        },
    )
}

fn build_keyed(def: &KeyedDefinition) -> KeyedFactory<String, JsonValue> {
    let prev_links = def.links.clone();
    let next_links = def.links.clone();
    let prev_key = move |key: &String| prev_links.get(key).and_then(|link| link.prev.clone());
    let next_key = move |key: &String| next_links.get(key).and_then(|link| link.next.clone());

    if def.has_fragments() {
        MockSource::separated_pages_from_maps(
            def.initial.clone(),
            def.pages.clone(),
            def.headers.clone(),
            def.footers.clone(),
            prev_key,
            next_key,
        )
    } else {
        MockSource::pages_from_map(def.initial.clone(), def.pages.clone(), prev_key, next_key)
    }
}
