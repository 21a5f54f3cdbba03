//! Common types exchanged between sources and their host
//!
//! Request parameters mirror what a paging host hands to a data source, and
//! the page types are what a source delivers back for each load call.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// A page that may be absent (`None`) as opposed to present but empty
pub type MaybePage<V> = Option<Vec<V>>;

// ============================================================================
// Source Kind
// ============================================================================

/// Which implementation a factory produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Degenerate source that never delivers items
    Empty,
    /// Key-paged source over a page function, absent pages coerced to empty
    Generator,
    /// Key-paged source merging header, content and footer fragments
    Separated,
    /// Key-paged source over a preloaded array of pages
    PreloadedPages,
    /// Position-paged source over a preloaded array of items
    PreloadedItems,
}

impl SourceKind {
    /// Get the snake_case name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Generator => "generator",
            Self::Separated => "separated",
            Self::PreloadedPages => "preloaded_pages",
            Self::PreloadedItems => "preloaded_items",
        }
    }

    /// Check if this is the degenerate empty source
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Key-Paged Requests and Results
// ============================================================================

/// Parameters of the initial load of a key-paged source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadInitialParams<K> {
    /// Key the host would like to start from, if it has one
    pub requested_key: Option<K>,
    /// Number of items the host would like to receive
    pub requested_load_size: usize,
    /// Whether the host shows placeholders for unloaded items
    pub placeholders_enabled: bool,
}

impl<K> LoadInitialParams<K> {
    /// Create initial load parameters without a requested key
    pub fn new(requested_load_size: usize) -> Self {
        Self {
            requested_key: None,
            requested_load_size,
            placeholders_enabled: false,
        }
    }

    /// Set the key the host would like to start from
    #[must_use]
    pub fn with_requested_key(mut self, key: K) -> Self {
        self.requested_key = Some(key);
        self
    }
}

/// Parameters of a `load_after` or `load_before` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadParams<K> {
    /// Key of the page to load
    pub key: K,
    /// Number of items the host would like to receive
    pub requested_load_size: usize,
}

impl<K> LoadParams<K> {
    /// Create load parameters for a key
    pub fn new(key: K, requested_load_size: usize) -> Self {
        Self {
            key,
            requested_load_size,
        }
    }
}

/// Result of the initial load of a key-paged source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitialPage<K, V> {
    /// Delivered items
    pub items: Vec<V>,
    /// Key of the page before this one, `None` at the start boundary
    pub prev_key: Option<K>,
    /// Key of the page after this one, `None` at the end boundary
    pub next_key: Option<K>,
}

impl<K, V> InitialPage<K, V> {
    /// Create an initial page result
    pub fn new(items: Vec<V>, prev_key: Option<K>, next_key: Option<K>) -> Self {
        Self {
            items,
            prev_key,
            next_key,
        }
    }

    /// A page with no items and no neighbours
    pub fn terminal() -> Self {
        Self::new(Vec::new(), None, None)
    }
}

/// Result of a `load_after` or `load_before` call
///
/// Only the boundary in the direction of travel is reported: `load_after`
/// carries the next key, `load_before` the previous key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacentPage<K, V> {
    /// Delivered items
    pub items: Vec<V>,
    /// Key to continue with in the same direction, `None` at the boundary
    pub adjacent_key: Option<K>,
}

impl<K, V> AdjacentPage<K, V> {
    /// Create an adjacent page result
    pub fn new(items: Vec<V>, adjacent_key: Option<K>) -> Self {
        Self {
            items,
            adjacent_key,
        }
    }

    /// A page with no items and nowhere further to go
    pub fn terminal() -> Self {
        Self::new(Vec::new(), None)
    }
}

// ============================================================================
// Position-Paged Requests and Results
// ============================================================================

/// Parameters of the initial load of a position-paged source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalInitialParams {
    /// Position the host would like to start from (may be negative)
    pub requested_start_position: i64,
    /// Number of items the host would like to receive
    pub requested_load_size: usize,
    /// Page size the host uses for subsequent range loads
    pub page_size: usize,
    /// Whether the host shows placeholders for unloaded items
    pub placeholders_enabled: bool,
}

impl PositionalInitialParams {
    /// Create initial load parameters
    pub fn new(requested_start_position: i64, requested_load_size: usize) -> Self {
        Self {
            requested_start_position,
            requested_load_size,
            page_size: requested_load_size,
            placeholders_enabled: true,
        }
    }
}

/// Parameters of a range load on a position-paged source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeParams {
    /// First position of the range (may be negative)
    pub start_position: i64,
    /// Number of items in the range
    pub load_size: usize,
}

impl RangeParams {
    /// Create range parameters
    pub fn new(start_position: i64, load_size: usize) -> Self {
        Self {
            start_position,
            load_size,
        }
    }
}

/// Result of the initial load of a position-paged source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionalPage<V> {
    /// Delivered items
    pub items: Vec<V>,
    /// Position of the first delivered item
    pub position: usize,
    /// Size of the whole backing collection
    pub total_count: usize,
}

impl<V> PositionalPage<V> {
    /// Create a positional page result
    pub fn new(items: Vec<V>, position: usize, total_count: usize) -> Self {
        Self {
            items,
            position,
            total_count,
        }
    }
}

// ============================================================================
// Header / Footer Entries
// ============================================================================

/// Item of a source that decorates every page with its key
///
/// Produced by the `pages_with_headers` and `pages_with_footers` factories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Entry<K, V> {
    /// Header carrying the page key
    Header(K),
    /// Content item
    Item(V),
    /// Footer carrying the page key
    Footer(K),
}

impl<K, V> Entry<K, V> {
    /// Get the content item, if this is one
    pub fn as_item(&self) -> Option<&V> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Check if this is a header or footer
    pub fn is_decoration(&self) -> bool {
        !matches!(self, Self::Item(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_names() {
        assert_eq!(SourceKind::Empty.to_string(), "empty");
        assert_eq!(SourceKind::PreloadedPages.as_str(), "preloaded_pages");
        assert!(SourceKind::Empty.is_empty());
        assert!(!SourceKind::Separated.is_empty());
    }

    #[test]
    fn test_source_kind_serializes_snake_case() {
        let json = serde_json::to_string(&SourceKind::PreloadedItems).unwrap();
        assert_eq!(json, "\"preloaded_items\"");
    }

    #[test]
    fn test_load_initial_params_builder() {
        let params = LoadInitialParams::new(30).with_requested_key(7);
        assert_eq!(params.requested_key, Some(7));
        assert_eq!(params.requested_load_size, 30);
        assert!(!params.placeholders_enabled);
    }

    #[test]
    fn test_terminal_pages() {
        let initial: InitialPage<u8, u8> = InitialPage::terminal();
        assert!(initial.items.is_empty());
        assert!(initial.prev_key.is_none());
        assert!(initial.next_key.is_none());

        let adjacent: AdjacentPage<u8, u8> = AdjacentPage::terminal();
        assert!(adjacent.items.is_empty());
        assert!(adjacent.adjacent_key.is_none());
    }

    #[test]
    fn test_entry_accessors() {
        let header: Entry<i32, &str> = Entry::Header(1);
        let item: Entry<i32, &str> = Entry::Item("a");
        assert!(header.is_decoration());
        assert!(!item.is_decoration());
        assert_eq!(item.as_item(), Some(&"a"));
        assert_eq!(header.as_item(), None);
    }

    #[test]
    fn test_entry_serialization() {
        let entry: Entry<i32, String> = Entry::Footer(3);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"type": "footer", "value": 3}));
    }
}
