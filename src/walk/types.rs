//! Walk configuration and results

use serde::{Deserialize, Serialize};

/// Default number of items requested per incremental load
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default cap on the number of loads in one walk
pub const DEFAULT_MAX_PAGES: usize = 100;

// ============================================================================
// Configuration
// ============================================================================

/// Which way a keyed walk travels from the initial page
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Follow next keys
    #[default]
    Forward,
    /// Follow previous keys
    Backward,
    /// Follow next keys, then previous keys
    Both,
}

impl Direction {
    /// Check if the walk follows next keys
    pub fn forward(&self) -> bool {
        matches!(self, Self::Forward | Self::Both)
    }

    /// Check if the walk follows previous keys
    pub fn backward(&self) -> bool {
        matches!(self, Self::Backward | Self::Both)
    }
}

/// Configuration of a keyed walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Direction to travel from the initial page
    pub direction: Direction,
    /// Items requested per incremental load
    pub page_size: usize,
    /// Items requested by the initial load (defaults to three pages)
    pub initial_load_size: Option<usize>,
    /// Maximum number of loads, the initial load included
    pub max_pages: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            page_size: DEFAULT_PAGE_SIZE,
            initial_load_size: None,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl WalkConfig {
    /// Create a walk configuration for a direction
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the maximum number of loads
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Items requested by the initial load
    pub fn initial_load_size(&self) -> usize {
        self.initial_load_size
            .unwrap_or_else(|| self.page_size.saturating_mul(3))
    }
}

/// Configuration of a positional walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalWalkConfig {
    /// Position of the initial load
    pub start: i64,
    /// Items requested per range load
    pub page_size: usize,
    /// Items requested by the initial load (defaults to three pages)
    pub initial_load_size: Option<usize>,
    /// Maximum number of loads, the initial load included
    pub max_pages: usize,
}

impl Default for PositionalWalkConfig {
    fn default() -> Self {
        Self {
            start: 0,
            page_size: DEFAULT_PAGE_SIZE,
            initial_load_size: None,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl PositionalWalkConfig {
    /// Create a positional walk configuration starting at a position
    pub fn new(start: i64) -> Self {
        Self {
            start,
            ..Default::default()
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the maximum number of loads
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Items requested by the initial load
    pub fn initial_load_size(&self) -> usize {
        self.initial_load_size
            .unwrap_or_else(|| self.page_size.saturating_mul(3))
    }
}

// ============================================================================
// Results
// ============================================================================

/// Which load call delivered a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadKind {
    Initial,
    After,
    Before,
}

/// A page as received by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkedPage<K, V> {
    /// Load call that delivered the page
    pub load: LoadKind,
    /// Requested key (unknown to the host for the initial load)
    pub key: Option<K>,
    /// Delivered items
    pub items: Vec<V>,
}

/// Everything received during a keyed walk, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyedWalk<K, V> {
    /// Pages from the first to the last
    pub pages: Vec<WalkedPage<K, V>>,
    /// Number of load calls made
    pub loads: usize,
    /// Whether the page limit stopped the walk before a boundary was reached
    pub truncated: bool,
}

impl<K, V> KeyedWalk<K, V> {
    /// All items in display order
    pub fn items(&self) -> impl Iterator<Item = &V> {
        self.pages.iter().flat_map(|page| page.items.iter())
    }

    /// Consume the walk and return all items in display order
    pub fn into_items(self) -> Vec<V> {
        self.pages.into_iter().flat_map(|page| page.items).collect()
    }

    /// Total number of items received
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(|page| page.items.len()).sum()
    }
}

/// Everything received during a positional walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionalWalk<V> {
    /// Position of the first received item
    pub position: usize,
    /// Size of the backing collection reported by the initial load
    pub total_count: usize,
    /// Received items, contiguous from `position`
    pub items: Vec<V>,
    /// Number of load calls made
    pub loads: usize,
    /// Whether the page limit stopped the walk before the end was reached
    pub truncated: bool,
}
