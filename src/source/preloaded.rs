//! Preloaded sources
//!
//! Sources backed by fixed arrays. The array bounds are the only source of
//! truth for whether there is anything before or after a position.

use super::types::{KeyedSource, PositionalSource};
use crate::types::{
    AdjacentPage, InitialPage, LoadInitialParams, LoadParams, MaybePage, PositionalInitialParams,
    PositionalPage, RangeParams, SourceKind,
};
use std::ops::Range;
use tracing::trace;

/// Clamp a requested window onto a collection of `len` items
///
/// The start is raised to zero and the end capped at `len`. A window that
/// ends up inverted or entirely outside the collection becomes an empty range
/// anchored at `min(start, len)`, so it is always safe to slice with.
pub fn clamp_range(start: i64, size: usize, len: usize) -> Range<usize> {
    let start = usize::try_from(start.max(0)).unwrap_or(usize::MAX);
    let end = start.saturating_add(size).min(len);
    start.min(end)..end
}

// ============================================================================
// Preloaded Page Source
// ============================================================================

/// Key-paged source over an array of pages with integer keys
///
/// The page at index `i` has key `i + key_offset`. A missing page (`None`) or
/// a key that falls outside the array is delivered as an empty page.
#[derive(Debug, Clone)]
pub struct PreloadedPageSource<V> {
    pages: Vec<MaybePage<V>>,
    key_offset: i64,
    initial_key: Option<i64>,
}

impl<V> PreloadedPageSource<V> {
    /// Create a preloaded page source
    ///
    /// Without an explicit initial key the first load starts at index 0.
    pub fn new(pages: Vec<MaybePage<V>>, key_offset: i64, initial_key: Option<i64>) -> Self {
        Self {
            pages,
            key_offset,
            initial_key,
        }
    }

    /// Number of pages in the backing array
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if the backing array is empty
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn to_index(&self, key: i64) -> i64 {
        key.saturating_sub(self.key_offset)
    }

    fn prev_key(&self, key: i64, index: i64) -> Option<i64> {
        if index > 0 {
            key.checked_sub(1)
        } else {
            None
        }
    }

    fn next_key(&self, key: i64, index: i64) -> Option<i64> {
        let has_next = usize::try_from(index.saturating_add(1)).map_or(true, |i| i < self.len());
        if has_next {
            key.checked_add(1)
        } else {
            None
        }
    }
}

impl<V: Clone> PreloadedPageSource<V> {
    fn page(&self, index: i64) -> Vec<V> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.pages.get(i))
            .and_then(Clone::clone)
            .unwrap_or_default()
    }
}

impl<V: Clone + Send + Sync> KeyedSource<i64, V> for PreloadedPageSource<V> {
    fn load_initial(&self, _params: &LoadInitialParams<i64>) -> InitialPage<i64, V> {
        let key = self.initial_key.unwrap_or(self.key_offset);
        let index = self.to_index(key);
        let prev_key = self.prev_key(key, index);
        let next_key = self.next_key(key, index);
        let items = self.page(index);
        trace!(key, index, items = items.len(), "preloaded pages initial load");
        InitialPage::new(items, prev_key, next_key)
    }

    fn load_after(&self, params: &LoadParams<i64>) -> AdjacentPage<i64, V> {
        let key = params.key;
        let index = self.to_index(key);
        let items = self.page(index);
        let next_key = self.next_key(key, index);
        trace!(key, index, items = items.len(), "preloaded pages load after");
        AdjacentPage::new(items, next_key)
    }

    fn load_before(&self, params: &LoadParams<i64>) -> AdjacentPage<i64, V> {
        let key = params.key;
        let index = self.to_index(key);
        let items = self.page(index);
        let prev_key = self.prev_key(key, index);
        trace!(key, index, items = items.len(), "preloaded pages load before");
        AdjacentPage::new(items, prev_key)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::PreloadedPages
    }
}

// ============================================================================
// Preloaded Item Source
// ============================================================================

/// Position-paged source over an array of items
#[derive(Debug, Clone)]
pub struct PreloadedItemSource<V> {
    items: Vec<V>,
}

impl<V> PreloadedItemSource<V> {
    /// Create a preloaded item source
    pub fn new(items: Vec<V>) -> Self {
        Self { items }
    }

    /// Number of items in the backing array
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the backing array is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<V: Clone> PreloadedItemSource<V> {
    fn window(&self, start: i64, size: usize) -> (Range<usize>, Vec<V>) {
        let range = clamp_range(start, size, self.items.len());
        let items = self.items[range.clone()].to_vec();
        (range, items)
    }
}

impl<V: Clone + Send + Sync> PositionalSource<V> for PreloadedItemSource<V> {
    fn load_initial(&self, params: &PositionalInitialParams) -> PositionalPage<V> {
        let (range, items) = self.window(
            params.requested_start_position,
            params.requested_load_size,
        );
        trace!(
            start = range.start,
            end = range.end,
            total = self.items.len(),
            "preloaded items initial load"
        );
        PositionalPage::new(items, range.start, self.items.len())
    }

    fn load_range(&self, params: &RangeParams) -> Vec<V> {
        let (range, items) = self.window(params.start_position, params.load_size);
        trace!(
            start = range.start,
            end = range.end,
            "preloaded items range load"
        );
        items
    }

    fn kind(&self) -> SourceKind {
        SourceKind::PreloadedItems
    }
}
