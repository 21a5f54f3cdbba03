//! Key-paged source implementations
//!
//! Both sources delegate navigation to a `Navigator` and content to a caller
//! page function. They differ only in how an absent page is delivered.

use super::merge::merge_fragments;
use super::types::{FragmentFn, InitialFn, KeyFn, KeyedSource, PageFn};
use crate::types::{
    AdjacentPage, InitialPage, LoadInitialParams, LoadParams, MaybePage, SourceKind,
};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

// ============================================================================
// Navigator
// ============================================================================

/// Caller-defined navigation graph over keys
///
/// Pure delegation: nothing is memoized and no monotonicity is checked, so
/// cycles are the caller's business.
pub struct Navigator<K> {
    initial: InitialFn<K>,
    prev: KeyFn<K>,
    next: KeyFn<K>,
}

impl<K> Navigator<K> {
    /// Create a navigator from an initial key function and neighbour functions
    pub fn new(
        initial: impl Fn() -> K + Send + Sync + 'static,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> Self {
        Self {
            initial: Arc::new(initial),
            prev: Arc::new(prev_key),
            next: Arc::new(next_key),
        }
    }

    /// Create a navigator that always starts at a fixed key
    pub fn starting_at(
        initial: K,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> Self
    where
        K: Clone + Send + Sync + 'static,
    {
        Self::new(move || initial.clone(), prev_key, next_key)
    }

    /// Key of the first page
    pub fn initial(&self) -> K {
        (self.initial)()
    }

    /// Key before `key`, `None` at the start boundary
    pub fn prev_key(&self, key: &K) -> Option<K> {
        (self.prev)(key)
    }

    /// Key after `key`, `None` at the end boundary
    pub fn next_key(&self, key: &K) -> Option<K> {
        (self.next)(key)
    }
}

impl<K> Clone for Navigator<K> {
    fn clone(&self) -> Self {
        Self {
            initial: Arc::clone(&self.initial),
            prev: Arc::clone(&self.prev),
            next: Arc::clone(&self.next),
        }
    }
}

impl<K> fmt::Debug for Navigator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator").finish_non_exhaustive()
    }
}

// ============================================================================
// Generator Source
// ============================================================================

/// Key-paged source over a page function
///
/// An absent page is delivered as an empty one.
pub struct GeneratorSource<K, V> {
    navigator: Navigator<K>,
    page: PageFn<K, V>,
}

impl<K, V> GeneratorSource<K, V> {
    /// Create a generator source
    pub fn new(navigator: Navigator<K>, page: PageFn<K, V>) -> Self {
        Self { navigator, page }
    }

    fn page(&self, key: &K) -> Vec<V> {
        (self.page)(key).unwrap_or_default()
    }
}

impl<K, V> KeyedSource<K, V> for GeneratorSource<K, V> {
    fn load_initial(&self, _params: &LoadInitialParams<K>) -> InitialPage<K, V> {
        let key = self.navigator.initial();
        let items = self.page(&key);
        let prev_key = self.navigator.prev_key(&key);
        let next_key = self.navigator.next_key(&key);
        trace!(
            items = items.len(),
            has_prev = prev_key.is_some(),
            has_next = next_key.is_some(),
            "generator initial load"
        );
        InitialPage::new(items, prev_key, next_key)
    }

    fn load_after(&self, params: &LoadParams<K>) -> AdjacentPage<K, V> {
        let items = self.page(&params.key);
        let next_key = self.navigator.next_key(&params.key);
        trace!(
            items = items.len(),
            has_next = next_key.is_some(),
            "generator load after"
        );
        AdjacentPage::new(items, next_key)
    }

    fn load_before(&self, params: &LoadParams<K>) -> AdjacentPage<K, V> {
        let items = self.page(&params.key);
        let prev_key = self.navigator.prev_key(&params.key);
        trace!(
            items = items.len(),
            has_prev = prev_key.is_some(),
            "generator load before"
        );
        AdjacentPage::new(items, prev_key)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Generator
    }
}

impl<K, V> fmt::Debug for GeneratorSource<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorSource")
            .field("navigator", &self.navigator)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Separated Source
// ============================================================================

/// Key-paged source that surrounds each content page with optional header
/// and footer fragments
///
/// An absent content page is kept absent until merging, so a page made of a
/// header and/or footer alone is still delivered. Both fragment functions are
/// invoked on every load with the key and the freshly computed content.
pub struct SeparatedSource<K, V> {
    navigator: Navigator<K>,
    page: PageFn<K, V>,
    header: Option<FragmentFn<K, V>>,
    footer: Option<FragmentFn<K, V>>,
}

impl<K, V> SeparatedSource<K, V> {
    /// Create a separated source
    pub fn new(
        navigator: Navigator<K>,
        page: PageFn<K, V>,
        header: Option<FragmentFn<K, V>>,
        footer: Option<FragmentFn<K, V>>,
    ) -> Self {
        Self {
            navigator,
            page,
            header,
            footer,
        }
    }

    fn fragment(
        fragment: Option<&FragmentFn<K, V>>,
        key: &K,
        content: &MaybePage<V>,
    ) -> MaybePage<V> {
        fragment.and_then(|f| f(key, content.as_deref()))
    }

    fn page(&self, key: &K) -> Vec<V> {
        let content = (self.page)(key);
        let header = Self::fragment(self.header.as_ref(), key, &content);
        let footer = Self::fragment(self.footer.as_ref(), key, &content);
        merge_fragments(header, content, footer)
    }
}

impl<K, V> KeyedSource<K, V> for SeparatedSource<K, V> {
    fn load_initial(&self, _params: &LoadInitialParams<K>) -> InitialPage<K, V> {
        let key = self.navigator.initial();
        let items = self.page(&key);
        let prev_key = self.navigator.prev_key(&key);
        let next_key = self.navigator.next_key(&key);
        trace!(
            items = items.len(),
            has_prev = prev_key.is_some(),
            has_next = next_key.is_some(),
            "separated initial load"
        );
        InitialPage::new(items, prev_key, next_key)
    }

    fn load_after(&self, params: &LoadParams<K>) -> AdjacentPage<K, V> {
        let items = self.page(&params.key);
        let next_key = self.navigator.next_key(&params.key);
        trace!(
            items = items.len(),
            has_next = next_key.is_some(),
            "separated load after"
        );
        AdjacentPage::new(items, next_key)
    }

    fn load_before(&self, params: &LoadParams<K>) -> AdjacentPage<K, V> {
        let items = self.page(&params.key);
        let prev_key = self.navigator.prev_key(&params.key);
        trace!(
            items = items.len(),
            has_prev = prev_key.is_some(),
            "separated load before"
        );
        AdjacentPage::new(items, prev_key)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Separated
    }
}

impl<K, V> fmt::Debug for SeparatedSource<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeparatedSource")
            .field("navigator", &self.navigator)
            .field("has_header", &self.header.is_some())
            .field("has_footer", &self.footer.is_some())
            .finish_non_exhaustive()
    }
}
