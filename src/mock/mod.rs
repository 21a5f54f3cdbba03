//! Mock source factories
//!
//! `MockSource` is the public entry point: each function builds a source,
//! caches it behind a factory and returns the factory. Empty backing data is
//! detected here, at construction time, and replaced by an empty source.
//!
//! # Overview
//!
//! | Function                      | Source kind       | Keys      |
//! |-------------------------------|-------------------|-----------|
//! | `items`                       | preloaded items   | position  |
//! | `page_array`                  | preloaded pages   | `i64`     |
//! | `pages*`                      | generator         | any `K`   |
//! | `separated_pages*`            | separated         | any `K`   |
//! | `pages_with_headers*/footers*`| separated `Entry` | any `K`   |

mod builder;

pub use builder::{fragment, lookup, lookup_fragment, KeyedGenerator};

use crate::source::{
    EmptyKeyedSource, EmptyPositionalSource, FragmentFn, KeyedFactory, Navigator,
    PositionalFactory, PreloadedItemSource, PreloadedPageSource,
};
use crate::types::{Entry, MaybePage};
use builder::{decorated, Decoration};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tracing::debug;

/// Factory functions for mock data sources
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl MockSource {
    // ========================================================================
    // Empty
    // ========================================================================

    /// Position-paged source over nothing
    pub fn empty<V: 'static>() -> PositionalFactory<V> {
        PositionalFactory::positional(EmptyPositionalSource::new())
    }

    /// Key-paged source with no pages
    pub fn empty_keyed<K: 'static, V: 'static>() -> KeyedFactory<K, V> {
        KeyedFactory::keyed(EmptyKeyedSource::new())
    }

    // ========================================================================
    // Preloaded
    // ========================================================================

    /// Position-paged source over a fixed list of items
    pub fn items<V>(items: Vec<V>) -> PositionalFactory<V>
    where
        V: Clone + Send + Sync + 'static,
    {
        if items.is_empty() {
            debug!("no items, using empty positional source");
            return Self::empty();
        }
        PositionalFactory::positional(PreloadedItemSource::new(items))
    }

    /// Position-paged source over any collection of items
    pub fn items_from<V, I>(items: I) -> PositionalFactory<V>
    where
        I: IntoIterator<Item = V>,
        V: Clone + Send + Sync + 'static,
    {
        Self::items(items.into_iter().collect())
    }

    /// Key-paged source over a fixed array of pages
    ///
    /// The page at index `i` has key `i + key_offset`; loading starts at
    /// `initial_key`, or at index 0 when none is given.
    pub fn page_array<V>(
        pages: Vec<MaybePage<V>>,
        key_offset: i64,
        initial_key: Option<i64>,
    ) -> KeyedFactory<i64, V>
    where
        V: Clone + Send + Sync + 'static,
    {
        if pages.is_empty() {
            debug!("no pages, using empty keyed source");
            return Self::empty_keyed();
        }
        KeyedFactory::keyed(PreloadedPageSource::new(pages, key_offset, initial_key))
    }

    // ========================================================================
    // Page Generators
    // ========================================================================

    /// Key-paged source over caller functions
    ///
    /// An absent page is delivered as an empty one.
    pub fn pages<K, V>(
        initial: impl Fn() -> K + Send + Sync + 'static,
        page: impl Fn(&K) -> MaybePage<V> + Send + Sync + 'static,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> KeyedFactory<K, V>
    where
        K: 'static,
        V: 'static,
    {
        KeyedGenerator::new(Navigator::new(initial, prev_key, next_key), Arc::new(page)).build()
    }

    /// Key-paged source over caller functions, starting at a fixed key
    pub fn pages_from<K, V>(
        initial: K,
        page: impl Fn(&K) -> MaybePage<V> + Send + Sync + 'static,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> KeyedFactory<K, V>
    where
        K: Clone + Send + Sync + 'static,
        V: 'static,
    {
        KeyedGenerator::new(
            Navigator::starting_at(initial, prev_key, next_key),
            Arc::new(page),
        )
        .build()
    }

    /// Key-paged source over a map of pages, starting at a fixed key
    ///
    /// An empty map yields the empty keyed source.
    pub fn pages_from_map<K, V>(
        initial: K,
        pages: HashMap<K, Vec<V>>,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> KeyedFactory<K, V>
    where
        K: Clone + Eq + Hash + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        if pages.is_empty() {
            debug!("empty page map, using empty keyed source");
            return Self::empty_keyed();
        }
        KeyedGenerator::new(
            Navigator::starting_at(initial, prev_key, next_key),
            lookup(pages),
        )
        .build()
    }

    // ========================================================================
    // Separated Pages
    // ========================================================================

    /// Key-paged source with optional header and footer fragments
    ///
    /// Absent content is preserved, so a page consisting of only a header
    /// and/or footer is still delivered.
    pub fn separated_pages<K, V>(
        initial: impl Fn() -> K + Send + Sync + 'static,
        page: impl Fn(&K) -> MaybePage<V> + Send + Sync + 'static,
        header: Option<FragmentFn<K, V>>,
        footer: Option<FragmentFn<K, V>>,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> KeyedFactory<K, V>
    where
        K: 'static,
        V: 'static,
    {
        KeyedGenerator::new(Navigator::new(initial, prev_key, next_key), Arc::new(page))
            .fragments(header, footer)
            .build()
    }

    /// Separated source starting at a fixed key
    pub fn separated_pages_from<K, V>(
        initial: K,
        page: impl Fn(&K) -> MaybePage<V> + Send + Sync + 'static,
        header: Option<FragmentFn<K, V>>,
        footer: Option<FragmentFn<K, V>>,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> KeyedFactory<K, V>
    where
        K: Clone + Send + Sync + 'static,
        V: 'static,
    {
        KeyedGenerator::new(
            Navigator::starting_at(initial, prev_key, next_key),
            Arc::new(page),
        )
        .fragments(header, footer)
        .build()
    }

    /// Separated source over a map of pages with fragment functions
    pub fn separated_pages_from_map<K, V>(
        initial: K,
        pages: HashMap<K, Vec<V>>,
        header: Option<FragmentFn<K, V>>,
        footer: Option<FragmentFn<K, V>>,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> KeyedFactory<K, V>
    where
        K: Clone + Eq + Hash + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        KeyedGenerator::new(
            Navigator::starting_at(initial, prev_key, next_key),
            lookup(pages),
        )
        .fragments(header, footer)
        .build()
    }

    /// Separated source where pages, headers and footers all come from maps
    ///
    /// When all three maps are empty or absent the empty keyed source is
    /// returned instead.
    pub fn separated_pages_from_maps<K, V>(
        initial: K,
        pages: HashMap<K, Vec<V>>,
        headers: Option<HashMap<K, Vec<V>>>,
        footers: Option<HashMap<K, Vec<V>>>,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> KeyedFactory<K, V>
    where
        K: Clone + Eq + Hash + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        let headers = headers.filter(|map| !map.is_empty());
        let footers = footers.filter(|map| !map.is_empty());
        if pages.is_empty() && headers.is_none() && footers.is_none() {
            debug!("empty page, header and footer maps, using empty keyed source");
            return Self::empty_keyed();
        }
        Self::separated_pages_from_map(
            initial,
            pages,
            headers.map(lookup_fragment),
            footers.map(lookup_fragment),
            prev_key,
            next_key,
        )
    }

    // ========================================================================
    // Decorated Pages
    // ========================================================================

    /// Key-paged source where every page starts with a header holding its key
    pub fn pages_with_headers<K, V>(
        initial: impl Fn() -> K + Send + Sync + 'static,
        page: impl Fn(&K) -> MaybePage<V> + Send + Sync + 'static,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> KeyedFactory<K, Entry<K, V>>
    where
        K: Clone + Send + Sync + 'static,
        V: 'static,
    {
        decorated(
            Navigator::new(initial, prev_key, next_key),
            Arc::new(page),
            Decoration::Header,
        )
    }

    /// Header-decorated source starting at a fixed key
    pub fn pages_with_headers_from<K, V>(
        initial: K,
        page: impl Fn(&K) -> MaybePage<V> + Send + Sync + 'static,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> KeyedFactory<K, Entry<K, V>>
    where
        K: Clone + Send + Sync + 'static,
        V: 'static,
    {
        decorated(
            Navigator::starting_at(initial, prev_key, next_key),
            Arc::new(page),
            Decoration::Header,
        )
    }

    /// Header-decorated source over a map of pages
    ///
    /// An empty map yields the empty keyed source.
    pub fn pages_with_headers_from_map<K, V>(
        initial: K,
        pages: HashMap<K, Vec<V>>,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> KeyedFactory<K, Entry<K, V>>
    where
        K: Clone + Eq + Hash + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        if pages.is_empty() {
            return Self::empty_keyed();
        }
        decorated(
            Navigator::starting_at(initial, prev_key, next_key),
            lookup(pages),
            Decoration::Header,
        )
    }

    /// Key-paged source where every page ends with a footer holding its key
    pub fn pages_with_footers<K, V>(
        initial: impl Fn() -> K + Send + Sync + 'static,
        page: impl Fn(&K) -> MaybePage<V> + Send + Sync + 'static,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> KeyedFactory<K, Entry<K, V>>
    where
        K: Clone + Send + Sync + 'static,
        V: 'static,
    {
        decorated(
            Navigator::new(initial, prev_key, next_key),
            Arc::new(page),
            Decoration::Footer,
        )
    }

    /// Footer-decorated source starting at a fixed key
    pub fn pages_with_footers_from<K, V>(
        initial: K,
        page: impl Fn(&K) -> MaybePage<V> + Send + Sync + 'static,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> KeyedFactory<K, Entry<K, V>>
    where
        K: Clone + Send + Sync + 'static,
        V: 'static,
    {
        decorated(
            Navigator::starting_at(initial, prev_key, next_key),
            Arc::new(page),
            Decoration::Footer,
        )
    }

    /// Footer-decorated source over a map of pages
    ///
    /// An empty map yields the empty keyed source.
    pub fn pages_with_footers_from_map<K, V>(
        initial: K,
        pages: HashMap<K, Vec<V>>,
        prev_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
        next_key: impl Fn(&K) -> Option<K> + Send + Sync + 'static,
    ) -> KeyedFactory<K, Entry<K, V>>
    where
        K: Clone + Eq + Hash + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        if pages.is_empty() {
            return Self::empty_keyed();
        }
        decorated(
            Navigator::starting_at(initial, prev_key, next_key),
            lookup(pages),
            Decoration::Footer,
        )
    }
}
