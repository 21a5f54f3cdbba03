//! Degenerate sources that never deliver anything

use super::types::{KeyedSource, PositionalSource};
use crate::types::{
    AdjacentPage, InitialPage, LoadInitialParams, LoadParams, PositionalInitialParams,
    PositionalPage, RangeParams, SourceKind,
};
use std::fmt;
use std::marker::PhantomData;

/// Key-paged source with no items and no neighbours in either direction
pub struct EmptyKeyedSource<K, V> {
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> EmptyKeyedSource<K, V> {
    /// Create an empty key-paged source
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<K, V> Default for EmptyKeyedSource<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for EmptyKeyedSource<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EmptyKeyedSource")
    }
}

impl<K, V> KeyedSource<K, V> for EmptyKeyedSource<K, V> {
    fn load_initial(&self, _params: &LoadInitialParams<K>) -> InitialPage<K, V> {
        InitialPage::terminal()
    }

    fn load_after(&self, _params: &LoadParams<K>) -> AdjacentPage<K, V> {
        AdjacentPage::terminal()
    }

    fn load_before(&self, _params: &LoadParams<K>) -> AdjacentPage<K, V> {
        AdjacentPage::terminal()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Empty
    }
}

/// Position-paged source over a collection of size zero
pub struct EmptyPositionalSource<V> {
    _marker: PhantomData<fn() -> V>,
}

impl<V> EmptyPositionalSource<V> {
    /// Create an empty position-paged source
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<V> Default for EmptyPositionalSource<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for EmptyPositionalSource<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EmptyPositionalSource")
    }
}

impl<V> PositionalSource<V> for EmptyPositionalSource<V> {
    fn load_initial(&self, _params: &PositionalInitialParams) -> PositionalPage<V> {
        PositionalPage::new(Vec::new(), 0, 0)
    }

    fn load_range(&self, _params: &RangeParams) -> Vec<V> {
        Vec::new()
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Empty
    }
}
