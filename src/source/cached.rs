//! Single-instance factories
//!
//! Every source is immutable, so a factory can hand out the same instance on
//! each invocation instead of rebuilding it.

use super::types::{KeyedSource, PositionalSource};
use crate::types::SourceKind;
use std::fmt;
use std::sync::Arc;

/// Factory that returns one pre-built source on every invocation
pub struct CachedFactory<S: ?Sized> {
    source: Arc<S>,
}

/// Factory of key-paged sources
pub type KeyedFactory<K, V> = CachedFactory<dyn KeyedSource<K, V>>;

/// Factory of position-paged sources
pub type PositionalFactory<V> = CachedFactory<dyn PositionalSource<V>>;

impl<S: ?Sized> CachedFactory<S> {
    /// Wrap an already shared source
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Get the cached source (always the same instance)
    pub fn create(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }

    /// Check if two factories hand out the same instance
    pub fn shares_source_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }
}

impl<K: 'static, V: 'static> CachedFactory<dyn KeyedSource<K, V>> {
    /// Cache a key-paged source
    pub fn keyed(source: impl KeyedSource<K, V> + 'static) -> Self {
        Self::new(Arc::new(source))
    }

    /// Which implementation the cached source is
    pub fn kind(&self) -> SourceKind {
        self.source.kind()
    }
}

impl<V: 'static> CachedFactory<dyn PositionalSource<V>> {
    /// Cache a position-paged source
    pub fn positional(source: impl PositionalSource<V> + 'static) -> Self {
        Self::new(Arc::new(source))
    }

    /// Which implementation the cached source is
    pub fn kind(&self) -> SourceKind {
        self.source.kind()
    }
}

impl<S: ?Sized> Clone for CachedFactory<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: ?Sized> fmt::Debug for CachedFactory<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedFactory")
            .field("handles", &Arc::strong_count(&self.source))
            .finish()
    }
}
