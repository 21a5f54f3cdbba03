//! Source traits and caller function types
//!
//! Defines the two host-facing source abstractions and the shapes of the
//! functions callers plug into them.

use crate::types::{
    AdjacentPage, InitialPage, LoadInitialParams, LoadParams, MaybePage, PositionalInitialParams,
    PositionalPage, RangeParams, SourceKind,
};
use std::sync::Arc;

// ============================================================================
// Caller Functions
// ============================================================================

/// Produces the key of the first page
pub type InitialFn<K> = Arc<dyn Fn() -> K + Send + Sync>;

/// Maps a key to its page, `None` when there is no page at that key
pub type PageFn<K, V> = Arc<dyn Fn(&K) -> MaybePage<V> + Send + Sync>;

/// Maps a key to an adjacent key, `None` at a boundary
pub type KeyFn<K> = Arc<dyn Fn(&K) -> Option<K> + Send + Sync>;

/// Produces a header or footer fragment from a key and its content page
pub type FragmentFn<K, V> = Arc<dyn Fn(&K, Option<&[V]>) -> MaybePage<V> + Send + Sync>;

// ============================================================================
// Source Traits
// ============================================================================

/// Source addressed by an opaque continuation key
///
/// Neighbouring keys are reported only in the direction of travel:
/// `load_after` reports the next key, `load_before` the previous one.
pub trait KeyedSource<K, V>: Send + Sync {
    /// Load the first page along with both of its neighbouring keys
    fn load_initial(&self, params: &LoadInitialParams<K>) -> InitialPage<K, V>;

    /// Load the page at `params.key` and report the key after it
    fn load_after(&self, params: &LoadParams<K>) -> AdjacentPage<K, V>;

    /// Load the page at `params.key` and report the key before it
    fn load_before(&self, params: &LoadParams<K>) -> AdjacentPage<K, V>;

    /// Which implementation this is
    fn kind(&self) -> SourceKind;
}

/// Source addressed by integer position into a fixed-size collection
pub trait PositionalSource<V>: Send + Sync {
    /// Load the first window along with its position and the collection size
    fn load_initial(&self, params: &PositionalInitialParams) -> PositionalPage<V>;

    /// Load an arbitrary window
    fn load_range(&self, params: &RangeParams) -> Vec<V>;

    /// Which implementation this is
    fn kind(&self) -> SourceKind;
}
