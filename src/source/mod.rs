//! Source module
//!
//! Supports: key-paged generators, header/footer separated pages, preloaded
//! page arrays, preloaded item arrays, empty sources
//!
//! # Overview
//!
//! A source answers the load calls of a paging host. Key-paged sources walk
//! a caller-defined navigation graph (`Navigator`) and fetch a page per key;
//! position-paged sources slice a fixed backing array. Every source is
//! immutable once built, so a single instance can be shared behind a
//! `CachedFactory` and invoked from any thread.

mod cached;
mod empty;
mod keyed;
mod merge;
mod preloaded;
mod types;

pub use cached::{CachedFactory, KeyedFactory, PositionalFactory};
pub use empty::{EmptyKeyedSource, EmptyPositionalSource};
pub use keyed::{GeneratorSource, Navigator, SeparatedSource};
pub use merge::{has_content, merge_fragments};
pub use preloaded::{clamp_range, PreloadedItemSource, PreloadedPageSource};
pub use types::{FragmentFn, InitialFn, KeyFn, KeyedSource, PageFn, PositionalSource};
