//! Walk module
//!
//! A minimal synchronous host: drives a source the way a paging host would
//! (one initial load, then incremental loads) and records what it received.
//!
//! # Overview
//!
//! The walk module provides:
//! - `walk_keyed` - initial load followed by `load_after` / `load_before`
//!   chains until the boundary keys run out
//! - `walk_positional` - initial window followed by consecutive range loads
//! - A page limit that bounds walks over cyclic navigation graphs

mod types;
mod walker;

pub use types::{
    Direction, KeyedWalk, LoadKind, PositionalWalk, PositionalWalkConfig, WalkConfig, WalkedPage,
};
pub use walker::{walk_keyed, walk_positional};

#[cfg(test)]
mod tests;
