// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::type_complexity)]

//! # paging-mock
//!
//! Mock paged data sources for exercising paged-list hosts in tests.
//!
//! ## Features
//!
//! - **Key-paged sources**: Pages addressed by keys, with previous/next navigation
//! - **Header and footer fragments**: Decorations merged around each content page
//! - **Position-paged sources**: Windows over a preloaded list with a total count
//! - **Empty substitution**: Empty inputs build an explicitly empty source
//! - **Cached factories**: Every `create()` hands back the same source instance
//! - **Fixtures**: Declare mock data sets in YAML or JSON and walk them from the CLI
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paging_mock::{MockSource, LoadInitialParams, source::KeyedSource};
//!
//! let factory = MockSource::page_array(
//!     vec![Some(vec!["a", "b"]), Some(vec!["c"])],
//!     0,
//!     None,
//! );
//! let source = factory.create();
//! let first = source.load_initial(&LoadInitialParams::new(20));
//! assert_eq!(first.items, vec!["a", "b"]);
//! assert_eq!(first.next_key, Some(1));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 MockSource (factory constructors)            │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │
//! ┌────────────┬─────────────────┼────────────────┬──────────────┐
//! │  Navigator │ Generator /     │ Preloaded      │ Empty        │
//! │  + merge   │ Separated       │ pages / items  │ sources      │
//! └────────────┴─────────────────┴────────────────┴──────────────┘
//!                                │
//!                   CachedFactory (one shared instance)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Load parameters, results and shared types
pub mod types;

/// Source traits and implementations
pub mod source;

/// Factory constructors for mock sources
pub mod mock;

/// Host-side paging drivers
pub mod walk;

/// Fixture loader for YAML/JSON data sets
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use loader::{load_fixture, load_fixture_from_str, FixtureDefinition, FixtureSource};
pub use mock::MockSource;
pub use source::{CachedFactory, KeyedFactory, PositionalFactory};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
