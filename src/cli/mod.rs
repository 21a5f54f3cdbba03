//! CLI module
//!
//! Command-line interface for exercising fixture-backed mock sources.
//!
//! # Commands
//!
//! - `validate` - Parse and validate a fixture file
//! - `describe` - Show which source a fixture builds
//! - `walk` - Page through a fixture the way a list host would
//! - `range` - Issue one clamped range load against an items fixture

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
