//! Fixture loader module
//!
//! Parse mock data sets from YAML or JSON files.
//!
//! # Overview
//!
//! The loader module provides:
//! - `FixtureDefinition` - Declarative description of one mock data set
//! - `SourceDefinition` - Items, page array or keyed pages
//! - Parsing with validation, and `build()` into a cached source factory

mod parser;
mod types;

pub use parser::{load_fixture, load_fixture_from_json, load_fixture_from_str};
pub use types::{
    FixtureDefinition, FixtureSource, KeyedDefinition, LinkDefinition, PageArrayDefinition,
    SourceDefinition,
};

#[cfg(test)]
mod tests;
