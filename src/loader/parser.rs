//! Fixture parser
//!
//! Parses and validates fixture files. YAML is the default format; files
//! with a `.json` extension are parsed as JSON.

use crate::error::{Error, Result};
use crate::loader::types::{
    FixtureDefinition, KeyedDefinition, PageArrayDefinition, SourceDefinition,
};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a fixture definition from a file path
///
/// # Examples
///
/// ```ignore
/// let fixture = load_fixture("fixtures/catalog.yaml")?;
/// let source = fixture.build();
/// ```
pub fn load_fixture(path: impl AsRef<Path>) -> Result<FixtureDefinition> {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::file_not_found(path.display().to_string()));
        }
        Err(e) => return Err(Error::Io(e)),
    };

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    debug!(path = %path.display(), json = is_json, "loading fixture");

    if is_json {
        load_fixture_from_json(&content)
    } else {
        load_fixture_from_str(&content)
    }
}

/// Load a fixture definition from a YAML string
pub fn load_fixture_from_str(yaml: &str) -> Result<FixtureDefinition> {
    let def: FixtureDefinition = serde_yaml::from_str(yaml)?;
    validate_fixture(&def)?;
    Ok(def)
}

/// Load a fixture definition from a JSON string
pub fn load_fixture_from_json(json: &str) -> Result<FixtureDefinition> {
    let def: FixtureDefinition = serde_json::from_str(json)?;
    validate_fixture(&def)?;
    Ok(def)
}

/// Validate a fixture definition
fn validate_fixture(def: &FixtureDefinition) -> Result<()> {
    if def.name.trim().is_empty() {
        return Err(Error::config("Fixture name cannot be empty"));
    }

    match &def.source {
        SourceDefinition::Items(_) => Ok(()),
        SourceDefinition::PageArray(pages) => validate_page_array(pages),
        SourceDefinition::Keyed(keyed) => validate_keyed(keyed),
    }?;

    debug!(
        name = %def.name,
        source = def.source.type_name(),
        "fixture validated"
    );
    Ok(())
}

/// Validate a page array definition
fn validate_page_array(def: &PageArrayDefinition) -> Result<()> {
    if !def.pages.is_empty() && def.last_key().is_none() {
        return Err(Error::invalid_value(
            "key_offset",
            format!(
                "{} pages starting at {} run past the largest key",
                def.pages.len(),
                def.key_offset
            ),
        ));
    }

    if let Some(initial_key) = def.initial_key {
        if !def.pages.is_empty() && !def.contains_key(initial_key) {
            return Err(Error::invalid_value(
                "initial_key",
                format!(
                    "{} is outside the page keys {}..{}",
                    initial_key,
                    def.key_offset,
                    def.key_offset.saturating_add(def.pages.len() as i64)
                ),
            ));
        }
    }
    Ok(())
}

/// Validate a keyed definition
fn validate_keyed(def: &KeyedDefinition) -> Result<()> {
    if def.initial.is_empty() {
        return Err(Error::missing_field("initial"));
    }

    if !def.knows_key(&def.initial) {
        return Err(Error::invalid_value(
            "initial",
            format!("key '{}' has no page, fragment or link", def.initial),
        ));
    }

    // Sorted for a deterministic error on the first bad link
    let mut keys: Vec<&String> = def.links.keys().collect();
    keys.sort();
    for key in keys {
        let link = &def.links[key];
        for target in [&link.prev, &link.next].into_iter().flatten() {
            if !def.knows_key(target) {
                return Err(Error::invalid_value(
                    "links",
                    format!("'{key}' links to unknown key '{target}'"),
                ));
            }
        }
    }

    Ok(())
}
