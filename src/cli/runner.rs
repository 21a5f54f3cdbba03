//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Result, ResultExt};
use crate::loader::{load_fixture, FixtureDefinition, FixtureSource};
use crate::types::RangeParams;
use crate::walk::{walk_keyed, walk_positional, PositionalWalkConfig, WalkConfig};
use serde_json::{json, Value};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its message
    pub fn run(&self) -> Result<()> {
        let msg = self.execute()?;
        self.output_message(&msg);
        Ok(())
    }

    /// Run the CLI command and return its message
    pub fn execute(&self) -> Result<Value> {
        let fixture = load_fixture(self.cli.command.fixture())?;
        info!(
            fixture = %fixture.name,
            source = fixture.source.type_name(),
            "fixture loaded"
        );

        match &self.cli.command {
            Commands::Validate { .. } => Ok(Self::validate(&fixture)),
            Commands::Describe { .. } => Ok(Self::describe(&fixture)),
            Commands::Walk {
                direction,
                max_pages,
                page_size,
                start,
                ..
            } => {
                let keyed = WalkConfig::new(*direction)
                    .with_page_size(*page_size)
                    .with_max_pages(*max_pages);
                let positional = PositionalWalkConfig::new(*start)
                    .with_page_size(*page_size)
                    .with_max_pages(*max_pages);
                Self::walk(&fixture, &keyed, &positional)
            }
            Commands::Range { start, size, .. } => Self::range(&fixture, *start, *size),
        }
    }

    /// Validate fixture definition
    fn validate(fixture: &FixtureDefinition) -> Value {
        json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!(
                    "Fixture '{}' v{} is valid ({} source)",
                    fixture.name,
                    fixture.version,
                    fixture.source.type_name()
                )
            }
        })
    }

    /// Describe the built source
    fn describe(fixture: &FixtureDefinition) -> Value {
        let source = fixture.build();
        let paging = match &source {
            FixtureSource::Positional(_) => "positional",
            FixtureSource::Indexed(_) | FixtureSource::Keyed(_) => "keyed",
        };

        json!({
            "type": "DESCRIPTION",
            "fixture": {
                "name": fixture.name,
                "version": fixture.version,
                "description": fixture.description,
                "source": fixture.source.type_name(),
                "paging": paging,
                "kind": source.kind(),
            }
        })
    }

    /// Walk the built source
    fn walk(
        fixture: &FixtureDefinition,
        keyed: &WalkConfig,
        positional: &PositionalWalkConfig,
    ) -> Result<Value> {
        let source = fixture.build();
        let kind = source.kind();
        let (walk, loads) = match source {
            FixtureSource::Positional(factory) => {
                let walk = walk_positional(&*factory.create(), positional);
                let loads = walk.loads;
                (serde_json::to_value(walk), loads)
            }
            FixtureSource::Indexed(factory) => {
                let walk = walk_keyed(&*factory.create(), keyed);
                let loads = walk.loads;
                (serde_json::to_value(walk), loads)
            }
            FixtureSource::Keyed(factory) => {
                let walk = walk_keyed(&*factory.create(), keyed);
                let loads = walk.loads;
                (serde_json::to_value(walk), loads)
            }
        };
        let walk = walk.context("Failed to serialize walk")?;

        info!(fixture = %fixture.name, loads, "walk finished");

        Ok(json!({
            "type": "WALK",
            "kind": kind,
            "walk": walk,
        }))
    }

    /// Run one clamped range load
    fn range(fixture: &FixtureDefinition, start: i64, size: usize) -> Result<Value> {
        let source = fixture.build();
        let factory = source.positional()?;
        let items = factory.create().load_range(&RangeParams::new(start, size));

        info!(fixture = %fixture.name, start, size, items = items.len(), "range loaded");

        Ok(json!({
            "type": "RANGE",
            "kind": factory.kind(),
            "requested": { "start": start, "size": size },
            "items": items,
        }))
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
