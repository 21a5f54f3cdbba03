//! CLI commands and argument parsing

use crate::walk::Direction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mock paging data source CLI
#[derive(Parser, Debug)]
#[command(name = "paging-mock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a fixture file
    Validate {
        /// Fixture file (YAML, or JSON with a .json extension)
        fixture: PathBuf,
    },

    /// Describe the source a fixture builds
    Describe {
        /// Fixture file
        fixture: PathBuf,
    },

    /// Walk a fixture from its initial load to its boundaries
    Walk {
        /// Fixture file
        fixture: PathBuf,

        /// Direction for key-paged fixtures
        #[arg(short, long, value_enum, default_value = "forward")]
        direction: Direction,

        /// Maximum number of load calls
        #[arg(long, default_value = "100")]
        max_pages: usize,

        /// Requested load size for page and range loads
        #[arg(long, default_value = "20")]
        page_size: usize,

        /// Start position for items fixtures
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        start: i64,
    },

    /// Run one range load against an items fixture
    Range {
        /// Fixture file
        fixture: PathBuf,

        /// Requested start position (may be negative)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        start: i64,

        /// Requested load size
        #[arg(long, default_value = "20")]
        size: usize,
    },
}

impl Commands {
    /// Fixture file the command operates on
    pub fn fixture(&self) -> &PathBuf {
        match self {
            Self::Validate { fixture }
            | Self::Describe { fixture }
            | Self::Walk { fixture, .. }
            | Self::Range { fixture, .. } => fixture,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
