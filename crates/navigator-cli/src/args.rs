use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CatalogCommands, RoadmapCommands, StepCommands};

/// Career roadmap navigator
///
/// Matches a student profile to a learning-path template, generates the
/// student's personal roadmap and tracks progress step by step. Runs either
/// as a command-line tool or as an MCP (Model Context Protocol) server.
#[derive(Parser)]
#[command(version, about, name = "nav")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/navigator/navigator.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands; without one, the active templates are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate and inspect user roadmaps
    #[command(alias = "r")]
    Roadmap {
        #[command(subcommand)]
        command: RoadmapCommands,
    },
    /// Change the status of roadmap steps
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Load and browse roadmap templates
    #[command(alias = "c")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Start the MCP server
    Serve,
}
