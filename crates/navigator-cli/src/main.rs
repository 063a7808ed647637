//! `nav`: command line and MCP server for the career roadmap navigator.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, NavigatorMcpServer};
use navigator_core::{params::ListTemplates, NavigatorBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let navigator = NavigatorBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize navigator")?;

    info!("Navigator started with database {}", navigator.database_path().display());

    let cli = || Cli::new(navigator.clone(), TerminalRenderer::new(!no_color));

    match command {
        Some(Roadmap { command }) => cli().handle_roadmap_command(command).await,
        Some(Step { command }) => cli().handle_step_command(command).await,
        Some(Catalog { command }) => cli().handle_catalog_command(command).await,
        Some(Serve) => {
            info!("Starting navigator MCP server");
            run_stdio_server(NavigatorMcpServer::new(navigator.clone()))
                .await
                .context("MCP server failed")
        }
        None => cli().list_templates(&ListTemplates::default()).await,
    }
}
