//! MCP server for the roadmap navigator
//!
//! Exposes roadmap generation, step updates and catalog lookups as Model
//! Context Protocol tools over stdio.

use anyhow::Result;
use log::{debug, error, info};
use navigator_core::Navigator;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    GenerateRoadmap, Id, ListTemplates, MatchProfile, McpResult, UpdateStepStatus, UserId,
};

/// MCP server for the navigator
#[derive(Clone)]
pub struct NavigatorMcpServer {
    navigator: Navigator,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl NavigatorMcpServer {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.navigator.clone())
    }

    #[tool(
        name = "generate_roadmap",
        description = "Generate a personal learning roadmap for a user from their profile: branch (e.g. 'cse', 'mechanical'), career_goal (e.g. 'python_backend_developer', 'data_engineer'), current_year (1-4) and current_semester (1-2). A branch-specific template is preferred, falling back to a template for any branch. If the user already has a roadmap it is returned unchanged; a user never gets a second roadmap."
    )]
    async fn generate_roadmap(&self, params: Parameters<GenerateRoadmap>) -> McpResult {
        self.handlers().generate_roadmap(params).await
    }

    #[tool(
        name = "get_roadmap",
        description = "Show a user's roadmap with progress: completion percentage, counts per status, the current step and every step with its status, notes and resources. Step IDs shown here are the ones update_step_status expects."
    )]
    async fn get_roadmap(&self, params: Parameters<UserId>) -> McpResult {
        self.handlers().get_roadmap(params).await
    }

    #[tool(
        name = "update_step_status",
        description = "Change the status of one step in a user's roadmap to 'not_started', 'in_progress' or 'completed', optionally replacing its notes. Only one step can be in progress: starting a step resets the previous one. Completing a step automatically starts the next step in order unless it is already completed."
    )]
    async fn update_step_status(&self, params: Parameters<UpdateStepStatus>) -> McpResult {
        self.handlers().update_step_status(params).await
    }

    #[tool(
        name = "list_templates",
        description = "List roadmap templates in the catalog with their career goal, branch and number of steps. Use include_inactive=true to also list retired templates."
    )]
    async fn list_templates(&self, params: Parameters<ListTemplates>) -> McpResult {
        self.handlers().list_templates(params).await
    }

    #[tool(
        name = "show_template",
        description = "Show a roadmap template by ID with all of its ordered steps, durations and resources."
    )]
    async fn show_template(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_template(params).await
    }

    #[tool(
        name = "match_template",
        description = "Preview which template a profile (branch, career_goal, current_year) would be matched to, without creating anything. Fails with invalid params when no template applies, as generate_roadmap does."
    )]
    async fn match_template(&self, params: Parameters<MatchProfile>) -> McpResult {
        self.handlers().match_template(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for NavigatorMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "navigator".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"Navigator turns a student's profile into a personal, ordered learning roadmap and tracks progress through it.

## Core Concepts
- **Templates**: published roadmaps for a career goal, optionally specific to one engineering branch and a range of study years
- **Roadmap**: a user's personal copy of one template; each user has at most one
- **Steps**: each roadmap step is 'not_started', 'in_progress' or 'completed'; at most one step is in progress

## Workflow
1. `match_template` to preview which template fits a profile
2. `generate_roadmap` to create the user's roadmap (safe to repeat)
3. `get_roadmap` to see progress and step IDs
4. `update_step_status` as the user works; completing a step starts the next one"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: NavigatorMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting navigator MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
