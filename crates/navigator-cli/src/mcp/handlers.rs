//! MCP tool handlers implementation

use log::debug;
use navigator_core::{
    display::{GenerateResult, StatusUpdateResult, Templates},
    params as core, Navigator, NavigatorError,
};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types.
///
/// Deserializes transparently into the wrapped type and forwards its JSON
/// schema, so the core params need no rmcp-specific derives.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type UserId = McpParams<core::UserId>;
pub type GenerateRoadmap = McpParams<core::GenerateRoadmap>;
pub type UpdateStepStatus = McpParams<core::UpdateStepStatus>;
pub type ListTemplates = McpParams<core::ListTemplates>;
pub type MatchProfile = McpParams<core::MatchProfile>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    navigator: Navigator,
}

impl McpHandlers {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }

    pub async fn generate_roadmap(
        &self,
        Parameters(params): Parameters<GenerateRoadmap>,
    ) -> McpResult {
        debug!("generate_roadmap: {:?}", params);

        let outcome = self
            .navigator
            .generate_roadmap(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to generate roadmap", &e))?;

        text(GenerateResult(outcome).to_string())
    }

    pub async fn get_roadmap(&self, Parameters(params): Parameters<UserId>) -> McpResult {
        debug!("get_roadmap: {:?}", params);

        let summary = self
            .navigator
            .get_roadmap_with_progress(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load roadmap", &e))?;

        text(summary.to_string())
    }

    pub async fn update_step_status(
        &self,
        Parameters(params): Parameters<UpdateStepStatus>,
    ) -> McpResult {
        debug!("update_step_status: {:?}", params);

        let step = self
            .navigator
            .update_step_status(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update step", &e))?;

        text(StatusUpdateResult(step).to_string())
    }

    pub async fn list_templates(&self, Parameters(params): Parameters<ListTemplates>) -> McpResult {
        debug!("list_templates: {:?}", params);

        let templates = self
            .navigator
            .list_templates(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list templates", &e))?;

        text(Templates(templates).to_string())
    }

    pub async fn show_template(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_template: {:?}", params);

        let id = params.as_ref().id;
        let template = self
            .navigator
            .get_template(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load template", &e))?
            .ok_or_else(|| {
                to_mcp_error(
                    "Failed to load template",
                    &NavigatorError::TemplateNotFound { id },
                )
            })?;

        text(template.to_string())
    }

    pub async fn match_template(&self, Parameters(params): Parameters<MatchProfile>) -> McpResult {
        debug!("match_template: {:?}", params);

        let template = self
            .navigator
            .match_template(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to match template", &e))?;

        text(template.to_string())
    }
}
