//! Parameter structures for navigator operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. JSON schema generation for the
//! MCP tools is enabled with the `schema` feature.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Enumerated values (branch, career goal, status) travel as strings and are
//! parsed into typed models with `TryFrom`, so every interface reports the
//! same `InvalidInput` errors.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{NavigatorError, Result},
    models::{Branch, CareerGoal, Profile},
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for operations scoped to one user's roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UserId {
    /// The ID of the user owning the roadmap
    pub user_id: u64,
}

/// Parameters for generating a user's roadmap from their profile snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateRoadmap {
    /// The ID of the user the roadmap is generated for
    pub user_id: u64,
    /// Engineering branch, e.g. "cse" or "Mechanical"
    pub branch: String,
    /// Career goal, e.g. "python_backend_developer" or "Data Engineer"
    pub career_goal: String,
    /// Current study year (1-4)
    pub current_year: u8,
    /// Current semester (1-2)
    pub current_semester: u8,
}

impl TryFrom<&GenerateRoadmap> for Profile {
    type Error = NavigatorError;

    fn try_from(params: &GenerateRoadmap) -> Result<Self> {
        Ok(Profile {
            branch: parse_branch(&params.branch)?,
            career_goal: parse_career_goal(&params.career_goal)?,
            current_year: params.current_year,
            current_semester: params.current_semester,
        })
    }
}

/// Parameters for previewing which template a profile would match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MatchProfile {
    /// Engineering branch, e.g. "cse" or "Mechanical"
    pub branch: String,
    /// Career goal, e.g. "python_backend_developer" or "Data Engineer"
    pub career_goal: String,
    /// Current study year (1-4)
    pub current_year: u8,
}

impl MatchProfile {
    /// Parse the branch and career goal strings.
    pub fn parse(&self) -> Result<(Branch, CareerGoal)> {
        Ok((
            parse_branch(&self.branch)?,
            parse_career_goal(&self.career_goal)?,
        ))
    }
}

/// Parameters for changing the status of one roadmap step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateStepStatus {
    /// The ID of the user owning the roadmap
    pub user_id: u64,
    /// The template step ID (as listed in the roadmap), not the instance ID
    pub step_id: u64,
    /// New status: 'not_started', 'in_progress' or 'completed'
    pub status: String,
    /// Optional notes; replaces existing notes when provided
    pub notes: Option<String>,
}

/// Parameters for listing catalog templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTemplates {
    /// Whether to include inactive templates
    #[serde(default)]
    pub include_inactive: bool,
}

fn parse_branch(value: &str) -> Result<Branch> {
    value.parse::<Branch>().map_err(|reason| {
        let allowed: Vec<&str> = Branch::ALL.iter().map(Branch::as_str).collect();
        NavigatorError::invalid_input("branch")
            .with_reason(format!("{reason}. Must be one of: {}", allowed.join(", ")))
    })
}

fn parse_career_goal(value: &str) -> Result<CareerGoal> {
    value.parse::<CareerGoal>().map_err(|reason| {
        let allowed: Vec<&str> = CareerGoal::ALL.iter().map(CareerGoal::as_str).collect();
        NavigatorError::invalid_input("career_goal")
            .with_reason(format!("{reason}. Must be one of: {}", allowed.join(", ")))
    })
}
