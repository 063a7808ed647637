//! User roadmap and step instance definitions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{StepStatus, TemplateStep};

/// A user's personal instantiation of one template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Roadmap {
    /// Unique identifier for the roadmap
    pub id: u64,

    /// Owner; at most one roadmap exists per user
    pub user_id: u64,

    /// Template the roadmap was generated from
    pub template_id: u64,

    /// Timestamp when the roadmap was generated (UTC)
    pub created_at: Timestamp,

    /// Step instances ordered by template step order
    #[serde(default)]
    pub steps: Vec<RoadmapStep>,
}

/// Per-user tracking record for one template step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapStep {
    /// Unique identifier of the instance
    pub id: u64,

    /// ID of the owning roadmap
    pub roadmap_id: u64,

    /// Template step this instance tracks
    pub step_id: u64,

    /// Current status of the step
    pub status: StepStatus,

    /// Free-form notes written by the student
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Present exactly when `status` is `Completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// The template step details (title, order, ...)
    pub step: TemplateStep,
}

impl RoadmapStep {
    /// Order of the underlying template step.
    pub fn order(&self) -> u32 {
        self.step.order
    }
}

/// Result of a generate call.
///
/// `created` is `false` when the user already owned a roadmap; that roadmap
/// is returned untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateOutcome {
    pub roadmap: Roadmap,
    pub created: bool,
}
