//! Catalog template definitions.

use serde::{Deserialize, Serialize};

use super::{Branch, CareerGoal};

/// A published roadmap template: an ordered list of steps for a
/// branch / career goal / year window combination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    /// Unique identifier for the template
    pub id: u64,

    /// Display name, unique within the catalog
    pub name: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Branch the template targets; `None` applies to every branch
    pub branch: Option<Branch>,

    /// Career goal the template leads to
    pub career_goal: CareerGoal,

    /// First study year the template applies to (inclusive, `None` = unbounded)
    pub start_year: Option<u8>,

    /// Last study year the template applies to (inclusive, `None` = unbounded)
    pub end_year: Option<u8>,

    /// Inactive templates are never matched
    pub is_active: bool,

    /// Steps ordered by `order` ascending (empty unless loaded)
    #[serde(default)]
    pub steps: Vec<TemplateStep>,
}

impl Template {
    /// Whether `year` falls inside the template's validity window.
    pub fn covers_year(&self, year: u8) -> bool {
        self.start_year.map_or(true, |start| start <= year)
            && self.end_year.map_or(true, |end| year <= end)
    }
}

/// One step of a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateStep {
    /// Unique identifier for the step
    pub id: u64,

    /// ID of the owning template
    pub template_id: u64,

    /// Brief title of the step
    pub title: String,

    /// Detailed description of what to learn
    pub description: Option<String>,

    /// Position within the template; strictly increasing, gaps allowed
    pub order: u32,

    /// Free-form estimate such as "2 weeks"
    pub estimated_duration: Option<String>,

    /// Links or titles of learning resources
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}
