//! Progress summary types.

use serde::{Deserialize, Serialize};

use super::Roadmap;

/// The step a student should look at next.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentStep {
    pub step_id: u64,
    pub title: String,
    pub order: u32,
}

/// Roadmap with progress statistics derived from its step instances.
///
/// Built fresh by [`crate::progress::summarize`] on every read; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapSummary {
    pub roadmap: Roadmap,
    pub total_steps: u32,
    pub completed_steps: u32,
    pub in_progress_steps: u32,
    pub not_started_steps: u32,
    /// `completed / total * 100` rounded to two decimals; `0.0` for an empty roadmap
    pub completion_percentage: f64,
    pub current_step: Option<CurrentStep>,
}

/// Outcome of loading a catalog into the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportReport {
    /// Names of templates that were inserted
    pub inserted: Vec<String>,
    /// Names of templates that already existed and were left untouched
    pub skipped: Vec<String>,
}
