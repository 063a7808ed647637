//! Core library of the career roadmap navigator.
//!
//! The crate matches a student profile to a published template, turns that
//! template into the student's personal roadmap, tracks the status of every
//! roadmap step and reports progress.
//!
//! - [`matcher`]: tiered template selection (branch-specific first, then
//!   branch-agnostic)
//! - [`transitions`]: the step status state machine as a pure planner of
//!   named actions
//! - [`progress`]: counts, completion percentage and current step
//! - [`db`]: SQLite persistence, one transaction per mutation
//! - [`navigator`]: async facade used by the CLI and the MCP server
//! - [`display`]: markdown formatting of models and results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use navigator_core::{
//!     catalog::Catalog,
//!     params::{GenerateRoadmap, UpdateStepStatus, UserId},
//!     NavigatorBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let navigator = NavigatorBuilder::new()
//!     .with_database_path(Some("navigator.db"))
//!     .build()
//!     .await?;
//! navigator.import_catalog(Catalog::bundled()?).await?;
//!
//! let outcome = navigator
//!     .generate_roadmap(&GenerateRoadmap {
//!         user_id: 42,
//!         branch: "CSE".to_string(),
//!         career_goal: "Python Backend Developer".to_string(),
//!         current_year: 2,
//!         current_semester: 1,
//!     })
//!     .await?;
//!
//! let first = outcome.roadmap.steps[0].step_id;
//! navigator
//!     .update_step_status(&UpdateStepStatus {
//!         user_id: 42,
//!         step_id: first,
//!         status: "completed".to_string(),
//!         notes: None,
//!     })
//!     .await?;
//!
//! let summary = navigator
//!     .get_roadmap_with_progress(&UserId { user_id: 42 })
//!     .await?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod matcher;
pub mod models;
pub mod navigator;
pub mod params;
pub mod progress;
pub mod transitions;

// Re-export commonly used types
pub use catalog::Catalog;
pub use db::Database;
pub use display::{
    GenerateResult, ImportResult, LocalDateTime, StatusUpdateResult, Templates,
};
pub use error::{NavigatorError, Result};
pub use models::{
    Branch, CareerGoal, CurrentStep, GenerateOutcome, ImportReport, Profile, Roadmap,
    RoadmapStep, RoadmapSummary, StatusChange, StepStatus, Template, TemplateStep,
};
pub use navigator::{Navigator, NavigatorBuilder};
pub use params::{GenerateRoadmap, Id, ListTemplates, MatchProfile, UpdateStepStatus, UserId};
