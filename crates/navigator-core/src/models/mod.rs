//! Data models for templates, roadmaps and progress.
//!
//! Templates (and their steps) form the read-only catalog. A [`Roadmap`] is a
//! user's personal instantiation of exactly one template; it owns one
//! [`RoadmapStep`] per template step, created together with the roadmap and
//! never added or removed afterwards. Display implementations for these
//! models are located in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use navigator_core::models::{Branch, CareerGoal, Profile, StepStatus};
//!
//! let profile = Profile {
//!     branch: "CSE".parse::<Branch>().unwrap(),
//!     career_goal: "Data Engineer".parse::<CareerGoal>().unwrap(),
//!     current_year: 2,
//!     current_semester: 1,
//! };
//! assert_eq!(profile.career_goal, CareerGoal::DataEngineer);
//! assert_eq!(StepStatus::InProgress.as_str(), "in_progress");
//! ```

pub mod profile;
pub mod requests;
pub mod roadmap;
pub mod status;
pub mod summary;
pub mod template;


pub use profile::{Branch, CareerGoal, Profile};
pub use requests::StatusChange;
pub use roadmap::{GenerateOutcome, Roadmap, RoadmapStep};
pub use status::StepStatus;
pub use summary::{CurrentStep, ImportReport, RoadmapSummary};
pub use template::{Template, TemplateStep};
