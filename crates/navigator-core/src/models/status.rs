//! Status enumeration for roadmap step instances.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of step statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Step has not been picked up yet
    #[default]
    NotStarted,

    /// Step is the one the student is working on
    InProgress,

    /// Step has been completed
    Completed,
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "not_started" => Ok(StepStatus::NotStarted),
            "in_progress" => Ok(StepStatus::InProgress),
            "completed" => Ok(StepStatus::Completed),
            _ => Err(format!("Invalid step status: {s}")),
        }
    }
}

impl StepStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::NotStarted => "not_started",
            StepStatus::InProgress => "in_progress",
            StepStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navigator_core::models::StepStatus;
    ///
    /// assert_eq!(StepStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(StepStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(StepStatus::NotStarted.with_icon(), "○ Not Started");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Completed => "✓ Completed",
            StepStatus::InProgress => "➤ In Progress",
            StepStatus::NotStarted => "○ Not Started",
        }
    }
}
