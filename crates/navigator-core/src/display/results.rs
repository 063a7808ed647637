//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{GenerateOutcome, ImportReport, RoadmapStep};

/// Outcome of a roadmap generation request.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use navigator_core::{
///     display::GenerateResult,
///     models::{GenerateOutcome, Roadmap},
/// };
///
/// let roadmap = Roadmap {
///     id: 4,
///     user_id: 12,
///     template_id: 1,
///     created_at: Timestamp::now(),
///     steps: vec![],
/// };
/// let result = GenerateResult(GenerateOutcome { roadmap, created: false });
/// assert!(result.to_string().contains("already has roadmap 4"));
/// ```
pub struct GenerateResult(pub GenerateOutcome);

impl fmt::Display for GenerateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roadmap = &self.0.roadmap;
        if self.0.created {
            writeln!(
                f,
                "Generated roadmap {} for user {} with {} steps",
                roadmap.id,
                roadmap.user_id,
                roadmap.steps.len()
            )?;
        } else {
            writeln!(
                f,
                "User {} already has roadmap {}; it was left unchanged",
                roadmap.user_id, roadmap.id
            )?;
        }
        writeln!(f)?;
        write!(f, "{roadmap}")
    }
}

/// The step instance returned by a status update.
pub struct StatusUpdateResult(pub RoadmapStep);

impl fmt::Display for StatusUpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Step {} is now {}",
            self.0.step_id,
            self.0.status.with_icon()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.0)
    }
}

/// Outcome of a catalog import.
pub struct ImportResult(pub ImportReport);

impl fmt::Display for ImportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = &self.0;
        writeln!(
            f,
            "Imported {} template(s), skipped {} existing",
            report.inserted.len(),
            report.skipped.len()
        )?;
        if !report.inserted.is_empty() {
            writeln!(f, "\n## Inserted\n")?;
            for name in &report.inserted {
                writeln!(f, "- {name}")?;
            }
        }
        if !report.skipped.is_empty() {
            writeln!(f, "\n## Skipped\n")?;
            for name in &report.skipped {
                writeln!(f, "- {name}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{Roadmap, StepStatus, TemplateStep};

    #[test]
    fn test_generate_result_created() {
        let roadmap = Roadmap {
            id: 1,
            user_id: 7,
            template_id: 2,
            created_at: Timestamp::now(),
            steps: vec![],
        };
        let output = GenerateResult(GenerateOutcome {
            roadmap,
            created: true,
        })
        .to_string();
        assert!(output.starts_with("Generated roadmap 1 for user 7 with 0 steps"));
    }

    #[test]
    fn test_status_update_result() {
        let step = RoadmapStep {
            id: 1,
            roadmap_id: 1,
            step_id: 21,
            status: StepStatus::Completed,
            notes: None,
            completed_at: Some(Timestamp::now()),
            step: TemplateStep {
                id: 21,
                template_id: 1,
                title: "Learn Git".to_string(),
                description: None,
                order: 2,
                estimated_duration: None,
                resources: vec![],
            },
        };
        let output = StatusUpdateResult(step).to_string();
        assert!(output.starts_with("Step 21 is now ✓ Completed"));
        assert!(output.contains("- Completed:"));
    }

    #[test]
    fn test_import_result() {
        let output = ImportResult(ImportReport {
            inserted: vec!["A".to_string()],
            skipped: vec!["B".to_string(), "C".to_string()],
        })
        .to_string();
        assert!(output.starts_with("Imported 1 template(s), skipped 2 existing"));
        assert!(output.contains("## Skipped"));
        assert!(output.contains("- C"));
    }
}
