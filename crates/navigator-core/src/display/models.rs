//! Display implementations for domain models.
//!
//! Kept apart from the model definitions; every implementation produces
//! markdown.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Branch, CareerGoal, CurrentStep, Roadmap, RoadmapStep, RoadmapSummary, StepStatus, Template,
    TemplateStep,
};

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for CareerGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Human readable year window, e.g. "years 1-4" or "from year 2".
fn year_window(template: &Template) -> Option<String> {
    match (template.start_year, template.end_year) {
        (Some(start), Some(end)) if start == end => Some(format!("year {start}")),
        (Some(start), Some(end)) => Some(format!("years {start}-{end}")),
        (Some(start), None) => Some(format!("from year {start}")),
        (None, Some(end)) => Some(format!("up to year {end}")),
        (None, None) => None,
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Career goal: {}", self.career_goal)?;
        match self.branch {
            Some(branch) => writeln!(f, "- Branch: {branch}")?,
            None => writeln!(f, "- Branch: any")?,
        }
        if let Some(window) = year_window(self) {
            writeln!(f, "- Applies to: {window}")?;
        }
        if !self.is_active {
            writeln!(f, "- Inactive")?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.steps.is_empty() {
            writeln!(f, "\nNo steps in this template.")?;
        } else {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            for step in &self.steps {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for TemplateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "### {}. {}", self.order, self.title)?;
        if let Some(duration) = &self.estimated_duration {
            write!(f, " ({duration})")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        if !self.resources.is_empty() {
            writeln!(f, "#### Resources")?;
            writeln!(f)?;
            for resource in &self.resources {
                writeln!(f, "- {resource}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for RoadmapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.step.order,
            self.step.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Step ID: {}", self.step_id)?;
        if let Some(duration) = &self.step.estimated_duration {
            writeln!(f, "- Estimated duration: {duration}")?;
        }
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed_at))?;
        }
        writeln!(f)?;

        if let Some(desc) = &self.step.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f, "#### Notes")?;
            writeln!(f)?;
            writeln!(f, "{notes}")?;
            writeln!(f)?;
        }

        if !self.step.resources.is_empty() {
            writeln!(f, "#### Resources")?;
            writeln!(f)?;
            for resource in &self.step.resources {
                writeln!(f, "- {resource}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Roadmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Roadmap {} (user {})", self.id, self.user_id)?;
        writeln!(f)?;
        writeln!(f, "- Template: {}", self.template_id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if self.steps.is_empty() {
            writeln!(f, "\nNo steps in this roadmap.")?;
        } else {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            for step in &self.steps {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for CurrentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} (step ID {})", self.order, self.title, self.step_id)
    }
}

impl fmt::Display for RoadmapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roadmap = &self.roadmap;
        writeln!(f, "# Roadmap {} (user {})", roadmap.id, roadmap.user_id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Progress: {:.2}% ({}/{} completed)",
            self.completion_percentage, self.completed_steps, self.total_steps
        )?;
        writeln!(
            f,
            "- In progress: {}, not started: {}",
            self.in_progress_steps, self.not_started_steps
        )?;
        match &self.current_step {
            Some(current) => writeln!(f, "- Current step: {current}")?,
            None if self.total_steps > 0 => writeln!(f, "- All steps completed")?,
            None => {}
        }
        writeln!(f, "- Created: {}", LocalDateTime(&roadmap.created_at))?;

        if roadmap.steps.is_empty() {
            writeln!(f, "\nNo steps in this roadmap.")?;
        } else {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            for step in &roadmap.steps {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::progress;

    fn template_step(order: u32, title: &str) -> TemplateStep {
        TemplateStep {
            id: 10 + u64::from(order),
            template_id: 1,
            title: title.to_string(),
            description: Some(format!("About {title}")),
            order,
            estimated_duration: Some("1 week".to_string()),
            resources: vec!["https://example.com/guide".to_string()],
        }
    }

    fn roadmap_step(order: u32, title: &str, status: StepStatus) -> RoadmapStep {
        RoadmapStep {
            id: u64::from(order),
            roadmap_id: 3,
            step_id: 10 + u64::from(order),
            status,
            notes: None,
            completed_at: (status == StepStatus::Completed).then(Timestamp::now),
            step: template_step(order, title),
        }
    }

    #[test]
    fn test_enum_display() {
        assert_eq!(StepStatus::InProgress.to_string(), "in_progress");
        assert_eq!(Branch::Eee.to_string(), "EEE");
        assert_eq!(CareerGoal::DevopsEngineer.to_string(), "DevOps Engineer");
    }

    #[test]
    fn test_template_display() {
        let template = Template {
            id: 2,
            name: "Data Engineer - Generic".to_string(),
            description: None,
            branch: None,
            career_goal: CareerGoal::DataEngineer,
            start_year: Some(1),
            end_year: Some(4),
            is_active: true,
            steps: vec![template_step(1, "Learn SQL")],
        };

        let output = template.to_string();
        assert!(output.contains("# 2. Data Engineer - Generic"));
        assert!(output.contains("- Career goal: Data Engineer"));
        assert!(output.contains("- Branch: any"));
        assert!(output.contains("- Applies to: years 1-4"));
        assert!(output.contains("### 1. Learn SQL (1 week)"));
        assert!(output.contains("- https://example.com/guide"));
    }

    #[test]
    fn test_roadmap_step_display_shows_notes() {
        let mut step = roadmap_step(4, "Docker", StepStatus::InProgress);
        step.notes = Some("Compose file works".to_string());

        let output = step.to_string();
        assert!(output.contains("### 4. Docker (➤ In Progress)"));
        assert!(output.contains("- Step ID: 14"));
        assert!(output.contains("#### Notes"));
        assert!(output.contains("Compose file works"));
        assert!(!output.contains("- Completed:"));
    }

    #[test]
    fn test_summary_display() {
        let roadmap = Roadmap {
            id: 3,
            user_id: 8,
            template_id: 1,
            created_at: Timestamp::now(),
            steps: vec![
                roadmap_step(1, "Python", StepStatus::Completed),
                roadmap_step(2, "Git", StepStatus::InProgress),
                roadmap_step(3, "SQL", StepStatus::NotStarted),
            ],
        };

        let output = progress::summarize(roadmap).to_string();
        assert!(output.contains("# Roadmap 3 (user 8)"));
        assert!(output.contains("- Progress: 33.33% (1/3 completed)"));
        assert!(output.contains("- Current step: 2. Git (step ID 12)"));
        assert!(output.contains("### 1. Python (✓ Completed)"));
        assert!(output.contains("### 3. SQL (○ Not Started)"));
    }

    #[test]
    fn test_summary_display_when_finished() {
        let roadmap = Roadmap {
            id: 1,
            user_id: 1,
            template_id: 1,
            created_at: Timestamp::now(),
            steps: vec![roadmap_step(1, "Python", StepStatus::Completed)],
        };

        let output = progress::summarize(roadmap).to_string();
        assert!(output.contains("- Progress: 100.00% (1/1 completed)"));
        assert!(output.contains("- All steps completed"));
    }
}
