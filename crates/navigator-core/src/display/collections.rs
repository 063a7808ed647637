//! Collection wrapper types for displaying groups of templates.

use std::fmt;

use crate::models::Template;

/// Compact listing of templates: one heading and a metadata line each.
///
/// ```rust
/// use navigator_core::display::Templates;
///
/// assert_eq!(Templates(vec![]).to_string(), "No templates found.\n");
/// ```
pub struct Templates(pub Vec<Template>);

impl Templates {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of templates in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the templates.
    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.0.iter()
    }
}

impl IntoIterator for Templates {
    type Item = Template;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No templates found.");
        }

        for template in &self.0 {
            writeln!(
                f,
                "## {} (ID: {}, {} steps)",
                template.name,
                template.id,
                template.steps.len()
            )?;
            writeln!(f)?;
            let branch = template
                .branch
                .map_or_else(|| "any branch".to_string(), |b| b.to_string());
            write!(f, "- **{}** for {branch}", template.career_goal)?;
            if !template.is_active {
                write!(f, " (inactive)")?;
            }
            writeln!(f)?;
            if let Some(desc) = &template.description {
                writeln!(f, "- {desc}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Branch, CareerGoal};

    #[test]
    fn test_templates_display() {
        let templates = Templates(vec![Template {
            id: 1,
            name: "Python Backend Developer - CSE".to_string(),
            description: None,
            branch: Some(Branch::Cse),
            career_goal: CareerGoal::PythonBackendDeveloper,
            start_year: Some(1),
            end_year: Some(4),
            is_active: false,
            steps: vec![],
        }]);

        let output = templates.to_string();
        assert!(output.contains("## Python Backend Developer - CSE (ID: 1, 0 steps)"));
        assert!(output.contains("- **Python Backend Developer** for CSE (inactive)"));
        assert_eq!(templates.len(), 1);
    }
}
