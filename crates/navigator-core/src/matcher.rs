//! Tiered template matching.
//!
//! Selection is a ranking over a fixed, priority-ordered list of tiers. Each
//! tier is a plain predicate; the first tier with any hit wins and the lowest
//! template ID among its hits is returned, so duplicate catalog entries
//! resolve deterministically.

use log::debug;

use crate::models::{Branch, CareerGoal, Template};

/// Matching tiers in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Template targets exactly the student's branch
    Exact,
    /// Template is branch-agnostic (`branch` absent)
    BranchAgnostic,
}

impl MatchTier {
    /// Tiers in the order they are evaluated.
    pub const PRIORITY: [MatchTier; 2] = [MatchTier::Exact, MatchTier::BranchAgnostic];

    /// Whether `template` satisfies this tier for the given profile values.
    pub fn accepts(
        self,
        template: &Template,
        branch: Branch,
        career_goal: CareerGoal,
        current_year: u8,
    ) -> bool {
        let branch_ok = match self {
            MatchTier::Exact => template.branch == Some(branch),
            MatchTier::BranchAgnostic => template.branch.is_none(),
        };

        branch_ok
            && template.is_active
            && template.career_goal == career_goal
            && template.covers_year(current_year)
    }
}

/// Selects the template for a profile, or `None` when no tier matches.
pub fn find_matching_template(
    templates: &[Template],
    branch: Branch,
    career_goal: CareerGoal,
    current_year: u8,
) -> Option<&Template> {
    MatchTier::PRIORITY.iter().find_map(|&tier| {
        let hit = templates
            .iter()
            .filter(|t| tier.accepts(t, branch, career_goal, current_year))
            .min_by_key(|t| t.id);

        if let Some(template) = hit {
            debug!(
                "Matched template {} ('{}') on {:?} tier",
                template.id, template.name, tier
            );
        }
        hit
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(id: u64, branch: Option<Branch>, goal: CareerGoal) -> Template {
        Template {
            id,
            name: format!("Template {id}"),
            description: None,
            branch,
            career_goal: goal,
            start_year: Some(1),
            end_year: Some(4),
            is_active: true,
            steps: Vec::new(),
        }
    }

    #[test]
    fn test_exact_tier_wins_over_fallback() {
        let catalog = vec![
            template(1, None, CareerGoal::PythonBackendDeveloper),
            template(2, Some(Branch::Cse), CareerGoal::PythonBackendDeveloper),
        ];

        let hit = find_matching_template(&catalog, Branch::Cse, CareerGoal::PythonBackendDeveloper, 2)
            .expect("should match");
        assert_eq!(hit.id, 2);
    }

    #[test]
    fn test_fallback_tier_when_branch_has_no_template() {
        let catalog = vec![
            template(1, Some(Branch::Cse), CareerGoal::PythonBackendDeveloper),
            template(2, None, CareerGoal::PythonBackendDeveloper),
        ];

        let hit = find_matching_template(
            &catalog,
            Branch::Mechanical,
            CareerGoal::PythonBackendDeveloper,
            1,
        )
        .expect("should fall back");
        assert_eq!(hit.id, 2);
    }

    #[test]
    fn test_other_branch_template_never_matches() {
        let catalog = vec![template(1, Some(Branch::Cse), CareerGoal::DataEngineer)];
        assert!(find_matching_template(&catalog, Branch::Civil, CareerGoal::DataEngineer, 2).is_none());
    }

    #[test]
    fn test_career_goal_must_match() {
        let catalog = vec![template(1, None, CareerGoal::DataEngineer)];
        assert!(
            find_matching_template(&catalog, Branch::Cse, CareerGoal::CloudEngineer, 2).is_none()
        );
    }

    #[test]
    fn test_inactive_templates_are_ignored() {
        let mut inactive = template(1, Some(Branch::Cse), CareerGoal::DataEngineer);
        inactive.is_active = false;
        let catalog = vec![inactive, template(2, None, CareerGoal::DataEngineer)];

        let hit = find_matching_template(&catalog, Branch::Cse, CareerGoal::DataEngineer, 2)
            .expect("should fall back to active template");
        assert_eq!(hit.id, 2);
    }

    #[test]
    fn test_year_window_bounds_are_inclusive() {
        let mut windowed = template(1, Some(Branch::Ece), CareerGoal::CloudEngineer);
        windowed.start_year = Some(2);
        windowed.end_year = Some(3);
        let catalog = vec![windowed];

        let find = |year| {
            find_matching_template(&catalog, Branch::Ece, CareerGoal::CloudEngineer, year)
                .map(|t| t.id)
        };
        assert_eq!(find(1), None);
        assert_eq!(find(2), Some(1));
        assert_eq!(find(3), Some(1));
        assert_eq!(find(4), None);
    }

    #[test]
    fn test_absent_year_bounds_are_unbounded() {
        let mut open_start = template(1, None, CareerGoal::MobileDeveloper);
        open_start.start_year = None;
        open_start.end_year = Some(2);
        let mut open_end = template(2, None, CareerGoal::FrontendDeveloper);
        open_end.start_year = Some(3);
        open_end.end_year = None;
        let catalog = vec![open_start, open_end];

        assert!(find_matching_template(&catalog, Branch::Cse, CareerGoal::MobileDeveloper, 1).is_some());
        assert!(find_matching_template(&catalog, Branch::Cse, CareerGoal::MobileDeveloper, 3).is_none());
        assert!(find_matching_template(&catalog, Branch::Cse, CareerGoal::FrontendDeveloper, 4).is_some());
        assert!(find_matching_template(&catalog, Branch::Cse, CareerGoal::FrontendDeveloper, 2).is_none());
    }

    #[test]
    fn test_ties_resolve_to_lowest_id_regardless_of_input_order() {
        let catalog = vec![
            template(9, Some(Branch::Eee), CareerGoal::DevopsEngineer),
            template(4, Some(Branch::Eee), CareerGoal::DevopsEngineer),
            template(6, Some(Branch::Eee), CareerGoal::DevopsEngineer),
        ];

        let hit = find_matching_template(&catalog, Branch::Eee, CareerGoal::DevopsEngineer, 1)
            .expect("should match");
        assert_eq!(hit.id, 4);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(find_matching_template(&[], Branch::Cse, CareerGoal::DataEngineer, 1).is_none());
    }
}
