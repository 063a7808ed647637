//! Catalog operations for the Navigator.

use super::Navigator;
use crate::{
    catalog::Catalog,
    error::{NavigatorError, Result},
    models::{ImportReport, Template},
    params::{Id, ListTemplates, MatchProfile},
};

impl Navigator {
    /// Loads a catalog into the store, skipping templates whose name is
    /// already present.
    pub async fn import_catalog(&self, catalog: Catalog) -> Result<ImportReport> {
        self.with_database(move |db| db.import_catalog(&catalog))
            .await
    }

    /// Lists templates with their steps.
    pub async fn list_templates(&self, params: &ListTemplates) -> Result<Vec<Template>> {
        let include_inactive = params.include_inactive;
        self.with_database(move |db| db.list_templates(include_inactive))
            .await
    }

    /// Retrieves a template with its steps.
    pub async fn get_template(&self, params: &Id) -> Result<Option<Template>> {
        let id = params.id;
        self.with_database(move |db| db.get_template(id)).await
    }

    /// Shows which template a profile would be matched to, without creating
    /// a roadmap.
    pub async fn find_matching_template(&self, params: &MatchProfile) -> Result<Option<Template>> {
        let (branch, career_goal) = params.parse()?;
        let current_year = params.current_year;
        self.with_database(move |db| db.find_matching_template(branch, career_goal, current_year))
            .await
    }

    /// Like [`Navigator::find_matching_template`], but a profile without a
    /// template fails with [`NavigatorError::NoMatchingTemplate`], the same
    /// error roadmap generation reports.
    pub async fn match_template(&self, params: &MatchProfile) -> Result<Template> {
        let (branch, career_goal) = params.parse()?;
        let current_year = params.current_year;
        self.find_matching_template(params)
            .await?
            .ok_or(NavigatorError::NoMatchingTemplate {
                branch,
                career_goal,
                current_year,
            })
    }
}
