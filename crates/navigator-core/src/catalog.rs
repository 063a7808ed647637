//! Published template catalogs.
//!
//! The catalog is authored outside of this crate and loaded as a JSON
//! document. A default catalog is embedded from `assets/catalog.json`.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{NavigatorError, Result},
    models::{Branch, CareerGoal},
};

const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

/// A set of templates ready to be imported.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub templates: Vec<CatalogTemplate>,
}

/// Template definition as it appears in a catalog document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogTemplate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `null` applies to every branch
    #[serde(default)]
    pub branch: Option<Branch>,
    pub career_goal: CareerGoal,
    #[serde(default)]
    pub start_year: Option<u8>,
    #[serde(default)]
    pub end_year: Option<u8>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub steps: Vec<CatalogStep>,
}

/// Step definition as it appears in a catalog document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogStep {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub order: u32,
    #[serde(default)]
    pub estimated_duration: Option<String>,
    #[serde(default)]
    pub resources: Vec<String>,
}

fn default_active() -> bool {
    true
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Parses and validates a catalog document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads, parses and validates a catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| NavigatorError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks the structural rules the store relies on.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank template name or step title,
    /// duplicate template names, duplicate step orders within a template,
    /// a start year after the end year, or a resource containing a comma
    /// (resources are stored comma-separated).
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for template in &self.templates {
            if template.name.trim().is_empty() {
                return Err(NavigatorError::invalid_input("name")
                    .with_reason("Template name must not be empty"));
            }
            if !names.insert(template.name.as_str()) {
                return Err(NavigatorError::invalid_input("name").with_reason(format!(
                    "Template '{}' is defined more than once",
                    template.name
                )));
            }
            if let (Some(start), Some(end)) = (template.start_year, template.end_year) {
                if start > end {
                    return Err(NavigatorError::invalid_input("start_year").with_reason(format!(
                        "Template '{}' starts in year {start} but ends in year {end}",
                        template.name
                    )));
                }
            }

            let mut orders = HashSet::new();
            for step in &template.steps {
                if step.title.trim().is_empty() {
                    return Err(NavigatorError::invalid_input("title").with_reason(format!(
                        "Template '{}' has a step without a title",
                        template.name
                    )));
                }
                if !orders.insert(step.order) {
                    return Err(NavigatorError::invalid_input("order").with_reason(format!(
                        "Template '{}' uses order {} more than once",
                        template.name, step.order
                    )));
                }
                if let Some(resource) = step.resources.iter().find(|r| r.contains(',')) {
                    return Err(NavigatorError::invalid_input("resources").with_reason(format!(
                        "Resource '{resource}' must not contain a comma"
                    )));
                }
            }
        }
        Ok(())
    }
}
