//! Catalog import and template queries.

use jiff::Timestamp;
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use super::{parse_column, parse_optional_column};
use crate::{
    catalog::Catalog,
    error::{DatabaseResultExt, Result},
    matcher,
    models::{Branch, CareerGoal, ImportReport, Template, TemplateStep},
};

const TEMPLATE_COLUMNS: &str =
    "id, name, description, branch, career_goal, start_year, end_year, is_active";
const CHECK_TEMPLATE_NAME_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM roadmap_templates WHERE name = ?1)";
const INSERT_TEMPLATE_SQL: &str = "INSERT INTO roadmap_templates (name, description, branch, career_goal, start_year, end_year, is_active, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const INSERT_TEMPLATE_STEP_SQL: &str = "INSERT INTO template_steps (template_id, title, description, step_order, estimated_duration, resources) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TEMPLATE_STEPS_SQL: &str = "SELECT id, template_id, title, description, step_order, estimated_duration, resources FROM template_steps WHERE template_id = ?1 ORDER BY step_order";

impl super::Database {
    /// Helper function to construct a Template (without steps) from a row
    /// selected with [`TEMPLATE_COLUMNS`].
    fn build_template_from_row(row: &rusqlite::Row) -> rusqlite::Result<Template> {
        Ok(Template {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            description: row.get(2)?,
            branch: parse_optional_column::<Branch>(row, 3)?,
            career_goal: parse_column::<CareerGoal>(row, 4)?,
            start_year: row.get::<_, Option<i64>>(5)?.map(|y| y as u8),
            end_year: row.get::<_, Option<i64>>(6)?.map(|y| y as u8),
            is_active: row.get(7)?,
            steps: Vec::new(),
        })
    }

    /// Helper function to construct a TemplateStep from a database row
    pub(crate) fn build_template_step_from_row(
        row: &rusqlite::Row,
        offset: usize,
    ) -> rusqlite::Result<TemplateStep> {
        // Resources are stored comma-separated
        let resources = row
            .get::<_, Option<String>>(offset + 6)?
            .map(|s| s.split(',').map(String::from).collect())
            .unwrap_or_default();

        Ok(TemplateStep {
            id: row.get::<_, i64>(offset)? as u64,
            template_id: row.get::<_, i64>(offset + 1)? as u64,
            title: row.get(offset + 2)?,
            description: row.get(offset + 3)?,
            order: row.get::<_, i64>(offset + 4)? as u32,
            estimated_duration: row.get(offset + 5)?,
            resources,
        })
    }

    /// Loads the steps of a template ordered by `order`.
    fn load_template_steps(conn: &Connection, template_id: u64) -> Result<Vec<TemplateStep>> {
        let mut stmt = conn
            .prepare(SELECT_TEMPLATE_STEPS_SQL)
            .db_context("Failed to prepare template steps query")?;

        let steps = stmt
            .query_map(params![template_id as i64], |row| {
                Self::build_template_step_from_row(row, 0)
            })
            .db_context("Failed to query template steps")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect template steps")?;

        Ok(steps)
    }

    /// Runs a template query and attaches each template's steps.
    fn query_templates(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Template>> {
        let mut stmt = conn.prepare(sql).db_context("Failed to prepare template query")?;
        let mut templates = stmt
            .query_map(params, Self::build_template_from_row)
            .db_context("Failed to query templates")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect templates")?;

        for template in &mut templates {
            template.steps = Self::load_template_steps(conn, template.id)?;
        }
        Ok(templates)
    }

    /// Active templates for a career goal, the candidate set of the matcher.
    pub(crate) fn matching_candidates(
        conn: &Connection,
        career_goal: CareerGoal,
    ) -> Result<Vec<Template>> {
        let sql = format!(
            "SELECT {TEMPLATE_COLUMNS} FROM roadmap_templates WHERE career_goal = ?1 AND is_active = 1 ORDER BY id"
        );
        Self::query_templates(conn, &sql, params![career_goal.as_str()])
    }

    /// Selects the template a profile would be matched to, without creating
    /// anything.
    pub fn find_matching_template(
        &self,
        branch: Branch,
        career_goal: CareerGoal,
        current_year: u8,
    ) -> Result<Option<Template>> {
        let candidates = Self::matching_candidates(&self.connection, career_goal)?;
        Ok(
            matcher::find_matching_template(&candidates, branch, career_goal, current_year)
                .cloned(),
        )
    }

    /// Inserts every template of the catalog whose name is not stored yet.
    ///
    /// The whole import is one transaction; existing templates are never
    /// modified.
    pub fn import_catalog(&mut self, catalog: &Catalog) -> Result<ImportReport> {
        catalog.validate()?;

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();
        let mut report = ImportReport::default();

        for template in &catalog.templates {
            let exists: bool = tx
                .query_row(CHECK_TEMPLATE_NAME_SQL, params![template.name], |row| row.get(0))
                .db_context("Failed to check template existence")?;
            if exists {
                debug!("Skipping existing template '{}'", template.name);
                report.skipped.push(template.name.clone());
                continue;
            }

            tx.execute(
                INSERT_TEMPLATE_SQL,
                params![
                    template.name,
                    template.description,
                    template.branch.map(|b| b.as_str()),
                    template.career_goal.as_str(),
                    template.start_year,
                    template.end_year,
                    template.is_active,
                    &now_str
                ],
            )
            .db_context("Failed to insert template")?;
            let template_id = tx.last_insert_rowid();

            for step in &template.steps {
                let resources = if step.resources.is_empty() {
                    None
                } else {
                    Some(step.resources.join(","))
                };
                tx.execute(
                    INSERT_TEMPLATE_STEP_SQL,
                    params![
                        template_id,
                        step.title,
                        step.description,
                        step.order,
                        step.estimated_duration,
                        resources
                    ],
                )
                .db_context("Failed to insert template step")?;
            }

            report.inserted.push(template.name.clone());
        }

        tx.commit().db_context("Failed to commit transaction")?;

        info!(
            "Imported catalog: {} inserted, {} skipped",
            report.inserted.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Lists templates with their steps, ordered by ID.
    pub fn list_templates(&self, include_inactive: bool) -> Result<Vec<Template>> {
        let filter = if include_inactive {
            ""
        } else {
            " WHERE is_active = 1"
        };
        let sql = format!("SELECT {TEMPLATE_COLUMNS} FROM roadmap_templates{filter} ORDER BY id");
        Self::query_templates(&self.connection, &sql, [])
    }

    /// Retrieves a template with its steps by ID.
    pub fn get_template(&self, id: u64) -> Result<Option<Template>> {
        let sql = format!("SELECT {TEMPLATE_COLUMNS} FROM roadmap_templates WHERE id = ?1");
        let template = self
            .connection
            .query_row(&sql, params![id as i64], Self::build_template_from_row)
            .optional()
            .db_context("Failed to query template")?;

        match template {
            Some(mut template) => {
                template.steps = Self::load_template_steps(&self.connection, template.id)?;
                Ok(Some(template))
            }
            None => Ok(None),
        }
    }
}
