//! Roadmap generation and retrieval.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use super::{is_constraint_violation, parse_column, parse_optional_column};
use crate::{
    error::{DatabaseResultExt, NavigatorError, Result},
    matcher,
    models::{GenerateOutcome, Profile, Roadmap, RoadmapStep, StepStatus},
};

const SELECT_ROADMAP_SQL: &str =
    "SELECT id, user_id, template_id, created_at FROM user_roadmaps WHERE user_id = ?1";
const INSERT_ROADMAP_SQL: &str =
    "INSERT INTO user_roadmaps (user_id, template_id, created_at) VALUES (?1, ?2, ?3)";
const INSERT_ROADMAP_STEPS_SQL: &str = "INSERT INTO roadmap_steps (roadmap_id, step_id, status) SELECT ?1, id, 'not_started' FROM template_steps WHERE template_id = ?2 ORDER BY step_order";
const SELECT_ROADMAP_STEPS_SQL: &str = "SELECT rs.id, rs.roadmap_id, rs.step_id, rs.status, rs.notes, rs.completed_at, ts.id, ts.template_id, ts.title, ts.description, ts.step_order, ts.estimated_duration, ts.resources FROM roadmap_steps rs JOIN template_steps ts ON ts.id = rs.step_id WHERE rs.roadmap_id = ?1 ORDER BY ts.step_order";

impl super::Database {
    /// Helper function to construct a RoadmapStep (joined with its template
    /// step) from a row selected with `SELECT_ROADMAP_STEPS_SQL`.
    pub(crate) fn build_roadmap_step_from_row(row: &rusqlite::Row) -> rusqlite::Result<RoadmapStep> {
        Ok(RoadmapStep {
            id: row.get::<_, i64>(0)? as u64,
            roadmap_id: row.get::<_, i64>(1)? as u64,
            step_id: row.get::<_, i64>(2)? as u64,
            status: parse_column::<StepStatus>(row, 3)?,
            notes: row.get(4)?,
            completed_at: parse_optional_column::<Timestamp>(row, 5)?,
            step: Self::build_template_step_from_row(row, 6)?,
        })
    }

    /// Loads the step instances of a roadmap ordered by template step order.
    pub(crate) fn load_roadmap_steps(conn: &Connection, roadmap_id: u64) -> Result<Vec<RoadmapStep>> {
        let mut stmt = conn
            .prepare(SELECT_ROADMAP_STEPS_SQL)
            .db_context("Failed to prepare roadmap steps query")?;

        let steps = stmt
            .query_map(params![roadmap_id as i64], Self::build_roadmap_step_from_row)
            .db_context("Failed to query roadmap steps")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to collect roadmap steps")?;

        Ok(steps)
    }

    /// Loads a user's roadmap with its step instances.
    pub(crate) fn load_roadmap(conn: &Connection, user_id: u64) -> Result<Option<Roadmap>> {
        let roadmap = conn
            .query_row(SELECT_ROADMAP_SQL, params![user_id as i64], |row| {
                Ok(Roadmap {
                    id: row.get::<_, i64>(0)? as u64,
                    user_id: row.get::<_, i64>(1)? as u64,
                    template_id: row.get::<_, i64>(2)? as u64,
                    created_at: parse_column::<Timestamp>(row, 3)?,
                    steps: Vec::new(),
                })
            })
            .optional()
            .db_context("Failed to query roadmap")?;

        match roadmap {
            Some(mut roadmap) => {
                roadmap.steps = Self::load_roadmap_steps(conn, roadmap.id)?;
                Ok(Some(roadmap))
            }
            None => Ok(None),
        }
    }

    /// Retrieves a user's roadmap.
    pub fn get_roadmap(&self, user_id: u64) -> Result<Option<Roadmap>> {
        Self::load_roadmap(&self.connection, user_id)
    }

    /// Generates the user's roadmap, or returns the existing one untouched.
    ///
    /// The roadmap and all of its step instances are written in a single
    /// transaction. When no template matches, nothing is written and
    /// `NoMatchingTemplate` is returned.
    pub fn generate_roadmap(&mut self, user_id: u64, profile: &Profile) -> Result<GenerateOutcome> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        if let Some(roadmap) = Self::load_roadmap(&tx, user_id)? {
            debug!("User {user_id} already has roadmap {}", roadmap.id);
            return Ok(GenerateOutcome {
                roadmap,
                created: false,
            });
        }

        let candidates = Self::matching_candidates(&tx, profile.career_goal)?;
        let template = matcher::find_matching_template(
            &candidates,
            profile.branch,
            profile.career_goal,
            profile.current_year,
        )
        .ok_or(NavigatorError::NoMatchingTemplate {
            branch: profile.branch,
            career_goal: profile.career_goal,
            current_year: profile.current_year,
        })?;

        let inserted = tx.execute(
            INSERT_ROADMAP_SQL,
            params![user_id as i64, template.id as i64, Timestamp::now().to_string()],
        );
        match inserted {
            Ok(_) => {}
            Err(e) if is_constraint_violation(&e) => {
                // Another writer created the roadmap first
                drop(tx);
                debug!("Roadmap for user {user_id} was created concurrently");
                return Self::load_roadmap(&self.connection, user_id)?
                    .map(|roadmap| GenerateOutcome {
                        roadmap,
                        created: false,
                    })
                    .ok_or_else(|| NavigatorError::database("Failed to insert roadmap").with_source(e));
            }
            Err(e) => return Err(NavigatorError::database("Failed to insert roadmap").with_source(e)),
        }
        let roadmap_id = tx.last_insert_rowid();

        tx.execute(INSERT_ROADMAP_STEPS_SQL, params![roadmap_id, template.id as i64])
            .db_context("Failed to insert roadmap steps")?;

        let roadmap = Self::load_roadmap(&tx, user_id)?
            .ok_or(NavigatorError::RoadmapNotFound { user_id })?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!(
            "Generated roadmap {} for user {user_id} from template {} with {} steps",
            roadmap.id,
            roadmap.template_id,
            roadmap.steps.len()
        );
        Ok(GenerateOutcome {
            roadmap,
            created: true,
        })
    }
}
