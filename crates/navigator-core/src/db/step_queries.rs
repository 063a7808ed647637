//! Step status updates.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension, TransactionBehavior};

use super::{parse_column, parse_optional_column};
use crate::{
    error::{DatabaseResultExt, NavigatorError, Result},
    models::{RoadmapStep, StatusChange, StepStatus},
    transitions::{plan_transition, StepAction, StepSnapshot},
};

const SELECT_ROADMAP_ID_SQL: &str = "SELECT id FROM user_roadmaps WHERE user_id = ?1";
const SELECT_SNAPSHOTS_SQL: &str = "SELECT rs.step_id, ts.step_order, rs.status, rs.completed_at FROM roadmap_steps rs JOIN template_steps ts ON ts.id = rs.step_id WHERE rs.roadmap_id = ?1 ORDER BY ts.step_order";
const UPDATE_STEP_STATUS_SQL: &str =
    "UPDATE roadmap_steps SET status = ?1, completed_at = ?2 WHERE roadmap_id = ?3 AND step_id = ?4";
const UPDATE_STEP_NOTES_SQL: &str =
    "UPDATE roadmap_steps SET notes = ?1 WHERE roadmap_id = ?2 AND step_id = ?3";
const SELECT_ROADMAP_STEP_SQL: &str = "SELECT rs.id, rs.roadmap_id, rs.step_id, rs.status, rs.notes, rs.completed_at, ts.id, ts.template_id, ts.title, ts.description, ts.step_order, ts.estimated_duration, ts.resources FROM roadmap_steps rs JOIN template_steps ts ON ts.id = rs.step_id WHERE rs.roadmap_id = ?1 AND rs.step_id = ?2";

impl super::Database {
    /// Moves one step of a user's roadmap to a new status.
    ///
    /// The transition is planned by [`plan_transition`] and its actions are
    /// executed in order within one transaction, so other readers observe
    /// either the previous state or the complete new one. Returns the
    /// updated step instance.
    pub fn update_step_status(&mut self, change: &StatusChange) -> Result<RoadmapStep> {
        let not_found = || NavigatorError::StepNotFound {
            user_id: change.user_id,
            step_id: change.step_id,
        };

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let roadmap_id: i64 = tx
            .query_row(SELECT_ROADMAP_ID_SQL, params![change.user_id as i64], |row| {
                row.get(0)
            })
            .optional()
            .db_context("Failed to query roadmap")?
            .ok_or_else(not_found)?;

        let snapshots = {
            let mut stmt = tx
                .prepare(SELECT_SNAPSHOTS_SQL)
                .db_context("Failed to prepare step snapshot query")?;
            let rows = stmt
                .query_map(params![roadmap_id], |row| {
                    Ok(StepSnapshot {
                        step_id: row.get::<_, i64>(0)? as u64,
                        order: row.get::<_, i64>(1)? as u32,
                        status: parse_column::<StepStatus>(row, 2)?,
                        completed_at: parse_optional_column::<Timestamp>(row, 3)?,
                    })
                })
                .db_context("Failed to query step snapshots")?;
            let snapshots = rows
                .collect::<rusqlite::Result<Vec<_>>>()
                .db_context("Failed to collect step snapshots")?;
            snapshots
        };

        let actions = plan_transition(
            &snapshots,
            change.step_id,
            change.status,
            change.notes.as_deref(),
            Timestamp::now(),
        )
        .ok_or_else(not_found)?;

        for action in &actions {
            debug!("Roadmap {roadmap_id}: {action:?}");
            let step_id = action.step_id() as i64;
            if let Some((status, completed_at)) = action.effect() {
                tx.execute(
                    UPDATE_STEP_STATUS_SQL,
                    params![
                        status.as_str(),
                        completed_at.map(|t| t.to_string()),
                        roadmap_id,
                        step_id
                    ],
                )
                .db_context("Failed to update step status")?;
            } else if let StepAction::Annotate { notes, .. } = action {
                tx.execute(UPDATE_STEP_NOTES_SQL, params![notes, roadmap_id, step_id])
                    .db_context("Failed to update step notes")?;
            }
        }

        let step = tx
            .query_row(
                SELECT_ROADMAP_STEP_SQL,
                params![roadmap_id, change.step_id as i64],
                Self::build_roadmap_step_from_row,
            )
            .db_context("Failed to reload step")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(step)
    }
}
