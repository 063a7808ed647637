//! SQLite persistence for the template catalog and user roadmaps.
//!
//! The uniqueness rules the engine depends on (one roadmap per user, one
//! in-progress step per roadmap, `completed_at` present only for completed
//! steps) are enforced by the schema itself, so they hold even when two
//! processes write to the same file.

use std::{fmt::Display, path::Path, str::FromStr, time::Duration};

use rusqlite::{types::Type, Connection, ErrorCode, Row};

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod roadmap_queries;
pub mod step_queries;
pub mod template_queries;

/// How long a writer waits for a competing transaction before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Whether the error is a UNIQUE/CHECK/FOREIGN KEY violation.
pub(crate) fn is_constraint_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

/// Reads a text column and parses it, reporting parse failures as column
/// conversion errors.
pub(crate) fn parse_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let text: String = row.get(idx)?;
    text.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("Invalid value '{text}': {e}").into(),
        )
    })
}

/// Nullable variant of [`parse_column`].
pub(crate) fn parse_optional_column<T>(row: &Row, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match row.get::<_, Option<String>>(idx)? {
        Some(_) => parse_column(row, idx).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::NamedTempFile;

    use super::*;
    use crate::{
        catalog::Catalog,
        models::{Branch, CareerGoal, Profile},
    };

    fn seeded_roadmap() -> (NamedTempFile, Database, u64) {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        let mut db = Database::new(temp_file.path()).expect("Failed to create test database");
        db.import_catalog(&Catalog::bundled().expect("bundled catalog"))
            .expect("import");
        let profile = Profile {
            branch: Branch::Cse,
            career_goal: CareerGoal::PythonBackendDeveloper,
            current_year: 1,
            current_semester: 1,
        };
        let roadmap = db.generate_roadmap(1, &profile).expect("generate").roadmap;
        (temp_file, db, roadmap.id)
    }

    #[test]
    fn test_schema_rejects_second_active_step() {
        let (_temp_file, db, roadmap_id) = seeded_roadmap();
        let activate = "UPDATE roadmap_steps SET status = 'in_progress' WHERE roadmap_id = ?1 AND id = (SELECT id FROM roadmap_steps WHERE roadmap_id = ?1 ORDER BY id LIMIT 1 OFFSET ?2)";

        db.connection
            .execute(activate, rusqlite::params![roadmap_id as i64, 0])
            .expect("first active step");
        let err = db
            .connection
            .execute(activate, rusqlite::params![roadmap_id as i64, 1])
            .unwrap_err();
        assert!(is_constraint_violation(&err));
    }

    #[test]
    fn test_schema_ties_completed_at_to_status() {
        let (_temp_file, db, roadmap_id) = seeded_roadmap();

        let err = db
            .connection
            .execute(
                "UPDATE roadmap_steps SET status = 'completed' WHERE roadmap_id = ?1",
                rusqlite::params![roadmap_id as i64],
            )
            .unwrap_err();
        assert!(is_constraint_violation(&err));

        let err = db
            .connection
            .execute(
                "UPDATE roadmap_steps SET completed_at = '2024-01-01T00:00:00Z' WHERE roadmap_id = ?1",
                rusqlite::params![roadmap_id as i64],
            )
            .unwrap_err();
        assert!(is_constraint_violation(&err));
    }

    #[test]
    fn test_schema_rejects_second_roadmap_for_user() {
        let (_temp_file, db, _roadmap_id) = seeded_roadmap();

        let err = db
            .connection
            .execute(
                "INSERT INTO user_roadmaps (user_id, template_id, created_at) VALUES (1, 1, '2024-01-01T00:00:00Z')",
                [],
            )
            .unwrap_err();
        assert!(is_constraint_violation(&err));
    }
}
