//! Database schema initialization and versioning.

use log::debug;

use crate::error::{DatabaseResultExt, NavigatorError, Result};

/// Version written to `PRAGMA user_version` once the schema is in place.
pub const SCHEMA_VERSION: i64 = 1;

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Foreign keys are off by default in SQLite, per connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let version = self.schema_version()?;
        if version > SCHEMA_VERSION {
            return Err(NavigatorError::Configuration {
                message: format!(
                    "Database schema version {version} is newer than supported version {SCHEMA_VERSION}"
                ),
            });
        }

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        if version < SCHEMA_VERSION {
            debug!("Upgrading database schema from version {version} to {SCHEMA_VERSION}");
            self.connection
                .pragma_update(None, "user_version", SCHEMA_VERSION)
                .db_context("Failed to record schema version")?;
        }

        Ok(())
    }

    /// Schema version recorded in the database file (0 for a new file).
    pub fn schema_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")
    }
}
