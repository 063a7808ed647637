//! High-level async API for the roadmap engine.
//!
//! [`Navigator`] is the entry point used by every interface (CLI, MCP). It
//! holds nothing but the database path: each operation opens its own
//! connection on the blocking thread pool, runs one unit of work (usually a
//! single transaction) and closes the connection again.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Navigator    │    │  Matcher /      │    │    Database     │
//! │ (roadmap_ops,   │───▶│  transitions /  │───▶│   (via db/)     │
//! │  catalog_ops)   │    │  progress       │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use navigator_core::{catalog::Catalog, params::GenerateRoadmap, NavigatorBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let navigator = NavigatorBuilder::new()
//!     .with_database_path(Some("/tmp/navigator.db"))
//!     .build()
//!     .await?;
//!
//! navigator.import_catalog(Catalog::bundled()?).await?;
//!
//! let outcome = navigator
//!     .generate_roadmap(&GenerateRoadmap {
//!         user_id: 1,
//!         branch: "cse".to_string(),
//!         career_goal: "python_backend_developer".to_string(),
//!         current_year: 2,
//!         current_semester: 1,
//!     })
//!     .await?;
//! assert!(outcome.created);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{NavigatorError, Result},
};

pub mod builder;
pub mod catalog_ops;
pub mod roadmap_ops;

#[cfg(test)]
mod tests;

pub use builder::NavigatorBuilder;

/// Main interface for generating and progressing roadmaps.
#[derive(Debug, Clone)]
pub struct Navigator {
    pub(crate) db_path: PathBuf,
}

impl Navigator {
    /// Creates a new navigator with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Opens a connection on the blocking pool and runs `op` with it.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| NavigatorError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
