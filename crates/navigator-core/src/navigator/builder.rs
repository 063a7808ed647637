//! Builder for creating and configuring Navigator instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Navigator;
use crate::{
    db::Database,
    error::{NavigatorError, Result},
};

/// Builder for creating and configuring Navigator instances.
#[derive(Debug, Clone, Default)]
pub struct NavigatorBuilder {
    database_path: Option<PathBuf>,
}

impl NavigatorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/navigator/navigator.db` or
    /// `~/.local/share/navigator/navigator.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured navigator instance.
    ///
    /// # Errors
    ///
    /// Returns `NavigatorError::FileSystem` if the database directory cannot
    /// be created and `NavigatorError::Database` if schema initialization
    /// fails.
    pub async fn build(self) -> Result<Navigator> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| NavigatorError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Using database at {}", db_path.display());

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), NavigatorError>(())
        })
        .await
        .map_err(|e| NavigatorError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Navigator::new(db_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("navigator")
            .place_data_file("navigator.db")
            .map_err(|e| NavigatorError::XdgDirectory(e.to_string()))
    }
}
