#![allow(dead_code)]

use navigator_core::{Catalog, Database, Navigator, NavigatorBuilder};
use tempfile::{NamedTempFile, TempDir};

/// Helper function to create a temporary database with the bundled catalog
pub fn create_seeded_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let mut db = Database::new(temp_file.path()).expect("Failed to create test database");
    db.import_catalog(&Catalog::bundled().expect("bundled catalog"))
        .expect("Failed to import catalog");
    (temp_file, db)
}

/// Helper function to create a test navigator with the bundled catalog
pub async fn create_test_navigator() -> (TempDir, Navigator) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let navigator = NavigatorBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create navigator");
    navigator
        .import_catalog(Catalog::bundled().expect("bundled catalog"))
        .await
        .expect("Failed to import catalog");
    (temp_dir, navigator)
}
