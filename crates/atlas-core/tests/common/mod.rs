use atlas_core::RegistryBuilder;
use tempfile::TempDir;

/// Helper function to create a test registry
pub async fn create_test_registry() -> (TempDir, atlas_core::Registry) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let registry = RegistryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create registry");
    (temp_dir, registry)
}
