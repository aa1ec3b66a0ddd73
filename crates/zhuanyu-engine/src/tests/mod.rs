use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary recipes directory
pub fn create_test_recipes_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test recipe file with content
pub fn create_test_file(recipes_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = recipes_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
