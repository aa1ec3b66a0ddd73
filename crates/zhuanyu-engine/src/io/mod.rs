use relative_path::RelativePath;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Extension of recipe files, compared case-insensitively
pub const RECIPE_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid recipes directory: {0}")]
    InvalidRecipesDir(String),
}

/// Read a recipe file and return its content
pub fn read_file(relative_path: &RelativePath, recipes_root: &Path) -> Result<String, IoError> {
    read_path(&relative_path.to_path(recipes_root))
}

/// Read any text file by absolute or working-directory-relative path
pub fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a recipe file atomically.
///
/// The content goes to a temporary file in the destination directory which is
/// then renamed over the target, so readers see either the old or the new
/// file and never a partial one.
pub fn write_file_atomic(
    relative_path: &RelativePath,
    recipes_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(recipes_root);
    let parent = absolute_path.parent().unwrap_or(recipes_root);

    // Create parent directories if they don't exist
    fs::create_dir_all(parent).map_err(IoError::Io)?;

    let mut staged = tempfile::Builder::new()
        .prefix(".zhuanyu-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(IoError::Io)?;
    staged.write_all(content.as_bytes())?;
    staged.as_file().sync_all()?;
    staged
        .persist(&absolute_path)
        .map_err(|err| IoError::Io(err.error))?;
    Ok(())
}

/// Names of the recipe files directly inside `recipes_root`.
///
/// Subdirectories are not searched. The order is whatever the file system returns.
pub fn scan_recipe_files(recipes_root: &Path) -> Result<Vec<String>, IoError> {
    validate_recipes_dir(recipes_root)?;

    let mut names = Vec::new();
    for entry in fs::read_dir(recipes_root).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_file()
            && is_recipe_file(&path)
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// Last modification time of a recipe file
pub fn modified_at(
    relative_path: &RelativePath,
    recipes_root: &Path,
) -> Result<SystemTime, IoError> {
    let absolute_path = relative_path.to_path(recipes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    Ok(fs::metadata(&absolute_path)?.modified()?)
}

pub fn is_recipe_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(RECIPE_EXTENSION))
}

pub fn validate_recipes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidRecipesDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}
