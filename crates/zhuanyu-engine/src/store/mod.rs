use relative_path::{Component, RelativePath};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use uuid::Uuid;

use crate::codec::encode;
use crate::io::{self, IoError};
use crate::models::Document;

/// File name the sample recipe is written under
pub const SAMPLE_FILE_NAME: &str = "sample-stir-fry.md";

/// Recipe files in a single directory.
///
/// Every operation is best-effort: failures are logged and turn into an empty
/// or absent result instead of an error, so callers only need to react to
/// missing content. Access to a given file is expected to be serialised by
/// the caller.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    root: PathBuf,
}

impl RecipeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the recipe files
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a recipe file name
    pub fn path_for(&self, name: &str) -> PathBuf {
        RelativePath::new(name).to_path(&self.root)
    }

    /// `name` as a path inside the root, if it is a single plain file name
    fn file_name<'a>(&self, name: &'a str) -> Option<&'a RelativePath> {
        let path = RelativePath::new(name);
        let mut components = path.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(path),
            _ => {
                log::warn!("Ignoring recipe name outside {}: {name}", self.root.display());
                None
            }
        }
    }

    /// Create the recipes directory if it is missing
    pub fn ensure_directory(&self) {
        if self.root.is_dir() {
            return;
        }
        match fs::create_dir_all(&self.root) {
            Ok(()) => log::debug!("Created recipes directory {}", self.root.display()),
            Err(e) => log::warn!(
                "Failed to create recipes directory {}: {e}",
                self.root.display()
            ),
        }
    }

    /// Names of the recipe files, in no particular order
    pub fn list_files(&self) -> Vec<String> {
        match io::scan_recipe_files(&self.root) {
            Ok(names) => names,
            Err(IoError::InvalidRecipesDir(reason)) => {
                log::debug!("No recipes listed: {reason}");
                Vec::new()
            }
            Err(e) => {
                log::warn!("Failed to list recipes in {}: {e}", self.root.display());
                Vec::new()
            }
        }
    }

    /// Content of a recipe file; empty if it is missing or unreadable
    pub fn read(&self, name: &str) -> String {
        let Some(path) = self.file_name(name) else {
            return String::new();
        };
        match io::read_file(path, &self.root) {
            Ok(content) => content,
            Err(IoError::NotFound(path)) => {
                log::debug!("Recipe file not found: {}", path.display());
                String::new()
            }
            Err(e) => {
                log::warn!("Failed to read recipe {name}: {e}");
                String::new()
            }
        }
    }

    /// Replace a recipe file's content atomically.
    ///
    /// Returns whether the new content landed on disk.
    pub fn write(&self, name: &str, content: &str) -> bool {
        let Some(path) = self.file_name(name) else {
            return false;
        };
        match io::write_file_atomic(path, &self.root, content) {
            Ok(()) => {
                log::debug!("Wrote recipe {name}");
                true
            }
            Err(e) => {
                log::warn!("Failed to write recipe {name}: {e}");
                false
            }
        }
    }

    pub fn modification_time(&self, name: &str) -> Option<SystemTime> {
        io::modified_at(self.file_name(name)?, &self.root)
            .inspect_err(|e| log::debug!("No modification time for {name}: {e}"))
            .ok()
    }

    /// Write a new scaffold recipe titled `title` and return its file name,
    /// or `None` if it could not be written.
    ///
    /// The name embeds a random UUID so concurrent calls never collide.
    pub fn create_new(&self, title: &str) -> Option<String> {
        self.ensure_directory();
        let name = format!("recipe-{}.{}", Uuid::new_v4(), io::RECIPE_EXTENSION);
        self.write(&name, &encode(&Document::new_recipe(title))).then_some(name)
    }

    /// Write the sample recipe if the directory holds no recipes yet.
    ///
    /// Returns the sample's file name when it was written.
    pub fn bootstrap_sample_if_needed(&self) -> Option<String> {
        self.ensure_directory();
        if !self.list_files().is_empty() {
            return None;
        }
        if !self.write(SAMPLE_FILE_NAME, &encode(&Document::sample())) {
            return None;
        }
        log::info!("Wrote sample recipe to {}", self.root.display());
        Some(SAMPLE_FILE_NAME.to_string())
    }
}
