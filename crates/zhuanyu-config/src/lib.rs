use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub recipes_path: PathBuf,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded recipes path
        config.recipes_path =
            Self::expand_path(&config.recipes_path).unwrap_or(config.recipes_path);

        Ok(Some(config))
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/zhuanyu");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Per-user recipes folder used when nothing else is configured
    pub fn default_recipes_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde("~/Documents/Recipes").as_ref())
    }

    /// Pick the recipes directory: an explicit override wins, then the config
    /// file at `config_path`, then [`Config::default_recipes_path`].
    pub fn resolve_recipes_path_with(
        dir_override: Option<&str>,
        config_path: &Path,
    ) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = dir_override {
            return Ok(expand_user_path(dir));
        }
        Ok(Self::load_from_path(config_path)?
            .map(|config| config.recipes_path)
            .unwrap_or_else(Self::default_recipes_path))
    }

    pub fn resolve_recipes_path(dir_override: Option<&str>) -> Result<PathBuf, ConfigError> {
        Self::resolve_recipes_path_with(dir_override, &Self::config_path())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Expand `~` and environment variables in a user-supplied path.
///
/// Unknown variables leave the path as written.
pub fn expand_user_path(path: &str) -> PathBuf {
    Config::expand_path(Path::new(path)).unwrap_or_else(|| PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        // Should contain the expected config file name
        assert!(path_str.ends_with(".config/zhuanyu/config.toml"));
    }

    #[test]
    fn test_default_recipes_path() {
        let path = Config::default_recipes_path();
        let path_str = path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with("Documents/Recipes"));
    }

    fn write_config(dir: &TempDir, recipes_path: &str) -> PathBuf {
        let config_file = dir.path().join("config.toml");
        std::fs::write(&config_file, format!("recipes_path = \"{recipes_path}\"\n")).unwrap();
        config_file
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path(&PathBuf::from("~/test/path")).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("ZHUANYU_TEST_VAR", "/test/env/path");
        }

        let expanded = Config::expand_path(&PathBuf::from("$ZHUANYU_TEST_VAR/subdir")).unwrap();
        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("ZHUANYU_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_user_path_keeps_unknown_variables() {
        let path = expand_user_path("$ZHUANYU_SURELY_UNSET_VAR/recipes");
        assert_eq!(path, PathBuf::from("$ZHUANYU_SURELY_UNSET_VAR/recipes"));
    }

    #[test]
    fn test_expand_user_path_relative() {
        assert_eq!(expand_user_path("relative/path"), PathBuf::from("relative/path"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "recipes_path = [").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = write_config(&temp_dir, "/tmp/test-recipes");

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.recipes_path, PathBuf::from("/tmp/test-recipes"));
    }

    #[test]
    fn test_load_config_expands_tilde() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = write_config(&temp_dir, "~/Recipes");

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert!(!loaded_config.recipes_path.starts_with("~"));
        assert!(loaded_config.recipes_path.ends_with("Recipes"));
    }

    #[test]
    fn test_resolve_prefers_override() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = write_config(&temp_dir, "/from/config");

        let resolved = Config::resolve_recipes_path_with(Some("/from/flag"), &config_file).unwrap();

        assert_eq!(resolved, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_resolve_falls_back_to_config_then_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let resolved = Config::resolve_recipes_path_with(None, &config_file).unwrap();
        assert_eq!(resolved, Config::default_recipes_path());

        write_config(&temp_dir, "/from/config");

        let resolved = Config::resolve_recipes_path_with(None, &config_file).unwrap();
        assert_eq!(resolved, PathBuf::from("/from/config"));
    }
}
