//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/nlm/nlm.toml`
//! 3. Environment variables: `NLM_*` prefix
//! 4. Command-line flags (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;
use crate::infrastructure::alias_store::ALIAS_FILE_NAME;

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub base_dir: Option<PathBuf>,
}

/// Unified configuration for nlm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base directory for local state (default: ~/.nlm)
    pub base_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_dir: dirs_default_base_dir(),
        }
    }
}

/// Get the default base directory (~/.nlm).
fn dirs_default_base_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".nlm"))
        .unwrap_or_else(|| PathBuf::from("~/.nlm"))
}

/// Get the XDG config directory for nlm.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nlm").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("nlm.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Path of the alias store.
    pub fn alias_file(&self) -> PathBuf {
        self.base_dir.join(ALIAS_FILE_NAME)
    }

    /// Expand shell variables and tilde in path-like fields.
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.base_dir.to_string_lossy().as_ref());
        self.base_dir = PathBuf::from(expanded);
    }

    /// Apply a parsed config file: specified values win.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            base_dir: overlay
                .base_dir
                .clone()
                .unwrap_or_else(|| self.base_dir.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/nlm/nlm.toml`
    /// 3. Environment variables: `NLM_*` prefix
    pub fn load() -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref())
    }

    /// Like `load`, reading the config file from `config_file` instead of the
    /// XDG location.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply NLM_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NLM")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("base_dir") {
            settings.base_dir = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Override the base directory (from `--base-dir`), expanding `~` and `$VAR`.
    pub fn with_base_dir(mut self, base_dir: &Path) -> Self {
        self.base_dir = base_dir.to_path_buf();
        self.expand_paths();
        self
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# nlm configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/nlm/nlm.toml
#   Env:    NLM_* environment variables (e.g. NLM_BASE_DIR)
#   Flags:  --base-dir

# Directory for local state; aliases live in base_dir/aliases.toml
# base_dir = "~/.nlm"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
