//! Configuration file management.
//!
//! Two layers: the global `~/.envsnap/config.toml` written by `login`
//! (server URL and credentials) and the per-project `.envsnap.toml`
//! written by `init` (repo slug, environment, staged commit message).
//! Project paths are resolved by the CLI and passed in explicitly.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants::{
    ENV_EXAMPLE_FILE, ENV_FILE, GITIGNORE_ENTRIES, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILE,
    PROJECT_CONFIG_FILE,
};
use crate::core::env::{self, EnvMap};
use crate::error::{ConfigError, Result};

/// Deployment environment a snapshot belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        };
        f.write_str(name)
    }
}

/// Account details stored in `~/.envsnap/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Server the CLI talks to.
    pub base_url: String,
    /// Bearer token issued by login.
    pub token: String,
    /// Account email, shown in status output.
    pub email: String,
    /// Server-side account id.
    pub user_id: String,
}

impl GlobalConfig {
    /// Path to the global configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if the home directory cannot be
    /// resolved.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILE))
    }

    /// Load the global configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotLoggedIn` if the file doesn't exist, or
    /// `ConfigError::Parse` if the TOML is malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Save the global configuration, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading global config");

        if !path.exists() {
            return Err(ConfigError::NotLoggedIn.into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        Ok(config)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving global config");

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents)?;

        Ok(())
    }
}

/// Project configuration stored in `.envsnap.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Repository slug on the server.
    pub repo: String,
    /// Environment snapshots are filed under.
    #[serde(default)]
    pub environment: Environment,
    /// Staged commit message for the next backup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
}

impl ProjectConfig {
    /// Path of the project configuration inside `dir`.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(PROJECT_CONFIG_FILE)
    }

    /// Whether `dir` holds a project configuration.
    pub fn exists_in(dir: &Path) -> bool {
        Self::path_in(dir).exists()
    }

    /// Load the project configuration from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load_in(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        debug!(path = %path.display(), "loading project config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        Ok(config)
    }

    /// Save the project configuration into `dir`.
    pub fn save_in(&self, dir: &Path) -> Result<()> {
        debug!(repo = %self.repo, "saving project config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(Self::path_in(dir), contents)?;

        Ok(())
    }
}

/// Derive a repository slug from a directory name.
///
/// Lowercases the name and collapses runs of non-alphanumeric characters
/// to single dashes, trimming any trailing dash. Falls back to "project"
/// when nothing usable remains.
pub fn slug_from_dir(dir: &Path) -> String {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "project".to_string()
    } else {
        slug
    }
}

/// Ensure `.gitignore` in `dir` ignores local env files.
///
/// Adds `.env`, `.env.*`, and `!.env.example` if not already present;
/// an up-to-date file is left untouched.
///
/// # Errors
///
/// Returns error if file operations fail.
pub fn ensure_gitignore(dir: &Path) -> Result<()> {
    let path = dir.join(".gitignore");

    let existing = if path.exists() {
        std::fs::read_to_string(&path)?
    } else {
        String::new()
    };

    let missing: Vec<&str> = GITIGNORE_ENTRIES
        .iter()
        .copied()
        .filter(|entry| !existing.lines().any(|line| line.trim() == *entry))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    for entry in missing {
        updated.push_str(entry);
        updated.push('\n');
    }
    std::fs::write(&path, updated)?;

    Ok(())
}

/// Seed `.env.example` in `dir` from the local `.env`, keys only.
///
/// # Returns
///
/// Whether the file was created; an existing example is left untouched.
pub fn seed_env_example(dir: &Path) -> Result<bool> {
    let example = dir.join(ENV_EXAMPLE_FILE);
    if example.exists() {
        return Ok(false);
    }

    let values = env::read_env_file(&dir.join(ENV_FILE))?;
    let sanitized: EnvMap = values
        .keys()
        .map(|key| (key.to_string(), String::new()))
        .collect();
    env::write_env_file(&example, &sanitized)?;

    Ok(true)
}
