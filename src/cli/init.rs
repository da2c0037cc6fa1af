//! Init command - set up the current directory as a project.

use tracing::info;

use crate::cli::output;
use crate::core::config::{self, Environment, ProjectConfig};
use crate::core::constants::{ENV_EXAMPLE_FILE, INIT_COMMIT_MESSAGE, PROJECT_CONFIG_FILE};
use crate::error::{ConfigError, Result};

/// Write .envsnap.toml, protect .env in .gitignore, and seed an example file.
pub fn execute(repo: Option<String>, environment: Environment) -> Result<()> {
    let dir = std::env::current_dir()?;

    if ProjectConfig::exists_in(&dir) {
        return Err(ConfigError::AlreadyInitialized.into());
    }

    let slug = repo.unwrap_or_else(|| config::slug_from_dir(&dir));
    info!("Initializing project: {} ({})", slug, environment);

    let project = ProjectConfig {
        repo: slug,
        environment,
        commit_message: Some(INIT_COMMIT_MESSAGE.to_string()),
    };
    project.save_in(&dir)?;

    config::ensure_gitignore(&dir)?;
    if config::seed_env_example(&dir)? {
        output::success(&format!("created {}", ENV_EXAMPLE_FILE));
    }

    output::success(&format!(
        "initialized {} ({})",
        output::key(&project.repo),
        project.environment
    ));
    output::dimmed(&format!("config written to {}", PROJECT_CONFIG_FILE));
    output::hint("run: envsnap backup");

    Ok(())
}
