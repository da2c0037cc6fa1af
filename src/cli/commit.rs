//! Commit command - stage a message for the next backup.

use tracing::info;

use crate::cli::output;
use crate::core::config::ProjectConfig;
use crate::error::Result;

/// Stage a commit message in the project config.
pub fn execute(message: String) -> Result<()> {
    let dir = std::env::current_dir()?;
    let mut project = ProjectConfig::load_in(&dir)?;

    info!("Staging commit message for {}", project.repo);

    project.commit_message = Some(message.clone());
    project.save_in(&dir)?;

    output::success(&format!("commit message staged: {}", message));
    output::dimmed("the next backup will record it");

    Ok(())
}
