//! Backup command - snapshot the local .env to the server.

use tracing::info;

use crate::cli::output;
use crate::core::api::{ApiClient, BackupRequest};
use crate::core::config::{GlobalConfig, ProjectConfig};
use crate::core::constants::{DEFAULT_COMMIT_MESSAGE, ENV_FILE};
use crate::core::{crypto, env};
use crate::error::{Error, Result};

/// Upload the local .env as a new snapshot version.
///
/// The commit message comes from the flag, then a staged message from
/// `envsnap commit`, then the default. A staged message is consumed only
/// by the successful backup that records it.
pub fn execute(message: Option<String>, key: Option<String>) -> Result<()> {
    let global = GlobalConfig::load()?;
    let dir = std::env::current_dir()?;
    let mut project = ProjectConfig::load_in(&dir)?;

    let values = env::read_env_file(&dir.join(ENV_FILE))?;
    if values.is_empty() {
        return Err(Error::EmptyEnv);
    }

    // A flag message wins; the staged message is only consumed when it
    // is the one recorded, so a -m or watcher backup leaves it staged.
    let staged = if message.is_some() {
        None
    } else {
        project.commit_message.take()
    };
    let consumed_staged = staged.is_some();
    let message = message
        .or(staged)
        .unwrap_or_else(|| DEFAULT_COMMIT_MESSAGE.to_string());

    info!(
        "Backing up {} values for {} ({})",
        values.len(),
        project.repo,
        project.environment
    );

    let request = match key.as_deref() {
        Some(secret) => {
            let blob = crypto::encrypt_envelope(&values, secret)?;
            BackupRequest::encrypted(project.repo.clone(), project.environment, message, blob)
        }
        None => BackupRequest::plain(project.repo.clone(), project.environment, message, values),
    };

    let client = ApiClient::new(&global)?;
    let response = client.backup(&request)?;

    // The staged message is one-shot; clear it now that it is recorded.
    if consumed_staged {
        project.save_in(&dir)?;
    }

    output::success(&format!(
        "backed up {} ({}) at version {}",
        output::key(&response.repo.slug),
        response.env.environment,
        response.env.version
    ));
    if key.is_some() {
        output::dimmed("snapshot sealed on this machine; the server stores ciphertext only");
    }

    Ok(())
}
