//! Pull command - download the latest snapshot into .env.
//!
//! Also backs the restore command, which is pull with an optional
//! explicit repository slug.

use tracing::info;

use crate::cli::output;
use crate::core::api::ApiClient;
use crate::core::config::{GlobalConfig, ProjectConfig};
use crate::core::constants::ENV_FILE;
use crate::core::env;
use crate::error::Result;

/// Fetch the latest snapshot and write it to the local .env file.
///
/// Sealed snapshots are decrypted locally with `key`; with
/// `remote_decrypt` the key is sent along and the server decrypts
/// before returning.
pub fn execute(slug: Option<String>, key: Option<String>, remote_decrypt: bool) -> Result<()> {
    let global = GlobalConfig::load()?;
    let dir = std::env::current_dir()?;

    // An explicit slug works outside an initialized project.
    let slug = match slug {
        Some(slug) => slug,
        None => ProjectConfig::load_in(&dir)?.repo,
    };

    info!("Pulling latest snapshot for {}", slug);

    let client = ApiClient::new(&global)?;
    let user_key = if remote_decrypt { key.as_deref() } else { None };
    let response = client.restore(&slug, remote_decrypt, user_key)?;

    let snapshot = response.env;
    let version = snapshot.version;
    let environment = snapshot.environment.clone();
    let values = snapshot.into_values(key.as_deref())?;

    env::write_env_file(&dir.join(ENV_FILE), &values)?;

    output::success(&format!(
        "pulled latest env for {} into {}",
        output::key(&slug),
        output::path(ENV_FILE)
    ));
    if let Some(version) = version {
        output::kv("version", version);
    }
    if let Some(environment) = environment {
        output::kv("environment", environment);
    }

    Ok(())
}
