//! Diff command - compare the local .env against the latest snapshot.

use console::style;
use tracing::info;

use crate::cli::output;
use crate::core::api::ApiClient;
use crate::core::config::{GlobalConfig, ProjectConfig};
use crate::core::constants::ENV_FILE;
use crate::core::diff::EnvDiff;
use crate::core::env;
use crate::error::Result;

/// Show which keys differ between the local .env and the latest snapshot.
///
/// Only key names are printed, never values.
pub fn execute(key: Option<String>) -> Result<()> {
    let global = GlobalConfig::load()?;
    let dir = std::env::current_dir()?;
    let project = ProjectConfig::load_in(&dir)?;

    let local = env::read_env_file(&dir.join(ENV_FILE))?;

    info!("Diffing local env against latest snapshot for {}", project.repo);

    let client = ApiClient::new(&global)?;
    let response = client.restore(&project.repo, false, None)?;

    let snapshot = response.env;
    let version = snapshot.version;
    let remote = snapshot.into_values(key.as_deref())?;

    let diff = EnvDiff::compute(&remote, &local);

    if diff.is_empty() {
        output::success("local .env matches the latest snapshot");
        return Ok(());
    }

    let label = match version {
        Some(version) => format!("version {}", version),
        None => "latest snapshot".to_string(),
    };
    output::section(&format!("Local changes vs {}", label));

    for name in diff.added() {
        println!("  {} {}  {}", style("+").green(), name, style("(local only)").dim());
    }
    for name in diff.removed() {
        println!("  {} {}  {}", style("-").red(), name, style("(snapshot only)").dim());
    }
    for name in diff.changed() {
        println!("  {} {}  {}", style("~").yellow(), name, style("(modified)").dim());
    }

    println!();
    output::hint("run: envsnap backup");

    Ok(())
}
