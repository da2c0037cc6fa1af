//! Social commands - star and fork repositories.

use tracing::info;

use crate::cli::output;
use crate::core::api::ApiClient;
use crate::core::config::GlobalConfig;
use crate::error::Result;

/// Toggle a star on a repository.
pub fn star(repo_id: &str) -> Result<()> {
    let global = GlobalConfig::load()?;
    let client = ApiClient::new(&global)?;

    info!("Toggling star on {}", repo_id);
    let response = client.star(repo_id)?;

    if response.starred {
        output::success("starred repository");
    } else {
        output::success("removed star");
    }

    Ok(())
}

/// Fork a repository into this account.
pub fn fork(repo_id: &str) -> Result<()> {
    let global = GlobalConfig::load()?;
    let client = ApiClient::new(&global)?;

    info!("Forking {}", repo_id);
    let response = client.fork(repo_id)?;

    output::success(&format!("forked into {}", output::key(&response.repo.slug)));
    output::hint(&format!("run: envsnap restore {}", response.repo.slug));

    Ok(())
}
