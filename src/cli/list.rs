//! List command - show repositories on the server.

use crate::cli::output;
use crate::core::api::{ApiClient, Repo};
use crate::core::config::GlobalConfig;
use crate::error::Result;

/// List repositories visible to the logged-in account.
pub fn execute() -> Result<()> {
    let global = GlobalConfig::load()?;
    let client = ApiClient::new(&global)?;
    let listing = client.repos()?;

    if listing.repos.is_empty() {
        output::warn("no repositories found");
        output::hint("run: envsnap init && envsnap backup");
        return Ok(());
    }

    output::section(&format!("Repositories ({})", listing.repos.len()));
    for repo in &listing.repos {
        println!("  {}  {}", output::key(&repo.slug), repo.name);
        output::dimmed(&format!("    {}", describe(repo)));
    }

    Ok(())
}

fn describe(repo: &Repo) -> String {
    let mut parts = vec![
        format!("{} snapshot{}", repo.count.envs, plural(repo.count.envs)),
        format!("{} star{}", repo.count.stars, plural(repo.count.stars)),
    ];
    if let Some(updated) = repo.updated_at {
        parts.push(format!("updated {}", updated.format("%Y-%m-%d")));
    }

    parts.join(", ")
}

fn plural(count: u32) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
