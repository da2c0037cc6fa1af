//! Watch command - back up automatically when the env file changes.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::time::{Duration, SystemTime};

use dialoguer::Confirm;
use tracing::debug;

use crate::cli::{backup, output};
use crate::core::config::{GlobalConfig, ProjectConfig};
use crate::core::constants::{WATCHER_COMMIT_MESSAGE, WATCH_POLL_MS};
use crate::error::Result;

/// Poll `file` for modification-time changes and back up on each change.
///
/// On a terminal every change asks for confirmation first; with piped
/// input it backs up immediately. A failed backup is reported and
/// watching continues.
pub fn execute(file: &str, key: Option<String>) -> Result<()> {
    // Fail fast on missing login or init before entering the loop.
    GlobalConfig::load()?;
    let dir = std::env::current_dir()?;
    ProjectConfig::load_in(&dir)?;

    let path = dir.join(file);
    let mut last_seen = modified(&path);

    debug!(path = %path.display(), poll_ms = WATCH_POLL_MS, "starting watcher");
    output::header(&format!("watching {} (ctrl-c to stop)", file));

    loop {
        std::thread::sleep(Duration::from_millis(WATCH_POLL_MS));

        let current = modified(&path);
        if current == last_seen {
            continue;
        }
        last_seen = current;

        if current.is_none() {
            output::warn(&format!("{} removed; still watching", file));
            continue;
        }

        output::warn(&format!("{} changed", file));
        if io::stdin().is_terminal() {
            let confirmed = Confirm::new()
                .with_prompt("Back up now?")
                .default(true)
                .interact()?;
            if !confirmed {
                output::dimmed("skipped");
                continue;
            }
        }

        if let Err(e) = backup::execute(Some(WATCHER_COMMIT_MESSAGE.to_string()), key.clone()) {
            output::error(&format!("backup failed: {}", e));
        }
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
}
