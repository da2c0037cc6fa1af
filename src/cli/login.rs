//! Login command - authenticate and store an API token.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::{Input, Password};
use tracing::info;

use crate::cli::output;
use crate::core::api::ApiClient;
use crate::core::config::GlobalConfig;
use crate::core::constants::{BASE_URL_ENV, DEFAULT_BASE_URL};
use crate::error::Result;

/// Log in and write the token to the global config.
pub fn execute() -> Result<()> {
    let mut base_url = resolve_base_url();

    let (email, password) = if io::stdin().is_terminal() {
        base_url = Input::new()
            .with_prompt("API base URL")
            .default(base_url)
            .interact_text()?;
        let email: String = Input::new().with_prompt("Email").interact_text()?;
        let password = Password::new().with_prompt("Password").interact()?;
        (email, password)
    } else {
        // Piped input: first line email, second line password, URL from
        // the environment or the saved config
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        let email = next_line(&mut lines)?;
        let password = next_line(&mut lines)?;
        (email, password)
    };

    info!("Logging in against {}", base_url);

    let client = ApiClient::unauthenticated(&base_url)?;
    let response = client.login(email.trim(), &password)?;

    let config = GlobalConfig {
        base_url,
        token: response.token,
        email: response.user.email,
        user_id: response.user.id,
    };
    config.save()?;

    output::success(&format!("logged in as {}", config.email));
    if let Ok(path) = GlobalConfig::path() {
        output::dimmed(&format!("token saved to {}", path.display()));
    }

    Ok(())
}

fn resolve_base_url() -> String {
    std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|url| !url.is_empty())
        .or_else(|| GlobalConfig::load().ok().map(|config| config.base_url))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn next_line<B: BufRead>(lines: &mut io::Lines<B>) -> Result<String> {
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "expected email and password on stdin",
        )
        .into()),
    }
}
