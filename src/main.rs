//! Envsnap - versioned, encrypted backups for your .env files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envsnap::cli::output;
use envsnap::cli::{execute, Cli};
use envsnap::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("ENVSNAP_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envsnap=debug")
        } else {
            EnvFilter::new("envsnap=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Config(ConfigError::NotLoggedIn) => Some("run: envsnap login"),
            Error::Config(ConfigError::NotInitialized) => Some("run: envsnap init"),
            Error::Config(ConfigError::AlreadyInitialized) => {
                Some("edit .envsnap.toml to change the project settings")
            }
            Error::EmptyEnv => Some("create a .env file or run: envsnap pull"),
            Error::SealedSnapshot => Some("re-run with --key <secret>"),
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
