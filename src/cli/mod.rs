//! Command-line interface.

pub mod backup;
pub mod commit;
pub mod completions;
pub mod diff;
pub mod init;
pub mod list;
pub mod login;
pub mod output;
pub mod pull;
pub mod social;
pub mod watch;

use clap::{Parser, Subcommand};

use crate::core::config::Environment;
use crate::core::constants::ENV_FILE;

/// Envsnap - versioned, encrypted backups for your .env files.
#[derive(Parser)]
#[command(
    name = "envsnap",
    about = "Versioned, encrypted backups for your .env files",
    version,
    after_help = "Snapshot early. Restore often."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Log in and store an API token
    Login,

    /// Initialize the current directory as an envsnap project
    Init {
        /// Repository slug (defaults to the directory name)
        #[arg(short, long)]
        repo: Option<String>,

        /// Environment to snapshot into
        #[arg(short, long, value_enum, default_value_t = Environment::Development)]
        environment: Environment,
    },

    /// Snapshot the local .env file to the server
    Backup {
        /// Commit message for this snapshot
        #[arg(short, long)]
        message: Option<String>,

        /// Encrypt the snapshot locally with this secret before upload
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Back up without a message (alias for backup)
    Push {
        /// Encrypt the snapshot locally with this secret before upload
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Download the latest snapshot into .env
    Pull {
        /// Secret for decrypting an encrypted snapshot
        #[arg(short, long)]
        key: Option<String>,

        /// Ask the server to decrypt instead of decrypting locally
        #[arg(long, requires = "key")]
        remote_decrypt: bool,
    },

    /// Restore a snapshot, optionally from another repository
    Restore {
        /// Repository slug (defaults to the current project)
        slug: Option<String>,

        /// Secret for decrypting an encrypted snapshot
        #[arg(short, long)]
        key: Option<String>,

        /// Ask the server to decrypt instead of decrypting locally
        #[arg(long, requires = "key")]
        remote_decrypt: bool,
    },

    /// List your repositories on the server
    List,

    /// Stage a commit message for the next backup
    Commit {
        /// The message to stage
        #[arg(short, long)]
        message: String,
    },

    /// Compare the local .env against the latest snapshot
    Diff {
        /// Secret for decrypting an encrypted snapshot
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Watch an env file and back up on change
    Watch {
        /// File to watch
        #[arg(short, long, default_value = ENV_FILE)]
        file: String,

        /// Encrypt snapshots locally with this secret before upload
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Star or unstar a repository
    Star {
        /// Repository id
        repo_id: String,
    },

    /// Fork a repository into your account
    Fork {
        /// Repository id
        repo_id: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Login => login::execute(),
        Init { repo, environment } => init::execute(repo, environment),
        Backup { message, key } => backup::execute(message, key),
        Push { key } => backup::execute(None, key),
        Pull { key, remote_decrypt } => pull::execute(None, key, remote_decrypt),
        Restore {
            slug,
            key,
            remote_decrypt,
        } => pull::execute(slug, key, remote_decrypt),
        List => list::execute(),
        Commit { message } => commit::execute(message),
        Diff { key } => diff::execute(key),
        Watch { file, key } => watch::execute(&file, key),
        Star { repo_id } => social::star(&repo_id),
        Fork { repo_id } => social::fork(&repo_id),
        Completions { shell } => completions::execute(shell),
    }
}
