//! Constants used throughout envsnap.
//!
//! Centralizes magic strings and configuration values.

/// Project configuration file name (.envsnap.toml).
pub const PROJECT_CONFIG_FILE: &str = ".envsnap.toml";

/// Global configuration path relative to HOME (~/.envsnap/config.toml).
pub const GLOBAL_CONFIG_DIR: &str = ".envsnap";

/// Global configuration file name inside [`GLOBAL_CONFIG_DIR`].
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variables file name (.env).
pub const ENV_FILE: &str = ".env";

/// Example file seeded on init (.env.example).
pub const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Gitignore entries to protect env snapshots.
///
/// These entries ensure that .env files are not accidentally committed.
pub const GITIGNORE_ENTRIES: &[&str] = &[".env", ".env.*", "!.env.example"];

/// Algorithm identifier carried in every envelope.
pub const ENVELOPE_ALG: &str = "aes-256-gcm";

/// GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Default PBKDF2 iteration count for the hardened derivation.
pub const PBKDF2_ITERATIONS: u32 = 600_000;

/// Default server URL offered by the login prompt.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable overriding the server URL.
pub const BASE_URL_ENV: &str = "ENVSNAP_BASE_URL";

/// Request header carrying a caller-supplied decryption secret.
pub const USER_KEY_HEADER: &str = "x-envsnap-user-key";

/// HTTP client timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 20;

/// Commit message used when none is staged or given.
pub const DEFAULT_COMMIT_MESSAGE: &str = "CLI backup";

/// Commit message staged by init for the first backup.
pub const INIT_COMMIT_MESSAGE: &str = "Initial env snapshot";

/// Commit message recorded by watcher-triggered backups.
pub const WATCHER_COMMIT_MESSAGE: &str = "Auto backup from watcher";

/// Watcher poll interval in milliseconds.
pub const WATCH_POLL_MS: u64 = 2_000;
