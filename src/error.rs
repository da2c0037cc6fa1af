use thiserror::Error;

/// Errors from the envelope crypto layer.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    /// Deliberately carries no cause: a tampered envelope, a wrong
    /// secret, and a malformed blob must be indistinguishable.
    #[error("could not decrypt envelope")]
    DecryptionFailed,
}

/// Errors from the configuration layer.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not logged in")]
    NotLoggedIn,

    #[error("project not initialized")]
    NotInitialized,

    #[error("already initialized: .envsnap.toml exists")]
    AlreadyInitialized,

    #[error("could not resolve home directory")]
    NoHomeDir,

    #[error("could not read config: {0}")]
    ReadFile(std::io::Error),

    #[error("config parse error: {0}")]
    Parse(toml::de::Error),

    #[error("config serialize error: {0}")]
    Serialize(toml::ser::Error),
}

/// Errors from the HTTP client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected server response: {0}")]
    UnexpectedResponse(String),
}

/// Top-level error type surfaced by the CLI.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("no env values found in .env")]
    EmptyEnv,

    #[error("snapshot is sealed; a decryption key is required")]
    SealedSnapshot,

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
