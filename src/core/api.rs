//! HTTP client for the envsnap service.
//!
//! Thin typed wrapper over the CLI routes: login, backup, restore, repo
//! listing, and the social endpoints. Authenticated requests carry the
//! bearer token from the global config; non-2xx responses surface the
//! server's error message when one is present.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::{Environment, GlobalConfig};
use crate::core::constants::{HTTP_TIMEOUT_SECS, USER_KEY_HEADER};
use crate::core::env::EnvMap;
use crate::error::{ApiError, Result};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SocialRequest<'a> {
    #[serde(rename = "repoId")]
    repo_id: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Token and account identity returned by a successful login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Account identity embedded in the login response.
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}

/// Snapshot upload for `backup` and `push`.
///
/// Carries either plaintext `env` values or a client-sealed
/// `encrypted_blob` marked by `client_encrypted`; the constructors keep
/// the two shapes from mixing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRequest {
    pub repo_slug: String,
    pub environment: Environment,
    pub commit_msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<EnvMap>,
    #[serde(skip_serializing_if = "is_false")]
    pub client_encrypted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_blob: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl BackupRequest {
    /// A plaintext snapshot the server may encrypt at rest itself.
    pub fn plain(
        repo_slug: String,
        environment: Environment,
        commit_msg: String,
        values: EnvMap,
    ) -> Self {
        Self {
            repo_slug,
            environment,
            commit_msg,
            env: Some(values),
            client_encrypted: false,
            encrypted_blob: None,
        }
    }

    /// A snapshot sealed on this machine; the server only stores the blob.
    pub fn encrypted(
        repo_slug: String,
        environment: Environment,
        commit_msg: String,
        blob: String,
    ) -> Self {
        Self {
            repo_slug,
            environment,
            commit_msg,
            env: None,
            client_encrypted: true,
            encrypted_blob: Some(blob),
        }
    }
}

/// Acknowledgement returned by the backup route.
#[derive(Debug, Deserialize)]
pub struct BackupResponse {
    pub repo: RepoRef,
    pub env: SnapshotMeta,
}

/// Minimal repository reference embedded in responses.
#[derive(Debug, Deserialize)]
pub struct RepoRef {
    pub slug: String,
}

/// Version and environment of a stored snapshot.
#[derive(Debug, Deserialize)]
pub struct SnapshotMeta {
    pub environment: String,
    pub version: u32,
}

/// Latest snapshot returned by the restore route.
#[derive(Debug, Deserialize)]
pub struct RestoreResponse {
    pub env: Snapshot,
}

/// One stored snapshot, decrypted or still sealed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub environment: Option<String>,
    /// Present when the server decrypted before returning.
    #[serde(default)]
    pub values: Option<EnvMap>,
    /// Present when the snapshot is returned sealed.
    #[serde(default)]
    pub encrypted_blob: Option<String>,
}

impl Snapshot {
    /// Extract the env values, unsealing the blob with `secret` when the
    /// snapshot came back encrypted.
    ///
    /// # Errors
    ///
    /// [`Error::SealedSnapshot`] when the snapshot is sealed and no
    /// secret was given; [`CryptoError::DecryptionFailed`] when the
    /// secret does not open the blob.
    ///
    /// [`Error::SealedSnapshot`]: crate::error::Error::SealedSnapshot
    /// [`CryptoError::DecryptionFailed`]: crate::error::CryptoError::DecryptionFailed
    pub fn into_values(self, secret: Option<&str>) -> Result<EnvMap> {
        if let Some(values) = self.values {
            return Ok(values);
        }

        match (self.encrypted_blob, secret) {
            (Some(blob), Some(secret)) => crate::core::crypto::decrypt_envelope(&blob, secret),
            (Some(_), None) => Err(crate::error::Error::SealedSnapshot),
            (None, _) => {
                Err(ApiError::UnexpectedResponse("snapshot carries no values".to_string()).into())
            }
        }
    }
}

/// Repository listing returned by the repos route.
#[derive(Debug, Deserialize)]
pub struct ReposResponse {
    pub repos: Vec<Repo>,
}

/// Repository row as the server returns it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repo {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "_count", default)]
    pub count: RepoCounts,
}

/// Relation counts the server includes with each repository.
#[derive(Debug, Default, Deserialize)]
pub struct RepoCounts {
    #[serde(default)]
    pub envs: u32,
    #[serde(default)]
    pub stars: u32,
}

/// Toggle result from the star route.
#[derive(Debug, Deserialize)]
pub struct StarResponse {
    pub starred: bool,
}

/// New repository created by the fork route.
#[derive(Debug, Deserialize)]
pub struct ForkResponse {
    pub repo: RepoRef,
}

/// Typed client for the envsnap HTTP routes.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Client bound to a logged-in account.
    pub fn new(config: &GlobalConfig) -> Result<Self> {
        Self::build(config.base_url.clone(), Some(config.token.clone()))
    }

    /// Client for routes that work without a token (login).
    pub fn unauthenticated(base_url: impl Into<String>) -> Result<Self> {
        Self::build(base_url.into(), None)
    }

    fn build(base_url: String, token: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Authenticate and fetch a token.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = self.url("/api/cli/login");
        debug!(%url, "logging in");

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .map_err(ApiError::Request)?;

        Self::handle(response)
    }

    /// Upload a snapshot.
    pub fn backup(&self, request: &BackupRequest) -> Result<BackupResponse> {
        let url = self.url("/api/cli/backup");
        debug!(%url, repo = %request.repo_slug, encrypted = request.client_encrypted, "uploading snapshot");

        let response = self
            .authorize(self.http.post(&url))
            .json(request)
            .send()
            .map_err(ApiError::Request)?;

        Self::handle(response)
    }

    /// Fetch the latest snapshot for a repository.
    ///
    /// With `server_decrypt`, the server is asked to decrypt before
    /// returning; `user_key` rides the `x-envsnap-user-key` header for
    /// snapshots sealed under a caller-held secret. Without either, the
    /// snapshot comes back as stored, sealed blob included.
    pub fn restore(
        &self,
        slug: &str,
        server_decrypt: bool,
        user_key: Option<&str>,
    ) -> Result<RestoreResponse> {
        let mut url = self.url(&format!("/api/cli/restore/{}", slug));
        if server_decrypt {
            url.push_str("?decrypt=true");
        }
        debug!(%url, "fetching latest snapshot");

        let mut request = self.authorize(self.http.get(&url));
        if let Some(key) = user_key {
            request = request.header(USER_KEY_HEADER, key);
        }

        Self::handle(request.send().map_err(ApiError::Request)?)
    }

    /// List repositories visible to this account.
    pub fn repos(&self) -> Result<ReposResponse> {
        let url = self.url("/api/cli/repos");
        debug!(%url, "listing repositories");

        let response = self
            .authorize(self.http.get(&url))
            .send()
            .map_err(ApiError::Request)?;

        Self::handle(response)
    }

    /// Toggle a star on a repository.
    pub fn star(&self, repo_id: &str) -> Result<StarResponse> {
        let url = self.url("/api/social/star");
        debug!(%url, repo_id, "toggling star");

        let response = self
            .authorize(self.http.post(&url))
            .json(&SocialRequest { repo_id })
            .send()
            .map_err(ApiError::Request)?;

        Self::handle(response)
    }

    /// Fork a public repository into this account.
    pub fn fork(&self, repo_id: &str) -> Result<ForkResponse> {
        let url = self.url("/api/social/fork");
        debug!(%url, repo_id, "forking repository");

        let response = self
            .authorize(self.http.post(&url))
            .json(&SocialRequest { repo_id })
            .send()
            .map_err(ApiError::Request)?;

        Self::handle(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map a response to its typed body or an [`ApiError`].
    fn handle<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .map_err(|e| ApiError::UnexpectedResponse(e.to_string()).into());
        }

        let message = response
            .json::<ErrorBody>()
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        debug!(status = status.as_u16(), %message, "server rejected request");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        }
        .into())
    }
}
