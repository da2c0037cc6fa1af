//! Envelope encryption for env snapshots.
//!
//! Derives a 256-bit key from a user-held secret, seals a JSON-serialized
//! env map with AES-256-GCM, and packs ciphertext, IV, and auth tag into a
//! self-describing JSON envelope transported as one base64 string.
//!
//! Decryption fails closed: tampering, a wrong secret, and a malformed
//! envelope all surface the same opaque error, so callers and logs cannot
//! be used as a format oracle.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::core::constants::{ENVELOPE_ALG, KEY_LEN, NONCE_LEN, PBKDF2_ITERATIONS, TAG_LEN};
use crate::core::env::EnvMap;
use crate::error::{CryptoError, Result};

/// How the AES-256 key is derived from the user secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDerivation {
    /// Single SHA-256 of the secret. Matches every envelope sealed by
    /// existing clients, so this stays the default.
    Sha256,
    /// PBKDF2-HMAC-SHA256 salted with the envelope IV. Envelopes do not
    /// record which derivation sealed them, so both sides must agree
    /// before switching.
    Pbkdf2 { iterations: u32 },
}

impl Default for KeyDerivation {
    fn default() -> Self {
        Self::Sha256
    }
}

impl KeyDerivation {
    /// The hardened derivation at the default iteration count.
    pub fn hardened() -> Self {
        Self::Pbkdf2 {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

/// Wire form of an encrypted snapshot.
///
/// `iv`, `tag`, and `data` are base64; the whole object is serialized to
/// JSON and base64-encoded once more into the opaque transport string.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    alg: String,
    iv: String,
    tag: String,
    data: String,
}

impl Envelope {
    /// Encode to the single-string transport form.
    fn seal(&self) -> Result<String> {
        let json =
            serde_json::to_vec(self).map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
        Ok(BASE64.encode(json))
    }

    /// Decode from the transport form and check the algorithm tag.
    fn open(blob: &str) -> Result<Self> {
        let json = BASE64.decode(blob.trim()).map_err(|_| {
            tracing::debug!("envelope rejected: transport is not base64");
            CryptoError::DecryptionFailed
        })?;

        let envelope: Envelope = serde_json::from_slice(&json).map_err(|_| {
            tracing::debug!("envelope rejected: malformed envelope JSON");
            CryptoError::DecryptionFailed
        })?;

        if envelope.alg != ENVELOPE_ALG {
            tracing::debug!(alg = %envelope.alg, "envelope rejected: unsupported algorithm");
            return Err(CryptoError::DecryptionFailed.into());
        }

        Ok(envelope)
    }
}

/// Encrypt an env map under a user secret.
///
/// Uses the default SHA-256 derivation; see [`encrypt_envelope_with`] for
/// the hardened variant.
///
/// # Arguments
///
/// * `map` - The env values to seal
/// * `secret` - The user-held secret
///
/// # Returns
///
/// The opaque base64 transport string.
///
/// # Errors
///
/// Returns error if nonce generation or encryption fails.
pub fn encrypt_envelope(map: &EnvMap, secret: &str) -> Result<String> {
    encrypt_envelope_with(map, secret, KeyDerivation::default())
}

/// Decrypt a transport string back into an env map.
///
/// Uses the default SHA-256 derivation; see [`decrypt_envelope_with`].
///
/// # Errors
///
/// Returns the opaque decryption error on any failure: transport decode,
/// envelope shape, algorithm mismatch, authentication, or a plaintext
/// that is not a flat string map. No partial output is ever released.
pub fn decrypt_envelope(blob: &str, secret: &str) -> Result<EnvMap> {
    decrypt_envelope_with(blob, secret, KeyDerivation::default())
}

/// Encrypt an env map under a user secret with an explicit derivation.
pub fn encrypt_envelope_with(
    map: &EnvMap,
    secret: &str,
    derivation: KeyDerivation,
) -> Result<String> {
    let payload =
        serde_json::to_vec(map).map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    // Fresh IV per encryption; GCM is broken by nonce reuse under one key.
    let mut iv = [0u8; NONCE_LEN];
    getrandom::fill(&mut iv).map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    let key = derive_key(secret, &iv, derivation);
    let cipher = Aes256Gcm::new(key.as_ref().into());

    let mut sealed = cipher
        .encrypt(Nonce::from_slice(&iv), payload.as_slice())
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    // The AEAD appends the 16-byte tag; the envelope carries it separately.
    let tag = sealed.split_off(sealed.len() - TAG_LEN);

    Envelope {
        alg: ENVELOPE_ALG.to_string(),
        iv: BASE64.encode(iv),
        tag: BASE64.encode(&tag),
        data: BASE64.encode(&sealed),
    }
    .seal()
}

/// Decrypt a transport string with an explicit derivation.
pub fn decrypt_envelope_with(
    blob: &str,
    secret: &str,
    derivation: KeyDerivation,
) -> Result<EnvMap> {
    let envelope = Envelope::open(blob)?;

    let iv = decode_field(&envelope.iv, NONCE_LEN)?;
    let tag = decode_field(&envelope.tag, TAG_LEN)?;
    let data = BASE64
        .decode(&envelope.data)
        .map_err(|_| CryptoError::DecryptionFailed)?;

    let key = derive_key(secret, &iv, derivation);
    let cipher = Aes256Gcm::new(key.as_ref().into());

    let mut sealed = data;
    sealed.extend_from_slice(&tag);

    let plaintext = cipher
        .decrypt(Nonce::from_slice(&iv), sealed.as_slice())
        .map_err(|_| {
            tracing::debug!("envelope rejected: authentication failed");
            CryptoError::DecryptionFailed
        })?;

    let map = serde_json::from_slice(&plaintext).map_err(|_| {
        tracing::debug!("envelope rejected: plaintext is not a flat string map");
        CryptoError::DecryptionFailed
    })?;

    Ok(map)
}

/// Derive the AES-256 key from the user secret.
///
/// The PBKDF2 path salts with the envelope IV so the wire format needs no
/// extra field; the IV is fresh per encryption, which also makes the
/// derived key fresh per envelope.
fn derive_key(secret: &str, iv: &[u8], derivation: KeyDerivation) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);

    match derivation {
        KeyDerivation::Sha256 => {
            let digest = Sha256::digest(secret.as_bytes());
            key.copy_from_slice(digest.as_slice());
        }
        KeyDerivation::Pbkdf2 { iterations } => {
            pbkdf2_hmac::<Sha256>(secret.as_bytes(), iv, iterations, &mut key[..]);
        }
    }

    key
}

/// Decode a base64 envelope field and require an exact length.
fn decode_field(value: &str, expected_len: usize) -> Result<Vec<u8>> {
    let bytes = BASE64
        .decode(value)
        .map_err(|_| CryptoError::DecryptionFailed)?;

    if bytes.len() != expected_len {
        tracing::debug!(
            got = bytes.len(),
            expected = expected_len,
            "envelope rejected: field length mismatch"
        );
        return Err(CryptoError::DecryptionFailed.into());
    }

    Ok(bytes)
}
