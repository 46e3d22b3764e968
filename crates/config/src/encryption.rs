//! Encryption primitives for sealed vault contents.
//!
//! Responsibilities:
//! - Provide AES-256-GCM encryption and decryption.
//! - Derive content keys from vault keys using Argon2id.
//!
//! Does NOT handle:
//! - Locating or creating the vault container (see `persistence::vault`).
//! - Envelope layout on disk (see `persistence::seal`).

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use argon2::Argon2;
use rand::RngExt;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::loader::ConfigError;

/// Errors that can occur while sealing or unsealing vault contents.
#[derive(Debug, Error)]
pub enum EncryptionError {
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Invalid nonce size: expected 12 bytes")]
    InvalidNonceSize,

    #[error("Malformed vault envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Unsupported vault envelope version {0}")]
    UnsupportedVersion(u32),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EncryptionError>;

/// Length of the random salt fed to key derivation.
pub const SALT_LEN: usize = 16;

/// Length of the AES-GCM nonce.
pub const NONCE_LEN: usize = 12;

/// AES-256 key derived from a vault key and a per-seal salt.
///
/// The derived bytes never leave this type.
pub struct ContentKey([u8; 32]);

impl ContentKey {
    /// Argon2id over the vault key and `salt`.
    pub fn derive(vault_key: &SecretString, salt: &[u8]) -> Result<Self> {
        let mut bytes = [0u8; 32];
        Argon2::default()
            .hash_password_into(vault_key.expose_secret().as_bytes(), salt, &mut bytes)
            .map_err(|e| EncryptionError::KeyDerivationFailed(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Encrypt under a fresh random nonce. Returns the nonce and ciphertext+tag.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<([u8; NONCE_LEN], Vec<u8>)> {
        let nonce = random_bytes::<NONCE_LEN>();
        let ciphertext = self
            .cipher()
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|e| EncryptionError::EncryptionFailed(e.to_string()))?;
        Ok((nonce, ciphertext))
    }

    pub fn decrypt(&self, nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        if nonce.len() != NONCE_LEN {
            return Err(EncryptionError::InvalidNonceSize);
        }
        self.cipher()
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|e| EncryptionError::DecryptionFailed(e.to_string()))
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new((&self.0).into())
    }
}

/// `N` bytes from the thread-local CSPRNG.
pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    rand::rng().fill(&mut bytes[..]);
    bytes
}
