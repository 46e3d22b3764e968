//! Encrypted storage of a JSON document inside a vault container.
//!
//! Responsibilities:
//! - Encrypt a JSON document with a key derived from the vault key and write it
//!   atomically into the container.
//! - Read the container back and decrypt it.
//!
//! Does NOT handle:
//! - Locating or keying the container (see `vault.rs`).
//!
//! Invariants:
//! - A fresh salt and nonce are generated on every seal.
//! - An empty container unseals to an empty object.
//! - The container is never left partially written (temp file + rename).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::vault::VaultContainer;
use crate::constants::SEALED_VAULT_VERSION;
use crate::encryption::{ContentKey, EncryptionError, Result, SALT_LEN, random_bytes};

/// On-disk layout of a sealed container.
#[derive(Debug, Serialize, Deserialize)]
struct SealedEnvelope {
    version: u32,
    salt: String,
    nonce: String,
    ciphertext: String,
}

impl VaultContainer {
    /// Encrypt `document` and replace the container's contents with it.
    pub fn seal(&self, document: &Value) -> Result<()> {
        self.ensure_exists()?;

        let salt = random_bytes::<SALT_LEN>();
        let key = ContentKey::derive(self.key(), &salt)?;
        let plaintext = serde_json::to_vec(document)
            .map_err(|e| EncryptionError::EncryptionFailed(e.to_string()))?;
        let (nonce, ciphertext) = key.encrypt(&plaintext)?;

        let envelope = SealedEnvelope {
            version: SEALED_VAULT_VERSION,
            salt: hex::encode(salt),
            nonce: hex::encode(nonce),
            ciphertext: hex::encode(ciphertext),
        };
        let content = serde_json::to_string_pretty(&envelope)
            .map_err(|e| EncryptionError::EncryptionFailed(e.to_string()))?;

        let temp_path = temp_path_for(self.path());
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, self.path())?;

        tracing::debug!(path = %self.path().display(), "Vault sealed atomically");
        Ok(())
    }

    /// Decrypt the container's document. An empty container yields `{}`.
    pub fn unseal(&self) -> Result<Value> {
        let content = std::fs::read_to_string(self.path())?;
        if content.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }

        let envelope: SealedEnvelope = serde_json::from_str(&content)
            .map_err(|e| EncryptionError::MalformedEnvelope(e.to_string()))?;
        if envelope.version != SEALED_VAULT_VERSION {
            return Err(EncryptionError::UnsupportedVersion(envelope.version));
        }

        let salt = decode_hex("salt", &envelope.salt)?;
        let nonce = decode_hex("nonce", &envelope.nonce)?;
        let ciphertext = decode_hex("ciphertext", &envelope.ciphertext)?;

        let key = ContentKey::derive(self.key(), &salt)?;
        let plaintext = key.decrypt(&nonce, &ciphertext)?;

        serde_json::from_slice(&plaintext)
            .map_err(|e| EncryptionError::DecryptionFailed(e.to_string()))
    }
}

/// `<file name>.tmp` next to `path`, so siblings sharing the stem are untouched.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn decode_hex(field: &str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|e| EncryptionError::MalformedEnvelope(format!("{field}: {e}")))
}
