//! ES256 key management for token signing and verification

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use jsonwebtoken::{DecodingKey, EncodingKey};
use p256::pkcs8::{DecodePrivateKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use p256::SecretKey;

use crate::errors::{DomainError, TokenError};

/// Manager for the P-256 key pair used in ES256 operations
///
/// The pair is loaded once from a single PEM-encoded private key file; the
/// public half is derived from the private scalar. Both halves are immutable
/// for the lifetime of the manager, so concurrent reads need no locking.
#[derive(Clone)]
pub struct Es256KeyManager {
    /// Private key for signing tokens
    encoding_key: EncodingKey,
    /// Public key for verifying tokens
    decoding_key: DecodingKey,
    /// Path the key material was loaded from
    key_path: PathBuf,
}

impl fmt::Debug for Es256KeyManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Es256KeyManager")
            .field("key_path", &self.key_path)
            .finish()
    }
}

impl Es256KeyManager {
    /// Creates a key manager from a PEM key file
    ///
    /// # Arguments
    ///
    /// * `key_path` - Path to a PEM-encoded P-256 private key, in either
    ///   SEC1 (`EC PRIVATE KEY`) or PKCS#8 (`PRIVATE KEY`) form
    ///
    /// # Returns
    ///
    /// * `Ok(Es256KeyManager)` - Key pair loaded successfully
    /// * `Err(DomainError)` - The file is missing, unreadable, or not a
    ///   P-256 private key
    pub fn new<P: AsRef<Path>>(key_path: P) -> Result<Self, DomainError> {
        let key_path = key_path.as_ref().to_path_buf();

        let pem = fs::read_to_string(&key_path).map_err(|e| {
            DomainError::Token(TokenError::KeyLoad {
                message: format!("Failed to read key file {}: {}", key_path.display(), e),
            })
        })?;

        let mut manager = Self::from_pem(&pem)?;
        tracing::debug!("loaded P-256 key pair from {}", key_path.display());
        manager.key_path = key_path;
        Ok(manager)
    }

    /// Creates a key manager from a PEM string (useful for testing or embedded keys)
    ///
    /// # Arguments
    ///
    /// * `pem` - PEM-encoded P-256 private key string
    ///
    /// # Returns
    ///
    /// * `Ok(Es256KeyManager)` - Key pair loaded successfully
    /// * `Err(DomainError)` - Invalid key material
    pub fn from_pem(pem: &str) -> Result<Self, DomainError> {
        // Accept both SEC1 and PKCS#8 private key encodings
        let secret_key = match SecretKey::from_sec1_pem(pem) {
            Ok(key) => key,
            Err(_) => SecretKey::from_pkcs8_pem(pem).map_err(|e| {
                DomainError::Token(TokenError::KeyLoad {
                    message: format!("Not a PEM-encoded P-256 private key: {}", e),
                })
            })?,
        };

        // jsonwebtoken wants PKCS#8 for signing and the SPKI public key for
        // verification; both are derived from the parsed private scalar.
        let pkcs8 = secret_key.to_pkcs8_pem(LineEnding::LF).map_err(|e| {
            DomainError::Token(TokenError::KeyLoad {
                message: format!("Failed to re-encode private key: {}", e),
            })
        })?;
        let encoding_key = EncodingKey::from_ec_pem(pkcs8.as_bytes()).map_err(|e| {
            DomainError::Token(TokenError::KeyLoad {
                message: format!("Invalid signing key: {}", e),
            })
        })?;

        let public_pem = secret_key
            .public_key()
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| {
                DomainError::Token(TokenError::KeyLoad {
                    message: format!("Failed to derive public key: {}", e),
                })
            })?;
        let decoding_key = DecodingKey::from_ec_pem(public_pem.as_bytes()).map_err(|e| {
            DomainError::Token(TokenError::KeyLoad {
                message: format!("Invalid verification key: {}", e),
            })
        })?;

        Ok(Self {
            encoding_key,
            decoding_key,
            key_path: PathBuf::from("memory"),
        })
    }

    /// Returns the encoding key for signing tokens
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying tokens
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    /// Returns the path the key material was loaded from
    pub fn key_path(&self) -> &Path {
        &self.key_path
    }
}
