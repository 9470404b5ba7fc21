//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::{encode, Algorithm, Header};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, SignedToken};
use crate::domain::value_objects::TokenVerdict;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;
use super::key_manager::Es256KeyManager;

/// Service issuing and verifying ES256-signed tokens
///
/// One instance backs all requests. The key pair and lifetime are fixed at
/// construction, so `issue` and `verify` are safe to call concurrently
/// without locking.
pub struct TokenService {
    key_manager: Es256KeyManager,
    token_lifetime: Duration,
}

impl TokenService {
    /// Creates a new token service, loading the key pair from the configured path
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance or an error if key loading fails
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        let key_manager = Es256KeyManager::new(&config.key_path)?;
        Ok(Self::with_key_manager(key_manager, config))
    }

    /// Creates a token service with a pre-built key manager
    ///
    /// # Arguments
    ///
    /// * `key_manager` - Loaded P-256 key pair
    /// * `config` - Token service configuration
    pub fn with_key_manager(key_manager: Es256KeyManager, config: TokenServiceConfig) -> Self {
        Self {
            key_manager,
            token_lifetime: Duration::seconds(config.token_expiry_seconds),
        }
    }

    /// Issues a new signed token in compact serialization
    ///
    /// The claim set carries the fixed subject and issuer with the
    /// expiration set one lifetime from now; the header carries the ES256
    /// algorithm tag and a random identifier for traceability of the
    /// issuance (it is not a revocation handle).
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The dot-separated base64url token
    /// * `Err(DomainError)` - Signing failed; not expected with validly
    ///   loaded key material
    pub fn issue(&self) -> Result<String, DomainError> {
        let claims = Claims::new(self.token_lifetime);

        let mut header = Header::new(Algorithm::ES256);
        header.kid = Some(Uuid::new_v4().to_string());

        let token = self.encode_token(&header, &claims)?;
        tracing::debug!("issued token with kid {:?}", header.kid);
        Ok(token)
    }

    /// Verifies a compact token and classifies it
    ///
    /// Classification order is part of the contract:
    ///
    /// 1. An unparseable token is `NotValid`, with no further checks.
    /// 2. An expired token is `Expired`, even when its signature does not
    ///    verify against the service key.
    /// 3. Otherwise the signature decides between `Valid` and `NotValid`.
    ///
    /// Never fails and never panics; malformed input is an expected,
    /// common outcome.
    pub fn verify(&self, token: &str) -> TokenVerdict {
        let parsed = match SignedToken::parse(token) {
            Ok(parsed) => parsed,
            Err(_) => return TokenVerdict::NotValid,
        };

        let expired = parsed.claims.is_expired();
        let signature_valid = jsonwebtoken::crypto::verify(
            &parsed.signature,
            parsed.message.as_bytes(),
            self.key_manager.decoding_key(),
            Algorithm::ES256,
        )
        .unwrap_or(false);

        if expired {
            TokenVerdict::Expired
        } else if signature_valid {
            TokenVerdict::Valid
        } else {
            TokenVerdict::NotValid
        }
    }

    /// Encodes and signs a claim set under the given header
    pub(crate) fn encode_token(
        &self,
        header: &Header,
        claims: &Claims,
    ) -> Result<String, DomainError> {
        encode(header, claims, self.key_manager.encoding_key()).map_err(|e| {
            tracing::error!("token signing failed: {}", e);
            DomainError::Token(TokenError::SigningFailed)
        })
    }
}
