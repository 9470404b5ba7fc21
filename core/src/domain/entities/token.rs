//! Token entities for ES256-signed bearer tokens.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, Header};
use serde::{Deserialize, Serialize};

use crate::errors::TokenError;

/// Fixed subject claim carried by every issued token
pub const TOKEN_SUBJECT: &str = "testing";

/// Issuer claim identifying this service
pub const TOKEN_ISSUER: &str = "http://localhost";

/// Default token lifetime (1 minute)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 60;

/// Claims structure for the token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject
    pub sub: String,

    /// Issuer
    pub iss: String,

    /// Expiration timestamp in seconds since the Unix epoch
    pub exp: i64,
}

impl Claims {
    /// Creates the claim set for a freshly issued token
    ///
    /// # Arguments
    ///
    /// * `lifetime` - How long the token stays valid from now
    ///
    /// # Returns
    ///
    /// A new `Claims` instance with the fixed subject and issuer and the
    /// expiration set `lifetime` in the future
    pub fn new(lifetime: Duration) -> Self {
        let expiry = Utc::now() + lifetime;

        Self {
            sub: TOKEN_SUBJECT.to_string(),
            iss: TOKEN_ISSUER.to_string(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks whether the expiration instant is strictly before now
    pub fn is_expired(&self) -> bool {
        self.exp < Utc::now().timestamp()
    }
}

/// A compact token parsed into its structured form.
///
/// Parsing validates structure only: three dot-separated segments, valid
/// base64url encoding, JSON header and claims, and the ES256 algorithm tag.
/// Whether the signature matches the service key is the verifier's question.
#[derive(Debug, Clone)]
pub struct SignedToken {
    /// Decoded JOSE header carrying the algorithm tag and key identifier
    pub header: Header,

    /// Decoded claim set
    pub claims: Claims,

    /// The `header.claims` portion the signature was computed over
    pub message: String,

    /// Signature segment, still base64url-encoded
    pub signature: String,
}

impl SignedToken {
    /// Parses a compact three-segment token
    ///
    /// # Arguments
    ///
    /// * `token` - The dot-separated base64url token string
    ///
    /// # Returns
    ///
    /// * `Ok(SignedToken)` - The structured form
    /// * `Err(TokenError)` - The token is structurally invalid; malformed
    ///   input is an expected outcome and never panics
    pub fn parse(token: &str) -> Result<Self, TokenError> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(TokenError::InvalidTokenFormat);
        }

        let header = jsonwebtoken::decode_header(token)
            .map_err(|_| TokenError::InvalidTokenFormat)?;
        if header.alg != Algorithm::ES256 {
            return Err(TokenError::UnsupportedAlgorithm);
        }

        let claims_json = URL_SAFE_NO_PAD
            .decode(segments[1])
            .map_err(|_| TokenError::InvalidTokenFormat)?;
        let claims: Claims =
            serde_json::from_slice(&claims_json).map_err(|_| TokenError::InvalidClaims)?;

        // The signature segment must at least be well-formed base64url
        URL_SAFE_NO_PAD
            .decode(segments[2])
            .map_err(|_| TokenError::InvalidTokenFormat)?;

        Ok(Self {
            header,
            claims,
            message: format!("{}.{}", segments[0], segments[1]),
            signature: segments[2].to_string(),
        })
    }
}
