//! Error types for token issuance and verification
//!
//! Parse failures are consumed inside verification and mapped to a verdict;
//! only key loading and signing surface to callers.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Failed to load signing key: {message}")]
    KeyLoad { message: String },

    #[error("Token signing failed")]
    SigningFailed,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Unsupported signature algorithm")]
    UnsupportedAlgorithm,

    #[error("Invalid token claims")]
    InvalidClaims,
}
