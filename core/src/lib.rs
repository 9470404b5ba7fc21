//! # QrPass Core
//!
//! Core business logic and domain layer for the QrPass backend.
//! This crate contains the token entities, the ES256 key manager, the
//! token service, and the error types that sit underneath the HTTP layer.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::{Es256KeyManager, TokenService, TokenServiceConfig};
