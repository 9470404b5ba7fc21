//! Token service module for ES256 token management
//!
//! This module handles the full token lifecycle:
//! - P-256 key loading from PEM key material
//! - Signed token issuance in compact serialization
//! - Verification with the three-way trust verdict

mod config;
mod key_manager;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use key_manager::Es256KeyManager;
pub use service::TokenService;
