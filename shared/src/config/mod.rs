//! Configuration module
//!
//! Configuration is read from environment variables with development
//! defaults, so the server starts without any setup.

pub mod server;

pub use server::ServerConfig;
