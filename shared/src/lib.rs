//! Shared utilities and common types for the OTP sign-in server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types and startup loading
//! - Configuration error type
//! - Utility functions (phone normalization, masking)
//! - Common type definitions

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LogFormat, LoggingConfig, ProviderConfig, ServerConfig,
    SessionConfig, VerificationConfig,
};
pub use errors::ConfigError;
pub use types::Channel;
pub use utils::phone;
