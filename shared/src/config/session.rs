//! Session cookie configuration

use secrecy::{ExposeSecret, Secret};

/// Minimum length of the session signing secret in bytes
pub const MIN_SESSION_SECRET_LEN: usize = 32;

/// Signed session cookie settings
#[derive(Debug)]
pub struct SessionConfig {
    /// Key material the cookie signing key is derived from
    pub secret: Secret<String>,

    /// Session cookie name
    pub cookie_name: String,

    /// Session lifetime in seconds
    pub ttl_secs: i64,

    /// Session cookie secure flag (HTTPS only)
    pub secure: bool,
}

impl SessionConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Secret::new(secret.into()),
            cookie_name: default_cookie_name(),
            ttl_secs: default_ttl_secs(),
            secure: false,
        }
    }

    /// Raw secret bytes for key derivation
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

pub(crate) fn default_cookie_name() -> String {
    String::from("otp_session")
}

pub(crate) fn default_ttl_secs() -> i64 {
    600 // 10 minutes, the provider's default code lifetime
}
