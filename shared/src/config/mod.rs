//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `provider` - Verification provider credentials and endpoint
//! - `server` - HTTP server configuration
//! - `session` - Signed session cookie configuration
//! - `verification` - Sign-in flow settings (country code, channel, timeout)
//!
//! Everything is read from process environment variables (a `.env` file is
//! honoured in development). Required values have no defaults: a missing
//! credential or secret stops the server at startup.

pub mod environment;
pub mod provider;
pub mod server;
pub mod session;
pub mod verification;

use serde::Deserialize;
use std::time::Duration;

use crate::errors::ConfigError;
use crate::types::Channel;
use crate::utils::phone::is_valid_country_code;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use provider::{ProviderConfig, DEFAULT_VERIFY_BASE_URL};
pub use server::ServerConfig;
pub use session::{SessionConfig, MIN_SESSION_SECRET_LEN};
pub use verification::{VerificationConfig, DEFAULT_TIMEOUT_SECS};

/// Complete application configuration combining all sub-configurations
#[derive(Debug)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Session cookie configuration
    pub session: SessionConfig,

    /// Verification provider configuration
    pub provider: ProviderConfig,

    /// Sign-in flow configuration
    pub verification: VerificationConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Flat view of the environment, one field per variable (lowercased)
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    environment: Option<String>,
    server_host: Option<String>,
    server_port: Option<String>,
    server_workers: Option<String>,
    twilio_account_sid: Option<String>,
    twilio_auth_token: Option<String>,
    twilio_verify_service_sid: Option<String>,
    twilio_verify_base_url: Option<String>,
    default_country_code: Option<String>,
    verification_channel: Option<String>,
    provider_timeout_secs: Option<String>,
    session_secret: Option<String>,
    session_cookie_name: Option<String>,
    session_ttl_secs: Option<String>,
    session_cookie_secure: Option<String>,
    log_level: Option<String>,
    log_format: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = ::config::Config::builder()
            .add_source(::config::Environment::default().try_parsing(false))
            .build()?;

        Self::from_config(source)
    }

    /// Build and validate configuration from an already assembled source
    pub fn from_config(source: ::config::Config) -> Result<Self, ConfigError> {
        let raw: RawSettings = source.try_deserialize()?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSettings) -> Result<Self, ConfigError> {
        let environment = match present(raw.environment) {
            Some(value) => value
                .parse::<Environment>()
                .map_err(|e| ConfigError::invalid("ENVIRONMENT", e))?,
            None => Environment::default(),
        };

        let mut server = ServerConfig::default();
        if let Some(host) = present(raw.server_host) {
            server.host = host;
        }
        if let Some(port) = present(raw.server_port) {
            server.port = parse_number("SERVER_PORT", &port)?;
        }
        if let Some(workers) = present(raw.server_workers) {
            server.workers = parse_number("SERVER_WORKERS", &workers)?;
        }

        let timeout_secs = match present(raw.provider_timeout_secs) {
            Some(value) => parse_number::<u64>("PROVIDER_TIMEOUT_SECS", &value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "PROVIDER_TIMEOUT_SECS",
                "must be at least 1 second",
            ));
        }
        let timeout = Duration::from_secs(timeout_secs);

        let mut provider = ProviderConfig::new(
            required(raw.twilio_account_sid, "TWILIO_ACCOUNT_SID")?,
            required(raw.twilio_auth_token, "TWILIO_AUTH_TOKEN")?,
            required(raw.twilio_verify_service_sid, "TWILIO_VERIFY_SERVICE_SID")?,
        )
        .with_request_timeout(timeout);
        if let Some(base_url) = present(raw.twilio_verify_base_url) {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(ConfigError::invalid(
                    "TWILIO_VERIFY_BASE_URL",
                    "must be an http(s) URL",
                ));
            }
            provider = provider.with_base_url(base_url.trim_end_matches('/'));
        }

        let country_code = required(raw.default_country_code, "DEFAULT_COUNTRY_CODE")?;
        if !is_valid_country_code(&country_code) {
            return Err(ConfigError::invalid(
                "DEFAULT_COUNTRY_CODE",
                "expected 1-3 digits without a leading zero, e.g. 1 or +44",
            ));
        }
        let mut verification = VerificationConfig::new(country_code).with_timeout(timeout);
        if let Some(channel) = present(raw.verification_channel) {
            verification = verification.with_channel(
                channel
                    .parse::<Channel>()
                    .map_err(|e| ConfigError::invalid("VERIFICATION_CHANNEL", e))?,
            );
        }

        let secret = required(raw.session_secret, "SESSION_SECRET")?;
        if secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::invalid(
                "SESSION_SECRET",
                format!("must be at least {} bytes", MIN_SESSION_SECRET_LEN),
            ));
        }
        let mut session = SessionConfig::new(secret);
        session.secure = environment.is_production();
        if let Some(name) = present(raw.session_cookie_name) {
            session.cookie_name = name;
        }
        if let Some(ttl) = present(raw.session_ttl_secs) {
            session.ttl_secs = parse_number("SESSION_TTL_SECS", &ttl)?;
            if session.ttl_secs <= 0 {
                return Err(ConfigError::invalid("SESSION_TTL_SECS", "must be positive"));
            }
        }
        if let Some(secure) = present(raw.session_cookie_secure) {
            session.secure = parse_bool("SESSION_COOKIE_SECURE", &secure)?;
        }

        let mut logging = LoggingConfig::for_environment(environment);
        if let Some(level) = present(raw.log_level) {
            logging.level = level;
        }
        if let Some(format) = present(raw.log_format) {
            logging.format = format
                .parse()
                .map_err(|e: String| ConfigError::invalid("LOG_FORMAT", e))?;
        }

        Ok(Self {
            environment,
            server,
            session,
            provider,
            verification,
            logging,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

/// Treat unset and blank variables the same way
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: Option<String>, key: &'static str) -> Result<String, ConfigError> {
    present(value).ok_or(ConfigError::Missing { key })
}

fn parse_number<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| ConfigError::invalid(key, e.to_string()))
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::invalid(key, format!("not a boolean: {}", other))),
    }
}
