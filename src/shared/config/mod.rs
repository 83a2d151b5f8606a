//! Server configuration module
//!
//! Everything the server needs to know about its environment lives in
//! [`ServerConfig`] and is handed to components through their constructors.
//! The binary builds it from environment variables with
//! [`ServerConfig::from_env`]; tests build it with [`ServerConfig::builder`].
//!
//! # Environment Variables
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | `sqlite://authbox.db` |
//! | `JWT_SECRET` | required |
//! | `TOKEN_LIFETIME_SECS` | `3600` |
//! | `RESET_TOKEN_LIFETIME_SECS` | `3600` |
//! | `BCRYPT_COST` | `bcrypt::DEFAULT_COST` |
//! | `SERVER_HOST` | `127.0.0.1` |
//! | `SERVER_PORT` | `8000` |

use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

/// Default database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://authbox.db";

/// Default access token lifetime (one hour)
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 3600;

/// Default reset token lifetime (one hour)
pub const DEFAULT_RESET_TOKEN_LIFETIME_SECS: u64 = 3600;

/// bcrypt accepts work factors in this range
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// sqlx connection string for the user store
    pub database_url: String,
    /// HMAC secret used to sign access and reset tokens
    pub jwt_secret: String,
    /// Access token validity window in seconds
    pub token_lifetime_secs: u64,
    /// Reset token validity window in seconds
    pub reset_token_lifetime_secs: u64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Build the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// `from_env` delegates here; tests pass a map instead of touching the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(value) = lookup("TOKEN_LIFETIME_SECS") {
            builder = builder.token_lifetime_secs(parse_var("TOKEN_LIFETIME_SECS", &value)?);
        }
        if let Some(value) = lookup("RESET_TOKEN_LIFETIME_SECS") {
            builder = builder.reset_token_lifetime_secs(parse_var("RESET_TOKEN_LIFETIME_SECS", &value)?);
        }
        if let Some(value) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_var("BCRYPT_COST", &value)?);
        }
        if let Some(host) = lookup("SERVER_HOST") {
            builder = builder.host(host);
        }
        if let Some(value) = lookup("SERVER_PORT") {
            builder = builder.port(parse_var("SERVER_PORT", &value)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_lifetime_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_LIFETIME_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.reset_token_lifetime_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "RESET_TOKEN_LIFETIME_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                reason: format!("must be between {} and {}", MIN_BCRYPT_COST, MAX_BCRYPT_COST),
            });
        }
        Ok(())
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                key: "SERVER_HOST",
                reason: e.to_string(),
            })
    }
}

fn parse_var<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug)]
pub struct ServerConfigBuilder {
    database_url: String,
    jwt_secret: Option<String>,
    token_lifetime_secs: u64,
    reset_token_lifetime_secs: u64,
    bcrypt_cost: u32,
    host: String,
    port: u16,
}

impl Default for ServerConfigBuilder {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: None,
            token_lifetime_secs: DEFAULT_TOKEN_LIFETIME_SECS,
            reset_token_lifetime_secs: DEFAULT_RESET_TOKEN_LIFETIME_SECS,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the access token lifetime
    pub fn token_lifetime_secs(mut self, secs: u64) -> Self {
        self.token_lifetime_secs = secs;
        self
    }

    /// Set the reset token lifetime
    pub fn reset_token_lifetime_secs(mut self, secs: u64) -> Self {
        self.reset_token_lifetime_secs = secs;
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Set the bind host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the bind port
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            database_url: self.database_url,
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_lifetime_secs: self.token_lifetime_secs,
            reset_token_lifetime_secs: self.reset_token_lifetime_secs,
            bcrypt_cost: self.bcrypt_cost,
            host: self.host,
            port: self.port,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
