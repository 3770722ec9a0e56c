//! Client configuration
//!
//! The three values the client needs are read from the process environment
//! once, at construction. Core logic only ever sees the owned config value;
//! nothing looks at the environment past this boundary.

use std::env;

use crate::error::{ClientError, Result};

/// Environment variable naming the device base address, e.g. `http://10.0.0.5`.
pub const ENV_HOST: &str = "ANTMINER_HOST";
/// Environment variable naming the device web UI username.
pub const ENV_USERNAME: &str = "ANTMINER_USERNAME";
/// Environment variable naming the device web UI password.
pub const ENV_PASSWORD: &str = "ANTMINER_PASSWORD";

/// Connection settings for one device.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address of the device web UI, without a trailing slash.
    pub host: String,
    pub username: String,
    pub password: String,
}

impl ClientConfig {
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        ClientConfig {
            host: host.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reads the configuration from `ANTMINER_HOST`, `ANTMINER_USERNAME` and
    /// `ANTMINER_PASSWORD`.
    ///
    /// A missing or empty variable is a fatal configuration error, raised
    /// before any network call is made.
    pub fn from_env() -> Result<Self> {
        Ok(ClientConfig::new(
            required(ENV_HOST)?,
            required(ENV_USERNAME)?,
            required(ENV_PASSWORD)?,
        ))
    }
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ClientError::Config(format!(
            "missing required environment variable: {name}"
        ))),
    }
}
