//! Error types for device client operations

use thiserror::Error;

/// A type alias for handling `Result`s with [`ClientError`]
pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures a device call can surface.
///
/// The kinds are distinct so callers can tell "fix my setup" (`Config`) from
/// a transient network issue (`Transport`) from the device rejecting the
/// request (`Protocol`, `HttpStatus`).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required configuration is missing or unusable
    #[error("configuration error: {0}")]
    Config(String),

    /// The device demanded authentication but the challenge was unusable
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The network call itself failed
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The final response carried a non-success status
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
}
