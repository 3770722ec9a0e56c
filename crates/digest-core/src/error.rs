//! Error types for Digest challenge handling

use thiserror::Error;

/// A type alias for handling `Result`s with [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while interpreting an authentication challenge
#[derive(Debug, Error)]
pub enum Error {
    /// The header value did not start with the Digest scheme token
    #[error("not a Digest challenge: {0:?}")]
    NotDigest(String),
}
