pub mod auth;

pub use auth::{DigestAuthParams, DigestChallenge, NONCE_COUNT};
