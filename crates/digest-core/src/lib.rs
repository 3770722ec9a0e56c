//! Digest Authentication core for Antminer-style device APIs
//!
//! This crate provides the protocol pieces of HTTP Digest Authentication
//! (RFC 2617 style) needed to talk to a mining device's embedded web server:
//! challenge parsing, credential-hash computation, and serialization of the
//! `Authorization` header value. It performs no I/O; the companion client
//! crate drives the challenge/retry round-trip.

// Declare modules
pub mod compute;
pub mod error;
pub mod parser;
pub mod types;

// Re-export key public items
pub use compute::{build_authorization_header, digest_response, generate_cnonce, md5_hex};
pub use error::{Error, Result};
pub use parser::parse_challenge;
pub use types::{DigestAuthParams, DigestChallenge, NONCE_COUNT};
