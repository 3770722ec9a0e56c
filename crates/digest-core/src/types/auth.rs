//! # Digest Authentication Types
//!
//! This module defines the challenge produced by a device's 401 response and
//! the parameter set used to answer it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::compute::{digest_response, generate_cnonce};

/// Nonce count sent on every request.
///
/// Each call answers a fresh challenge with a fresh cnonce, so the count
/// never advances past first use.
pub const NONCE_COUNT: &str = "00000001";

/// A parsed `WWW-Authenticate` Digest challenge.
///
/// Every field is optional: devices ship partial or sloppy challenge headers
/// and a missing key must not abort the authentication round-trip. Absent
/// fields default to empty values at the point the authorization header is
/// built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestChallenge {
    pub realm: Option<String>,
    pub nonce: Option<String>,
    pub qop: Option<String>,
    pub opaque: Option<String>,
    pub algorithm: Option<String>,
}

/// Inputs for one Digest `Authorization` header.
#[derive(Debug, Clone)]
pub struct DigestAuthParams {
    pub username: String,
    pub password: String,
    pub method: String,
    pub uri: String,
    pub realm: String,
    pub nonce: String,
    pub qop: String,
    pub nc: String,
    pub cnonce: String,
    pub opaque: Option<String>,
}

impl DigestAuthParams {
    /// Builds the parameter set answering `challenge` for one request.
    ///
    /// A missing realm or nonce comes through as an empty string, a missing
    /// qop falls back to `auth`, and the cnonce is freshly randomized. The
    /// challenge is consumed: it belongs to exactly one retry and is never
    /// shared across requests.
    pub fn for_challenge(
        username: &str,
        password: &str,
        method: &str,
        uri: &str,
        challenge: DigestChallenge,
    ) -> Self {
        DigestAuthParams {
            username: username.to_string(),
            password: password.to_string(),
            method: method.to_string(),
            uri: uri.to_string(),
            realm: challenge.realm.unwrap_or_default(),
            nonce: challenge.nonce.unwrap_or_default(),
            qop: challenge.qop.unwrap_or_else(|| "auth".to_string()),
            nc: NONCE_COUNT.to_string(),
            cnonce: generate_cnonce(),
            opaque: challenge.opaque,
        }
    }

    /// The response proof: MD5(HA1:nonce:nc:cnonce:qop:HA2).
    pub fn response(&self) -> String {
        digest_response(self)
    }
}

impl fmt::Display for DigestAuthParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest username=\"{}\"", self.username)?;
        write!(f, ", realm=\"{}\"", self.realm)?;
        write!(f, ", nonce=\"{}\"", self.nonce)?;
        write!(f, ", uri=\"{}\"", self.uri)?;
        write!(f, ", response=\"{}\"", self.response())?;

        // qop, nc and cnonce travel together; an empty qop drops all three.
        if !self.qop.is_empty() {
            write!(f, ", qop={}", self.qop)?;
            write!(f, ", nc={}", self.nc)?;
            write!(f, ", cnonce=\"{}\"", self.cnonce)?;
        }
        if let Some(opaque) = &self.opaque {
            write!(f, ", opaque=\"{}\"", opaque)?;
        }
        Ok(())
    }
}
