//! Parser for the WWW-Authenticate Digest challenge value

use std::str;

use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while1};
use nom::character::complete::space1;
use nom::combinator::{eof, map, map_res, value};
use nom::multi::separated_list0;
use nom::sequence::{preceded, separated_pair, terminated};

use super::quoted::{quoted_string, unescape_quoted_string};
use super::{comma, equal, token, ParseResult};
use crate::error::{Error, Result};
use crate::types::DigestChallenge;

// auth-scheme = "Digest", terminated by whitespace or end of input
fn scheme(input: &[u8]) -> ParseResult<&[u8]> {
    terminated(tag_no_case(b"Digest"), alt((space1, eof)))(input)
}

// auth-value = quoted-string / token
fn auth_value(input: &[u8]) -> ParseResult<String> {
    alt((
        map_res(map(quoted_string, unescape_quoted_string), String::from_utf8),
        map_res(token, |bytes| str::from_utf8(bytes).map(String::from)),
    ))(input)
}

// auth-param = token EQUAL auth-value
fn auth_param(input: &[u8]) -> ParseResult<(String, String)> {
    map_res(separated_pair(token, equal, auth_value), |(name, val)| {
        str::from_utf8(name).map(|n| (n.to_string(), val))
    })(input)
}

// A list entry that does not fit the auth-param grammar is skipped rather
// than failing the whole challenge.
fn digest_param(input: &[u8]) -> ParseResult<Option<(String, String)>> {
    alt((
        map(auth_param, Some),
        value(None, take_while1(|c| c != b',')),
    ))(input)
}

// challenge = "Digest" LWS digest-param *(COMMA digest-param)
pub(crate) fn challenge(input: &[u8]) -> ParseResult<DigestChallenge> {
    map(
        preceded(scheme, separated_list0(comma, digest_param)),
        |params| {
            let mut challenge = DigestChallenge::default();
            for (name, value) in params.into_iter().flatten() {
                match name.to_ascii_lowercase().as_str() {
                    "realm" => challenge.realm = Some(value),
                    "nonce" => challenge.nonce = Some(value),
                    "qop" => challenge.qop = Some(value),
                    "opaque" => challenge.opaque = Some(value),
                    "algorithm" => challenge.algorithm = Some(value),
                    _ => {}
                }
            }
            challenge
        },
    )(input)
}

/// Parses a `WWW-Authenticate` header value into a [`DigestChallenge`].
///
/// Only the absence of the `Digest` scheme token is an error; missing or
/// malformed parameters simply leave the matching challenge fields unset, so
/// a partial header still yields a usable challenge.
pub fn parse_challenge(header: &str) -> Result<DigestChallenge> {
    let (_, challenge) = challenge(header.trim_start().as_bytes())
        .map_err(|_| Error::NotDigest(header.to_string()))?;
    Ok(challenge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_challenge() {
        let header = r#"Digest realm="antMiner", nonce="6547aa2c3f9a7d31", qop="auth""#;
        let challenge = parse_challenge(header).unwrap();

        assert_eq!(challenge.realm.as_deref(), Some("antMiner"));
        assert_eq!(challenge.nonce.as_deref(), Some("6547aa2c3f9a7d31"));
        assert_eq!(challenge.qop.as_deref(), Some("auth"));
        assert_eq!(challenge.opaque, None);
        assert_eq!(challenge.algorithm, None);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let header = r#"Digest realm="antMiner", nonce="N1", qop="auth", opaque="o1""#;
        assert_eq!(
            parse_challenge(header).unwrap(),
            parse_challenge(header).unwrap()
        );
    }

    #[test]
    fn test_quoted_and_unquoted_values_are_equivalent() {
        let quoted = parse_challenge(r#"Digest nonce="abc""#).unwrap();
        let unquoted = parse_challenge("Digest nonce=abc").unwrap();
        assert_eq!(quoted.nonce.as_deref(), Some("abc"));
        assert_eq!(quoted.nonce, unquoted.nonce);
    }

    #[test]
    fn test_unknown_params_are_ignored() {
        let header = r#"Digest realm="r", domain="sip:example.com", stale=FALSE, algorithm=MD5, nonce="n""#;
        let challenge = parse_challenge(header).unwrap();

        assert_eq!(challenge.realm.as_deref(), Some("r"));
        assert_eq!(challenge.nonce.as_deref(), Some("n"));
        assert_eq!(challenge.algorithm.as_deref(), Some("MD5"));
        assert_eq!(challenge.qop, None);
    }

    #[test]
    fn test_malformed_entry_is_skipped() {
        let header = r#"Digest realm="r", !!garbage!!, nonce="n""#;
        let challenge = parse_challenge(header).unwrap();

        assert_eq!(challenge.realm.as_deref(), Some("r"));
        assert_eq!(challenge.nonce.as_deref(), Some("n"));
    }

    #[test]
    fn test_escaped_quote_in_value() {
        let challenge = parse_challenge(r#"Digest realm="ant\"Miner""#).unwrap();
        assert_eq!(challenge.realm.as_deref(), Some("ant\"Miner"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let challenge = parse_challenge(r#"digest realm="r""#).unwrap();
        assert_eq!(challenge.realm.as_deref(), Some("r"));
    }

    #[test]
    fn test_missing_scheme_is_an_error() {
        assert!(parse_challenge(r#"Basic realm="r""#).is_err());
        assert!(parse_challenge("").is_err());
        // A longer token starting with "Digest" is a different scheme.
        assert!(parse_challenge(r#"DigestX realm="r""#).is_err());
    }

    #[test]
    fn test_bare_scheme_yields_empty_challenge() {
        let challenge = parse_challenge("Digest").unwrap();
        assert_eq!(challenge, DigestChallenge::default());
    }
}
