//! Parsers for the Digest challenge header grammar
//!
//! A challenge value is a scheme token followed by a comma-separated list of
//! `name=value` pairs, where each value is either a token or a quoted-string.
//! The grammar is kept small and explicit so the quoting and escaping rules
//! stay independently testable.

pub mod challenge;
pub mod quoted;

pub use challenge::parse_challenge;

use nom::bytes::complete::{take_while, take_while1};
use nom::character::complete::char;
use nom::sequence::delimited;
use nom::IResult;

/// Type alias for parser results over raw header bytes
pub type ParseResult<'a, O> = IResult<&'a [u8], O>;

// token = 1*<any CHAR except CTLs or separators>
pub(crate) fn token(input: &[u8]) -> ParseResult<&[u8]> {
    take_while1(is_token_char)(input)
}

fn is_token_char(c: u8) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}

// SWS = *( SP / HTAB )
pub(crate) fn sws(input: &[u8]) -> ParseResult<&[u8]> {
    take_while(|c| c == b' ' || c == b'\t')(input)
}

// EQUAL = SWS "=" SWS
pub(crate) fn equal(input: &[u8]) -> ParseResult<char> {
    delimited(sws, char('='), sws)(input)
}

// COMMA = SWS "," SWS
pub(crate) fn comma(input: &[u8]) -> ParseResult<char> {
    delimited(sws, char(','), sws)(input)
}
