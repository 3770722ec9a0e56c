//! quoted-string handling for challenge parameter values

use nom::branch::alt;
use nom::bytes::complete::{tag, take, take_while1};
use nom::character::complete::char;
use nom::combinator::recognize;
use nom::multi::many0;
use nom::sequence::{delimited, pair};

use super::ParseResult;

// quoted-pair = "\" CHAR
pub fn quoted_pair(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(pair(tag(b"\\"), take(1usize)))(input)
}

// qdtext = any byte except DQUOTE and backslash
fn qdtext(input: &[u8]) -> ParseResult<&[u8]> {
    take_while1(|c| c != b'"' && c != b'\\')(input)
}

// quoted-string = DQUOTE *(qdtext / quoted-pair) DQUOTE
// Returns the raw content between the quotes, escape sequences included.
pub fn quoted_string(input: &[u8]) -> ParseResult<&[u8]> {
    delimited(
        char('"'),
        recognize(many0(alt((qdtext, quoted_pair)))),
        char('"'),
    )(input)
}

/// Removes the escape character from a quoted-string body.
pub fn unescape_quoted_string(input: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        if input[i] == b'\\' && i + 1 < input.len() {
            result.push(input[i + 1]);
            i += 2;
        } else {
            result.push(input[i]);
            i += 1;
        }
    }

    result
}
