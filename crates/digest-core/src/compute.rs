//! Digest hash computation
//!
//! The device's embedded server speaks the single-round MD5 scheme from
//! RFC 2617. The hash choice is fixed by the device; interoperability breaks
//! with anything else.

use rand::Rng;

use crate::types::DigestAuthParams;

/// Lowercase hex MD5 fingerprint of `data` (32 characters).
pub fn md5_hex(data: &str) -> String {
    format!("{:x}", md5::compute(data.as_bytes()))
}

/// Fresh client nonce: 8 random bytes, hex encoded.
pub fn generate_cnonce() -> String {
    let mut bytes = [0u8; 8];
    rand::thread_rng().fill(&mut bytes[..]);
    hex::encode(bytes)
}

/// Computes the response proof for `params`.
///
/// `HA1 = MD5(username:realm:password)`, `HA2 = MD5(method:uri)`, and the
/// proof is `MD5(HA1:nonce:nc:cnonce:qop:HA2)`. Empty fields keep their slot
/// in the colon-joined input.
pub fn digest_response(params: &DigestAuthParams) -> String {
    let ha1 = md5_hex(&format!(
        "{}:{}:{}",
        params.username, params.realm, params.password
    ));
    let ha2 = md5_hex(&format!("{}:{}", params.method, params.uri));

    md5_hex(&format!(
        "{}:{}:{}:{}:{}:{}",
        ha1, params.nonce, params.nc, params.cnonce, params.qop, ha2
    ))
}

/// Serializes the full `Authorization` header value for `params`.
pub fn build_authorization_header(params: &DigestAuthParams) -> String {
    params.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_known_vectors() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_md5_hex_is_deterministic() {
        assert_eq!(md5_hex("root:antMiner:root"), md5_hex("root:antMiner:root"));
    }

    #[test]
    fn test_generate_cnonce_shape() {
        let cnonce = generate_cnonce();
        assert_eq!(cnonce.len(), 16);
        assert!(cnonce.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_cnonce_is_randomized() {
        assert_ne!(generate_cnonce(), generate_cnonce());
    }
}
