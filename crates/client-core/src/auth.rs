//! Two-phase authenticated request orchestration
//!
//! A request against the device goes out unauthenticated first. When the
//! device answers 401 the `WWW-Authenticate` challenge is parsed, the Digest
//! proof is computed from the request's own method and path, and the request
//! is reissued exactly once with the `Authorization` header attached. The
//! outcome of that retry is final: a device that rejects the computed
//! credentials gets reported, not retried again.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, WWW_AUTHENTICATE};
use reqwest::{Client, Method, Response, StatusCode};
use tracing::{debug, info};
use url::Url;

use antview_digest_core::{build_authorization_header, parse_challenge, DigestAuthParams};

use crate::error::{ClientError, Result};

/// Issues `method url` with `headers`, answering a Digest challenge once.
///
/// Any initial status other than 401 is returned unchanged. On 401 the
/// challenge header is required; its absence is a protocol error and no
/// retry is attempted.
pub async fn authenticated_request(
    http: &Client,
    method: Method,
    url: &str,
    username: &str,
    password: &str,
    headers: HeaderMap,
) -> Result<Response> {
    debug!(%url, "issuing unauthenticated request");
    let initial = http
        .request(method.clone(), url)
        .headers(headers.clone())
        .send()
        .await?;

    if initial.status() != StatusCode::UNAUTHORIZED {
        return Ok(initial);
    }

    let www_authenticate = initial
        .headers()
        .get(WWW_AUTHENTICATE)
        .ok_or_else(|| ClientError::Protocol("no WWW-Authenticate header found".to_string()))?
        .to_str()
        .map_err(|_| {
            ClientError::Protocol("WWW-Authenticate header is not valid text".to_string())
        })?;

    let challenge =
        parse_challenge(www_authenticate).map_err(|e| ClientError::Protocol(e.to_string()))?;
    info!(
        realm = challenge.realm.as_deref().unwrap_or(""),
        "authentication required, retrying with digest credentials"
    );

    let request_uri = request_uri(url)?;
    let params =
        DigestAuthParams::for_challenge(username, password, method.as_str(), &request_uri, challenge);
    let authorization = HeaderValue::from_str(&build_authorization_header(&params))
        .map_err(|_| ClientError::Protocol("computed Authorization header is invalid".to_string()))?;

    // The computed header wins over anything the caller supplied under the
    // same name; all other caller headers ride along unchanged.
    let mut retry_headers = headers;
    retry_headers.insert(AUTHORIZATION, authorization);

    Ok(http
        .request(method, url)
        .headers(retry_headers)
        .send()
        .await?)
}

// Path plus query string; scheme, host and fragment never enter the digest.
fn request_uri(url: &str) -> Result<String> {
    let parsed =
        Url::parse(url).map_err(|e| ClientError::Config(format!("invalid device URL {url}: {e}")))?;
    Ok(match parsed.query() {
        Some(query) => format!("{}?{}", parsed.path(), query),
        None => parsed.path().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uri_is_path_only() {
        assert_eq!(
            request_uri("http://10.0.0.5/cgi-bin/stats.cgi").unwrap(),
            "/cgi-bin/stats.cgi"
        );
    }

    #[test]
    fn test_request_uri_keeps_the_query_string() {
        assert_eq!(
            request_uri("http://10.0.0.5:8080/cgi-bin/chart.cgi?type=hour&span=24").unwrap(),
            "/cgi-bin/chart.cgi?type=hour&span=24"
        );
    }

    #[test]
    fn test_request_uri_drops_the_fragment() {
        assert_eq!(
            request_uri("http://10.0.0.5/cgi-bin/summary.cgi#top").unwrap(),
            "/cgi-bin/summary.cgi"
        );
    }

    #[test]
    fn test_request_uri_rejects_relative_urls() {
        assert!(request_uri("/cgi-bin/stats.cgi").is_err());
    }
}
