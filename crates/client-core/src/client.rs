//! Device endpoint client
//!
//! The device exposes a fixed set of CGI endpoints, each returning a JSON
//! document. Every accessor performs one authenticated GET; no state is
//! shared between calls, so overlapping polls need no coordination.

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, REFERER, USER_AGENT,
};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::warn;

use crate::auth::authenticated_request;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::types::EndpointResult;

const SYSTEM_INFO_PATH: &str = "/cgi-bin/get_system_info.cgi";
const SUMMARY_PATH: &str = "/cgi-bin/summary.cgi";
const POOLS_PATH: &str = "/cgi-bin/pools.cgi";
const CHART_PATH: &str = "/cgi-bin/chart.cgi";
const STATS_PATH: &str = "/cgi-bin/stats.cgi";

/// Client for an Antminer-style device web API.
pub struct AntminerClient {
    http: Client,
    config: ClientConfig,
}

impl AntminerClient {
    /// Creates a client over `config`. Credentials are owned here for the
    /// lifetime of the client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(AntminerClient { http, config })
    }

    /// Creates a client from the `ANTMINER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        AntminerClient::new(ClientConfig::from_env()?)
    }

    /// Fetches device identity and firmware details.
    pub async fn system_info(&self) -> Result<Value> {
        self.fetch_json(SYSTEM_INFO_PATH).await
    }

    /// Fetches uptime and status indicators.
    pub async fn summary(&self) -> Result<Value> {
        self.fetch_json(SUMMARY_PATH).await
    }

    /// Fetches the configured mining pools.
    pub async fn pools(&self) -> Result<Value> {
        self.fetch_json(POOLS_PATH).await
    }

    /// Fetches historical hashrate data.
    pub async fn chart(&self) -> Result<Value> {
        self.fetch_json(CHART_PATH).await
    }

    /// Fetches detailed stats: hashrate, temperatures, fans, chains.
    pub async fn stats(&self) -> Result<Value> {
        self.fetch_json(STATS_PATH).await
    }

    pub async fn poll_system_info(&self) -> EndpointResult {
        self.envelope(self.system_info().await)
    }

    pub async fn poll_summary(&self) -> EndpointResult {
        self.envelope(self.summary().await)
    }

    pub async fn poll_pools(&self) -> EndpointResult {
        self.envelope(self.pools().await)
    }

    pub async fn poll_chart(&self) -> EndpointResult {
        self.envelope(self.chart().await)
    }

    pub async fn poll_stats(&self) -> EndpointResult {
        self.envelope(self.stats().await)
    }

    async fn fetch_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.config.host, path);
        let response = authenticated_request(
            &self.http,
            Method::GET,
            &url,
            &self.config.username,
            &self.config.password,
            self.device_headers(),
        )
        .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    // The embedded server is picky about requests looking like its own web
    // UI, so every call carries the browser-shaped header set.
    fn device_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/javascript, */*; q=0.01"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("fr-FR,fr;q=0.9,en-US;q=0.8,en;q=0.7"),
        );
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert("dnt", HeaderValue::from_static("1"));
        if let Ok(referer) = HeaderValue::from_str(&format!("{}/", self.config.host)) {
            headers.insert(REFERER, referer);
        }
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            ),
        );
        headers.insert("x-requested-with", HeaderValue::from_static("XMLHttpRequest"));
        headers
    }

    fn envelope(&self, outcome: Result<Value>) -> EndpointResult {
        match outcome {
            Ok(data) => EndpointResult::ok(data),
            Err(err) => {
                warn!(error = %err, "device poll failed");
                EndpointResult::failure(&err)
            }
        }
    }
}
