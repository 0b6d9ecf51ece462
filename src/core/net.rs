// src/core/net.rs
//
// Single-attempt HTTP(S) GET. No retries; the blocking client's default
// timeout is the only timeout.

use reqwest::blocking::Client;
use url::Url;

use crate::{
    config::consts::USER_AGENT,
    error::{Result, ScrapeError},
};

/// Source of page markup. The scrape pipeline only sees this trait.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                loge!("Fetch: client setup failed: {e}");
                ScrapeError::Client(e)
            })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        // The url goes in our own message; strip reqwest's copy.
        let net_err = |source: reqwest::Error| ScrapeError::Network {
            url: url.to_string(),
            source: source.without_url(),
        };

        logf!("Fetch: GET {url}");
        let resp = self.client.get(url.clone()).send().map_err(net_err)?;
        logd!("Fetch: {} ← {url}", resp.status());

        let body = resp
            .error_for_status()
            .map_err(net_err)?
            .text()
            .map_err(net_err)?;
        logf!("Fetch: OK bytes={} url={url}", body.len());
        Ok(body)
    }
}

/// Parse user input as an absolute http(s) URL.
pub fn parse_url(s: &str) -> Result<Url> {
    let url = Url::parse(s.trim())
        .map_err(|e| ScrapeError::InvalidInput(format!("Invalid URL `{}`: {e}", s.trim())))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ScrapeError::InvalidInput(format!(
            "Unsupported URL scheme `{other}` (use http or https)"
        ))),
    }
}
