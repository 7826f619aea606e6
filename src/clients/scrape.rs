use anyhow::Result;
use reqwest::Client;
use serde::Serialize;

/// Client for the external scraping API.
///
/// Calls are strictly best-effort: every caller absorbs failures and
/// degrades to the synthetic generator, so errors here are plain
/// `anyhow` values with enough context to log.
#[derive(Clone)]
pub struct ScrapeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
}

impl ScrapeClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_shared_client(Client::new(), base_url, api_key)
    }

    /// Reuses an application-wide HTTP client for connection pooling.
    #[must_use]
    pub fn with_shared_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetches a page through the scraping API and returns the raw
    /// JSON payload the API produced for it.
    pub async fn scrape(&self, url: &str) -> Result<serde_json::Value> {
        let endpoint = format!("{}/v1/data/scrape", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&ScrapeRequest { url })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Scrape API error: {} - {}", status, body));
        }

        let payload: serde_json::Value = response.json().await?;
        Ok(payload)
    }
}
