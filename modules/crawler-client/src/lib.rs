//! Client for the page-rendering crawler service. The service drives a
//! headless browser, renders a page and returns it as markdown; browser and
//! session lifecycle stay on the server side.

pub mod error;

pub use error::{CrawlerError, Result};

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-request crawl settings. Reusing one `session_id` across calls lets
/// the service keep a browser session warm between pages.
#[derive(Debug, Clone, Serialize)]
pub struct RenderConfig {
    pub headless: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            headless: true,
            session_id: None,
        }
    }
}

/// Outcome of one render: either markdown content or an error message from
/// the crawl, with `success` telling them apart.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlOutcome {
    pub success: bool,
    #[serde(default)]
    pub markdown: String,
    #[serde(default)]
    pub error_message: Option<String>,
}

pub struct CrawlerClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl CrawlerClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
        }
    }

    /// Render one URL to markdown via the service's /render endpoint.
    ///
    /// A crawl-level failure (page unreachable, render timeout) comes back
    /// as `Ok` with `success == false`; only transport and API errors are
    /// `Err`.
    pub async fn render(&self, url: &str, config: &RenderConfig) -> Result<CrawlOutcome> {
        let mut endpoint = format!("{}/render", self.base_url);
        if let Some(ref token) = self.token {
            endpoint.push_str(&format!("?token={token}"));
        }

        let body = serde_json::json!({
            "url": url,
            "headless": config.headless,
            "session_id": config.session_id,
        });

        let resp = self
            .client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(CrawlerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let outcome: CrawlOutcome = resp.json().await?;
        if !outcome.success {
            tracing::warn!(
                url,
                error = outcome.error_message.as_deref().unwrap_or("unknown"),
                "Crawl failed"
            );
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_headless_without_session() {
        let config = RenderConfig::default();
        assert!(config.headless);
        assert!(config.session_id.is_none());
    }

    #[test]
    fn outcome_deserializes_with_missing_fields() {
        let outcome: CrawlOutcome = serde_json::from_str(r#"{ "success": true }"#).unwrap();
        assert!(outcome.success);
        assert!(outcome.markdown.is_empty());
        assert!(outcome.error_message.is_none());

        let outcome: CrawlOutcome =
            serde_json::from_str(r#"{ "success": false, "error_message": "timeout" }"#).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.error_message.as_deref(), Some("timeout"));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = CrawlerClient::new("http://crawler:3000/", None);
        assert_eq!(client.base_url, "http://crawler:3000");
    }
}
