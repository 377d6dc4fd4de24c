use anyhow::{Context, Result, bail};
use async_trait::async_trait;

use crate::config::{DF, PROXY};
use crate::domain::{AssetRecord, parse_listings};
use crate::server::ErrorResponse;

/// Abstract interface for fetching one listings snapshot.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Fetch the full snapshot. One call per session; failures are terminal
    /// (no retry here), so the message must be good enough to show the user.
    async fn fetch_snapshot(&self) -> Result<Vec<AssetRecord>>;
}

/// Fetches through the proxy so the provider API key stays server-side.
pub struct ProxySource {
    base_url: String,
    client: reqwest::Client,
}

impl ProxySource {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn listings_url(&self) -> String {
        format!("{}{}", self.base_url, PROXY.route)
    }

    // No explicit timeout: a slow upstream is still a healthy upstream, so
    // the transport default decides when to give up.
    fn listings_request(&self) -> reqwest::RequestBuilder {
        self.client.get(self.listings_url())
    }
}

#[async_trait]
impl AssetSource for ProxySource {
    async fn fetch_snapshot(&self) -> Result<Vec<AssetRecord>> {
        let url = self.listings_url();
        if DF.log_fetch {
            log::info!("fetching snapshot from {}", url);
        }

        let response = self
            .listings_request()
            .send()
            .await
            .with_context(|| format!("asset source unreachable at {}", url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed reading asset source response")?;

        if !status.is_success() {
            // The proxy relays failures as {"error": "..."}; fall back to the
            // raw body if it sent something else.
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            bail!("asset source returned {}: {}", status, message);
        }

        let records = parse_listings(&body)?;
        if DF.log_fetch {
            log::info!("snapshot contains {} assets", records.len());
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listings_request_leaves_the_transport_timeout_alone() {
        let source = ProxySource::new("http://localhost:3000".to_string());
        let request = source.listings_request().build().unwrap();
        assert!(request.timeout().is_none());
        assert_eq!(request.url().as_str(), "http://localhost:3000/api/crypto");
    }
}
