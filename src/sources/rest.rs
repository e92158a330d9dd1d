use crate::models::Listing;
use crate::sources::traits::ListingSource;
use crate::sources::types::BackendConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Reads listings from the hosted backend's REST API
pub struct RestListingSource {
    client: Client,
    config: BackendConfig,
}

impl RestListingSource {
    pub fn new(config: BackendConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            anyhow::bail!("Backend URL is empty");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("listing-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ListingSource for RestListingSource {
    async fn fetch_all(&self) -> Result<Vec<Listing>> {
        let url = self.config.listings_url();
        info!("Fetching listings from {}", self.config.table);
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", self.config.api_key.as_str())
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .context("Failed to reach listings backend")?;

        if !response.status().is_success() {
            warn!("Backend returned status: {}", response.status());
            anyhow::bail!("Failed to fetch listings: {}", response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        debug!("Downloaded {} bytes of JSON", body.len());

        let listings: Vec<Listing> =
            serde_json::from_str(&body).context("Failed to decode listings")?;
        info!("Fetched {} listings", listings.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "rest"
    }
}
