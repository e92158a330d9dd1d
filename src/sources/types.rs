use serde::{Deserialize, Serialize};

/// Connection settings for the hosted backend's REST endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`
    pub base_url: String,
    /// Anonymous API key sent as `apikey` and bearer token
    pub api_key: String,
    /// Table holding the listings
    pub table: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Full URL for a bulk read, newest rows first
    pub fn listings_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=*&order=created_at.desc",
            self.base_url.trim_end_matches('/'),
            self.table
        )
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            table: "listings".to_string(),
            timeout_secs: 30,
        }
    }
}
