use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Where listings are loaded from.
/// The filter pipeline only ever sees the snapshot returned by `fetch_all`.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch every listing currently known to the source
    async fn fetch_all(&self) -> Result<Vec<Listing>>;

    /// Get the name of the source, for logs
    fn source_name(&self) -> &'static str;
}
