use crate::models::Hotel;
use crate::sources::error::FetchError;
use async_trait::async_trait;

/// Common trait for all hotel listing sources
/// This allows swapping the upstream feed (or a test double) behind one seam
#[async_trait]
pub trait HotelSource: Send + Sync {
    /// Fetch the raw hotel listing from the source
    async fn fetch_hotels(&self) -> Result<Vec<Hotel>, FetchError>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
