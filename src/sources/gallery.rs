use anyhow::{Context, Result};
use futures::future::join_all;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Probes gallery image URLs for reachability at ingestion time, so dead
/// links never make it into the stored listing.
pub struct GalleryValidator {
    client: Client,
}

impl GalleryValidator {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// HEAD-probe every URL concurrently and keep the ones that answer with
    /// a success status, preserving their relative order. A failed probe
    /// only drops its own URL; if every probe fails the result is empty,
    /// not an error.
    pub async fn validate(&self, gallery: &[String]) -> Vec<String> {
        let probes = gallery.iter().map(|url| {
            let client = self.client.clone();
            async move {
                match client.head(url).send().await {
                    Ok(response) if response.status().is_success() => Some(url.clone()),
                    Ok(response) => {
                        debug!("Dropping gallery URL {} (status {})", url, response.status());
                        None
                    }
                    Err(err) => {
                        debug!("Dropping gallery URL {} ({})", url, err);
                        None
                    }
                }
            }
        });

        join_all(probes).await.into_iter().flatten().collect()
    }
}
