use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of the upstream hotel fetch. Each variant renders as a
/// single human-readable message for the display layer; the prior hotel
/// list is left untouched when one of these is returned.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error while fetching hotels: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to load hotels (invalid response: {0})")]
    Status(StatusCode),

    #[error("failed to decode hotel listing: {0}")]
    Decode(#[source] serde_json::Error),
}
