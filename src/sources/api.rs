use crate::models::Hotel;
use crate::sources::error::FetchError;
use crate::sources::traits::HotelSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Production hotel listing endpoint base
pub const DEFAULT_API_BASE: &str = "https://technology.lastminute.com/api";

/// Client for the remote hotel listing API
pub struct HotelApiClient {
    client: Client,
    base_url: String,
}

impl HotelApiClient {
    /// Create a client against the production endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl HotelSource for HotelApiClient {
    async fn fetch_hotels(&self) -> Result<Vec<Hotel>, FetchError> {
        let url = format!("{}/hotel.json", self.base_url.trim_end_matches('/'));

        debug!("Fetching hotel listing from {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!("Hotel API returned status: {}", response.status());
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        let hotels: Vec<Hotel> = serde_json::from_str(&body).map_err(FetchError::Decode)?;

        info!("Fetched {} hotels from {}", hotels.len(), self.source_name());
        Ok(hotels)
    }

    fn source_name(&self) -> &'static str {
        "lastminute"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn listing_json() -> serde_json::Value {
        serde_json::json!([{
            "id": 1,
            "name": "Hotel Sunny Palms",
            "location": {
                "address": "Ilica 242",
                "city": "London",
                "latitude": 51.4968,
                "longitude": -0.1031
            },
            "stars": 5,
            "checkIn": { "from": "14:00", "to": "20:00" },
            "checkOut": { "from": "07:00", "to": "10:00" },
            "contact": { "phoneNumber": "+385 21 321 654", "email": "sunny.palms@hotels.com" },
            "gallery": ["https://example.com/1.jpg"],
            "userRating": 8.6,
            "price": 130,
            "currency": "EUR",
            "distanceToCenter": 999
        }])
    }

    #[tokio::test]
    async fn fetches_and_decodes_the_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hotel.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing_json()))
            .mount(&server)
            .await;

        let client = HotelApiClient::with_base_url(server.uri()).unwrap();
        let hotels = client.fetch_hotels().await.unwrap();

        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].name, "Hotel Sunny Palms");
        assert_eq!(hotels[0].location.city, "London");
        assert_eq!(hotels[0].contact.email, "sunny.palms@hotels.com");
        assert_eq!(hotels[0].user_rating, 8.6);
    }

    #[tokio::test]
    async fn non_2xx_response_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hotel.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = HotelApiClient::with_base_url(server.uri()).unwrap();
        let err = client.fetch_hotels().await.unwrap_err();
        assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hotel.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = HotelApiClient::with_base_url(server.uri()).unwrap();
        let err = client.fetch_hotels().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let client = HotelApiClient::with_base_url("http://127.0.0.1:9").unwrap();
        let err = client.fetch_hotels().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
