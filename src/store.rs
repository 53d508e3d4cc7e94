//! Process-wide hotel list state.

use crate::enrich::Enricher;
use crate::models::Hotel;
use crate::sources::{FetchError, HotelSource};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Lifecycle of the last fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Holds the enriched hotel list for the session. The list is replaced
/// wholesale after a successful refresh and never patched in place; a
/// failed refresh records an error message and leaves the prior list
/// untouched.
pub struct HotelStore {
    list: Vec<Hotel>,
    status: LoadStatus,
    error: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
}

impl HotelStore {
    pub fn new() -> Self {
        Self {
            list: Vec::new(),
            status: LoadStatus::Idle,
            error: None,
            fetched_at: None,
        }
    }

    /// Snapshot of the current hotel list
    pub fn hotels(&self) -> &[Hotel] {
        &self.list
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Message from the last failed refresh, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Fetch from the source, enrich, and replace the list. On failure the
    /// error is recorded and returned; the previous list stays in place.
    pub async fn refresh(
        &mut self,
        source: &dyn HotelSource,
        enricher: &Enricher,
    ) -> Result<usize, FetchError> {
        self.status = LoadStatus::Loading;

        match source.fetch_hotels().await {
            Ok(raw) => {
                let enriched = enricher.enrich(raw).await;
                let count = enriched.len();
                self.list = enriched;
                self.status = LoadStatus::Succeeded;
                self.error = None;
                self.fetched_at = Some(Utc::now());
                info!("Hotel store refreshed with {} hotels", count);
                Ok(count)
            }
            Err(err) => {
                self.status = LoadStatus::Failed;
                self.error = Some(err.to_string());
                warn!("Hotel refresh failed: {}", err);
                Err(err)
            }
        }
    }
}

impl Default for HotelStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, Location, TimeWindow};
    use async_trait::async_trait;

    struct StubSource {
        result: Result<Vec<Hotel>, ()>,
    }

    #[async_trait]
    impl HotelSource for StubSource {
        async fn fetch_hotels(&self) -> Result<Vec<Hotel>, FetchError> {
            match &self.result {
                Ok(hotels) => Ok(hotels.clone()),
                Err(()) => Err(FetchError::Status(reqwest::StatusCode::BAD_GATEWAY)),
            }
        }

        fn source_name(&self) -> &'static str {
            "stub"
        }
    }

    fn hotel(id: u64) -> Hotel {
        Hotel {
            id,
            name: format!("Hotel {id}"),
            location: Location {
                address: "1 High Street".to_string(),
                city: "London".to_string(),
                latitude: 51.5074,
                longitude: -0.1278,
            },
            stars: 4.0,
            check_in: TimeWindow {
                from: "14:00".to_string(),
                to: "20:00".to_string(),
            },
            check_out: TimeWindow {
                from: "07:00".to_string(),
                to: "10:00".to_string(),
            },
            contact: Contact {
                phone_number: String::new(),
                email: String::new(),
            },
            gallery: Vec::new(),
            user_rating: 8.0,
            price: 100.0,
            currency: "GBP".to_string(),
            distance_to_center: 0.0,
        }
    }

    #[tokio::test]
    async fn successful_refresh_replaces_the_list_wholesale() {
        let mut store = HotelStore::new();
        assert_eq!(store.status(), LoadStatus::Idle);

        let first = StubSource {
            result: Ok(vec![hotel(1), hotel(2)]),
        };
        store.refresh(&first, &Enricher::new()).await.unwrap();
        assert_eq!(store.status(), LoadStatus::Succeeded);
        assert_eq!(store.hotels().len(), 2);
        assert!(store.fetched_at().is_some());

        let second = StubSource {
            result: Ok(vec![hotel(3)]),
        };
        store.refresh(&second, &Enricher::new()).await.unwrap();
        assert_eq!(store.hotels().len(), 1);
        assert_eq!(store.hotels()[0].id, 3);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_prior_list() {
        let mut store = HotelStore::new();
        let good = StubSource {
            result: Ok(vec![hotel(1)]),
        };
        store.refresh(&good, &Enricher::new()).await.unwrap();

        let bad = StubSource { result: Err(()) };
        let err = store.refresh(&bad, &Enricher::new()).await.unwrap_err();

        assert!(matches!(err, FetchError::Status(_)));
        assert_eq!(store.status(), LoadStatus::Failed);
        assert_eq!(store.hotels().len(), 1);
        assert!(store.error().unwrap().contains("invalid response"));
    }
}
