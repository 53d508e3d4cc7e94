//! Ingestion-time enrichment of raw hotel records.

use crate::geo::{city_center, haversine_distance};
use crate::models::Hotel;
use crate::sources::GalleryValidator;
use tracing::debug;

/// Rewrites each fetched record's derived fields before it reaches the
/// store: `distance_to_center` is always recomputed from the record's own
/// coordinates, and the gallery is revalidated when a validator is attached.
/// Enrichment never fails; it only transforms.
pub struct Enricher {
    gallery: Option<GalleryValidator>,
}

impl Enricher {
    pub fn new() -> Self {
        Self { gallery: None }
    }

    pub fn with_gallery_validator(validator: GalleryValidator) -> Self {
        Self {
            gallery: Some(validator),
        }
    }

    pub async fn enrich(&self, hotels: Vec<Hotel>) -> Vec<Hotel> {
        let mut enriched = Vec::with_capacity(hotels.len());
        for mut hotel in hotels {
            hotel.distance_to_center = match city_center(&hotel.location.city) {
                Some(center) => haversine_distance(hotel.location.coordinate(), center),
                // Unknown city: no reference point, report 0 rather than error
                None => 0.0,
            };

            if let Some(validator) = &self.gallery {
                let before = hotel.gallery.len();
                hotel.gallery = validator.validate(&hotel.gallery).await;
                if hotel.gallery.len() < before {
                    debug!(
                        "Dropped {} dead gallery URLs for '{}'",
                        before - hotel.gallery.len(),
                        hotel.name
                    );
                }
            }

            enriched.push(hotel);
        }
        enriched
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new()
    }
}
