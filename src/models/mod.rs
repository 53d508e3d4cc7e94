use serde::{Deserialize, Serialize};

/// A point on the Earth's surface, in signed degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Location information for a hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Check-in or check-out window, as supplied by the feed ("14:00" style strings)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub phone_number: String,
    pub email: String,
}

/// Core hotel data model
///
/// `distance_to_center` is derived at enrichment time from the hotel's own
/// coordinates and the matching city center. Whatever the upstream feed puts
/// in that field is discarded and recomputed on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: u64,
    pub name: String,
    pub location: Location,
    pub stars: f32,
    pub check_in: TimeWindow,
    pub check_out: TimeWindow,
    pub contact: Contact,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub user_rating: f32,
    pub price: f64,
    pub currency: String,
    #[serde(default)]
    pub distance_to_center: f64,
}

/// A typical dish for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub image: String,
}

/// A sightseeing activity for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub name: String,
    pub image: String,
}

/// Static destination entry, bundled with the application rather than fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: u64,
    pub name: String,
    pub country: String,
    pub image: String,
    pub center: Coordinate,
    pub foods: Vec<Food>,
    pub activities: Vec<Activity>,
}
