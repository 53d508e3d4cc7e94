use crate::models::Coordinate;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Reference table of known city centers, consulted when deriving a hotel's
/// distance to the center of its city.
const CITY_CENTERS: &[(&str, f64, f64)] = &[
    ("London", 51.5074, -0.1278),
    ("Paris", 48.8566, 2.3522),
    ("Rome", 41.9028, 12.4964),
    ("Madrid", 40.4168, -3.7038),
    ("Berlin", 52.52, 13.405),
];

/// Look up the center coordinate for a city name, case-insensitively.
pub fn city_center(city: &str) -> Option<Coordinate> {
    CITY_CENTERS
        .iter()
        .find(|(name, _, _)| name.eq_ignore_ascii_case(city))
        .map(|&(_, latitude, longitude)| Coordinate {
            latitude,
            longitude,
        })
}

/// Great-circle distance between two points in kilometers, via the haversine
/// formula. Out-of-range coordinates are not validated.
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}
