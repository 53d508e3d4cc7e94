//! In-memory query pipeline over the fetched hotel list.
//!
//! All predicates are conjunctive and each is inactive while its bound is
//! unset or its set is empty. The pipeline is pure: it reads a snapshot of
//! the list plus a filter value and produces a fresh ordered Vec.

use serde::{Deserialize, Serialize};

use crate::models::Hotel;

/// Sort key and direction for the hotel listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    #[default]
    PriceAsc,
    PriceDesc,
    RatingAsc,
    RatingDesc,
    StarsAsc,
    StarsDesc,
    DistanceAsc,
    DistanceDesc,
}

/// Filter and sort selection for the hotel listing.
///
/// `min_price > max_price` is not rejected; it simply yields an empty result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelFilters {
    /// Free-text match against hotel name or city
    pub query: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Accepted star values, exact membership (a 3.5-star hotel does not
    /// match a selection of 3 or 4)
    pub stars: Vec<f32>,
    /// Minimum user-rating floors; a hotel passes if it meets or exceeds
    /// any one of them
    pub user_ratings: Vec<f32>,
    /// Maximum distance to the city center, in kilometers
    pub max_distance: Option<f64>,
    pub sort_by: SortOption,
}

impl Default for HotelFilters {
    fn default() -> Self {
        Self {
            query: String::new(),
            min_price: None,
            max_price: None,
            stars: Vec::new(),
            user_ratings: Vec::new(),
            max_distance: None,
            sort_by: SortOption::PriceAsc,
        }
    }
}

fn matches(hotel: &Hotel, filters: &HotelFilters) -> bool {
    if !filters.query.is_empty() {
        let q = filters.query.to_lowercase();
        if !hotel.name.to_lowercase().contains(&q)
            && !hotel.location.city.to_lowercase().contains(&q)
        {
            return false;
        }
    }
    if let Some(min) = filters.min_price {
        if hotel.price < min {
            return false;
        }
    }
    if let Some(max) = filters.max_price {
        if hotel.price > max {
            return false;
        }
    }
    if !filters.stars.is_empty() && !filters.stars.iter().any(|&s| s == hotel.stars) {
        return false;
    }
    if !filters.user_ratings.is_empty()
        && !filters.user_ratings.iter().any(|&r| hotel.user_rating >= r)
    {
        return false;
    }
    if let Some(max) = filters.max_distance {
        if hotel.distance_to_center > max {
            return false;
        }
    }
    true
}

/// Apply every active predicate, then order by the selected sort key.
///
/// `Vec::sort_by` is stable, so hotels that compare equal keep their
/// relative order from the input list.
pub fn apply_filters(hotels: &[Hotel], filters: &HotelFilters) -> Vec<Hotel> {
    let mut result: Vec<Hotel> = hotels
        .iter()
        .filter(|hotel| matches(hotel, filters))
        .cloned()
        .collect();
    result.sort_by(|a, b| match filters.sort_by {
        SortOption::PriceAsc => a.price.total_cmp(&b.price),
        SortOption::PriceDesc => b.price.total_cmp(&a.price),
        SortOption::RatingAsc => a.user_rating.total_cmp(&b.user_rating),
        SortOption::RatingDesc => b.user_rating.total_cmp(&a.user_rating),
        SortOption::StarsAsc => a.stars.total_cmp(&b.stars),
        SortOption::StarsDesc => b.stars.total_cmp(&a.stars),
        SortOption::DistanceAsc => a.distance_to_center.total_cmp(&b.distance_to_center),
        SortOption::DistanceDesc => b.distance_to_center.total_cmp(&a.distance_to_center),
    });
    result
}

/// The `count` best-rated hotels, rating descending.
pub fn top_rated(hotels: &[Hotel], count: usize) -> Vec<Hotel> {
    let mut result = hotels.to_vec();
    result.sort_by(|a, b| b.user_rating.total_cmp(&a.user_rating));
    result.truncate(count);
    result
}

/// Hotels located in the given city, case-insensitively.
pub fn in_city(hotels: &[Hotel], city: &str) -> Vec<Hotel> {
    hotels
        .iter()
        .filter(|hotel| hotel.location.city.eq_ignore_ascii_case(city))
        .cloned()
        .collect()
}

/// Bin counts for a price histogram: equal-width buckets spanning
/// `[min, max]`, with the top bucket inclusive of the maximum.
pub fn price_histogram(prices: &[f64], buckets: usize) -> Vec<usize> {
    if prices.is_empty() || buckets == 0 {
        return Vec::new();
    }
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let step = if max > min {
        (max - min) / buckets as f64
    } else {
        1.0
    };
    let mut counts = vec![0usize; buckets];
    for &price in prices {
        let idx = (((price - min) / step) as usize).min(buckets - 1);
        counts[idx] += 1;
    }
    counts
}
