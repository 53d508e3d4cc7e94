mod cities;
mod enrich;
mod format;
mod geo;
mod models;
mod query;
mod sources;
mod store;

use enrich::Enricher;
use format::format_price;
use query::HotelFilters;
use sources::{GalleryValidator, HotelApiClient};
use store::{HotelStore, LoadStatus};
use tracing::{info, warn, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏨 Hotel Scout - lastminute hotel browser");
    info!("==========================================");
    info!("");

    let source = match std::env::var("HOTEL_API_URL") {
        Ok(base_url) => HotelApiClient::with_base_url(base_url)?,
        Err(_) => HotelApiClient::new()?,
    };
    let enricher = Enricher::with_gallery_validator(GalleryValidator::new()?);

    let mut store = HotelStore::new();
    info!("Fetching hotel listing...");
    if store.refresh(&source, &enricher).await.is_err() {
        warn!("Continuing with the previous (empty) listing");
    }

    if store.status() == LoadStatus::Failed {
        let error = store.error().unwrap_or("Unknown error while fetching hotels.");
        println!("Error: {error}");
    }
    if let Some(fetched_at) = store.fetched_at() {
        info!("Listing fetched at {}", fetched_at.format("%H:%M:%S UTC"));
    }

    let hotels = store.hotels();

    // An optional destination argument narrows the listing to one city
    let listing = match std::env::args().nth(1) {
        Some(city_name) => match cities::find(&city_name) {
            Some(city) => {
                println!("📍 {} ({})", city.name, city.country);
                let foods: Vec<&str> = city.foods.iter().map(|f| f.name.as_str()).collect();
                let activities: Vec<&str> =
                    city.activities.iter().map(|a| a.name.as_str()).collect();
                println!("   Foods: {}", foods.join(", "));
                println!("   Activities: {}", activities.join(", "));
                println!();
                query::apply_filters(&query::in_city(hotels, &city.name), &HotelFilters::default())
            }
            None => {
                warn!("Unknown destination '{}', showing all hotels", city_name);
                query::apply_filters(hotels, &HotelFilters::default())
            }
        },
        None => {
            for hotel in query::top_rated(hotels, 3) {
                println!("⭐ {} (rated {}/10)", hotel.name, hotel.user_rating);
            }
            println!();
            query::apply_filters(hotels, &HotelFilters::default())
        }
    };

    info!("✅ Loaded {} hotels\n", listing.len());

    for (i, hotel) in listing.iter().enumerate() {
        println!(
            "{}. {} ({})",
            i + 1,
            hotel.name,
            format_price(hotel.price, &hotel.currency)
        );
        println!("   {}, {}", hotel.location.address, hotel.location.city);
        println!(
            "   {} stars, rated {}/10, {:.1} km from center",
            hotel.stars, hotel.user_rating, hotel.distance_to_center
        );
        println!();
    }

    // Price spread of the displayed listing
    let prices: Vec<f64> = listing.iter().map(|hotel| hotel.price).collect();
    let histogram = query::price_histogram(&prices, 10);
    if !histogram.is_empty() {
        info!("Price distribution across {} buckets: {:?}", histogram.len(), histogram);
    }

    // Save the enriched, sorted listing
    let json = serde_json::to_string_pretty(&listing)?;
    tokio::fs::write("hotels.json", json).await?;
    info!("💾 Saved {} hotels to hotels.json", listing.len());

    Ok(())
}
