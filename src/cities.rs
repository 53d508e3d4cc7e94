//! Static destination catalog, bundled with the application.

use crate::models::{Activity, City, Coordinate, Food};

fn food(id: u64, name: &str, image: &str) -> Food {
    Food {
        id,
        name: name.to_string(),
        image: image.to_string(),
    }
}

fn activity(id: u64, name: &str, image: &str) -> Activity {
    Activity {
        id,
        name: name.to_string(),
        image: image.to_string(),
    }
}

/// The browsable destinations, each with a cover image, center coordinate
/// and a fixed set of foods and activities.
pub fn catalog() -> Vec<City> {
    vec![
        City {
            id: 1,
            name: "Paris".to_string(),
            country: "France".to_string(),
            image: "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?auto=format&fit=crop&w=800&q=80".to_string(),
            center: Coordinate {
                latitude: 48.8566,
                longitude: 2.3522,
            },
            foods: vec![
                food(1, "Cheese Platter", "https://images.unsplash.com/photo-1627935722051-395636b0d8a5?q=80&w=2073&auto=format&fit=crop"),
                food(2, "Fresh Baguette", "https://images.unsplash.com/photo-1599819055803-717bba43890f?q=80&w=2070&auto=format&fit=crop"),
                food(3, "Crepes", "https://images.unsplash.com/photo-1515467837915-15c4777ba46a?q=80&w=2074&auto=format&fit=crop"),
            ],
            activities: vec![
                activity(1, "Eiffel Tower Visit", "https://images.unsplash.com/photo-1609087361918-cc99d6f604ac?q=80&w=2070&auto=format&fit=crop"),
                activity(2, "Louvre Museum Tour", "https://images.unsplash.com/photo-1567942585146-33d62b775db0?q=80&w=2509&auto=format&fit=crop"),
                activity(3, "Seine River Cruise", "https://images.unsplash.com/photo-1567187155374-cd9135b1f247?q=80&w=2070&auto=format&fit=crop"),
            ],
        },
        City {
            id: 2,
            name: "London".to_string(),
            country: "UK".to_string(),
            image: "https://images.unsplash.com/photo-1505761671935-60b3a7427bad?auto=format&fit=crop&w=800&q=80".to_string(),
            center: Coordinate {
                latitude: 51.5074,
                longitude: -0.1278,
            },
            foods: vec![
                food(1, "Fish & Chips", "https://images.unsplash.com/photo-1706711053549-f52f73a8960c?q=80&w=2075&auto=format&fit=crop"),
                food(2, "English Breakfast", "https://images.unsplash.com/photo-1655979283362-535e6a167a53?q=80&w=2070&auto=format&fit=crop"),
                food(3, "Afternoon Tea", "https://images.unsplash.com/photo-1497800640957-3100979af57c?q=80&w=2069&auto=format&fit=crop"),
            ],
            activities: vec![
                activity(1, "Big Ben Visit", "https://images.unsplash.com/photo-1486299267070-83823f5448dd?q=80&w=2071&auto=format&fit=crop"),
                activity(2, "London Eye Ride", "https://images.unsplash.com/photo-1510270165035-113679af1ac9?q=80&w=2071&auto=format&fit=crop"),
                activity(3, "British Museum Visit", "https://images.unsplash.com/photo-1519056312994-33952f238fac?q=80&w=3062&auto=format&fit=crop"),
            ],
        },
        City {
            id: 3,
            name: "Tokyo".to_string(),
            country: "Japan".to_string(),
            image: "https://images.unsplash.com/photo-1549693578-d683be217e58?auto=format&fit=crop&w=800&q=80".to_string(),
            center: Coordinate {
                latitude: 35.6895,
                longitude: 139.6917,
            },
            foods: vec![
                food(1, "Sushi", "https://images.unsplash.com/photo-1553621042-f6e147245754?q=80&w=1625&auto=format&fit=crop"),
                food(2, "Ramen", "https://images.unsplash.com/photo-1720873915320-84103511b1fb?q=80&w=2070&auto=format&fit=crop"),
                food(3, "Tempura", "https://images.unsplash.com/photo-1593357849627-cbbc9fda6b05?q=80&w=2070&auto=format&fit=crop"),
            ],
            activities: vec![
                activity(1, "Shinjuku Garden", "https://images.unsplash.com/photo-1722591758897-8a59409aeda2?q=80&w=1035&auto=format&fit=crop"),
                activity(2, "Tokyo Tower Night View", "https://images.unsplash.com/photo-1716564100974-b3ad6b53290f?q=80&w=2070&auto=format&fit=crop"),
                activity(3, "Tsukiji Market Visit", "https://images.unsplash.com/photo-1665846642221-fdb1a793c7f5?q=80&w=2100&auto=format&fit=crop"),
            ],
        },
        City {
            id: 4,
            name: "New York".to_string(),
            country: "USA".to_string(),
            image: "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?q=80&w=2070&auto=format&fit=crop".to_string(),
            center: Coordinate {
                latitude: 40.7128,
                longitude: -74.0060,
            },
            foods: vec![
                food(1, "New York Pizza", "https://images.unsplash.com/photo-1560202212-441ad59100fd?q=80&w=1973&auto=format&fit=crop"),
                food(2, "Bagel with Salmon", "https://images.unsplash.com/photo-1734809569547-7c9ef0973222?q=80&w=2070&auto=format&fit=crop"),
                food(3, "Street Hot Dog", "https://images.unsplash.com/photo-1577008507686-7418c4e06774?q=80&w=2070&auto=format&fit=crop"),
            ],
            activities: vec![
                activity(1, "Central Park Walk", "https://images.unsplash.com/photo-1623593419606-7f9c8c22d736?q=80&w=2070&auto=format&fit=crop"),
                activity(2, "Statue of Liberty Visit", "https://images.unsplash.com/photo-1569421899560-a1ae0dc07897?q=80&w=2071&auto=format&fit=crop"),
                activity(3, "Times Square Night", "https://images.unsplash.com/photo-1706752208267-86a9d2573626?q=80&w=1978&auto=format&fit=crop"),
            ],
        },
    ]
}

/// Find a destination by name, case-insensitively.
pub fn find(name: &str) -> Option<City> {
    catalog()
        .into_iter()
        .find(|city| city.name.eq_ignore_ascii_case(name))
}
