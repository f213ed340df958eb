use chrono::NaiveDate;

use super::types::{Listing, ListingStatus, ListingType};

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    address: &str,
    zip_code: &str,
    price: u64,
    (bedrooms, bathrooms, sqft): (u32, f64, u32),
    listing_type: ListingType,
    status: ListingStatus,
    amenities: &[&str],
    year_built: u32,
    listed: (i32, u32, u32),
    description: &str,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        address: address.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        zip_code: zip_code.to_string(),
        price,
        bedrooms,
        bathrooms,
        sqft,
        listing_type,
        status,
        description: description.to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        year_built,
        listed_date: NaiveDate::from_ymd_opt(listed.0, listed.1, listed.2).unwrap_or_default(),
    }
}

/// The marketplace catalogue shown when no remote backend is configured.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing(
            "1",
            "Modern Luxury Home",
            "123 Oak Street",
            "94102",
            1_250_000,
            (4, 3.0, 2800),
            ListingType::House,
            ListingStatus::ForSale,
            &["Pool", "Garage", "Garden", "Air Conditioning", "Fireplace"],
            2018,
            (2024, 1, 15),
            "Modern home with city views, gourmet kitchen and outdoor entertaining area.",
        ),
        listing(
            "2",
            "Downtown Luxury Condo",
            "456 Market Street",
            "94105",
            850_000,
            (2, 2.0, 1200),
            ListingType::Condo,
            ListingStatus::ForSale,
            &["Gym", "Concierge", "Rooftop Deck", "Air Conditioning"],
            2020,
            (2024, 1, 20),
            "Downtown condo with floor-to-ceiling windows and premium finishes.",
        ),
        listing(
            "3",
            "Charming Victorian Townhouse",
            "789 Lombard Street",
            "94133",
            1_680_000,
            (3, 2.5, 2200),
            ListingType::Townhouse,
            ListingStatus::ForSale,
            &["Garden", "Fireplace", "Hardwood Floors", "Updated Kitchen"],
            1895,
            (2024, 1, 10),
            "Restored Victorian with period details and a private garden.",
        ),
        listing(
            "4",
            "Luxury Penthouse Suite",
            "321 Pine Street",
            "94108",
            2_200_000,
            (3, 3.5, 2500),
            ListingType::Condo,
            ListingStatus::ForSale,
            &["Pool", "Gym", "Concierge", "Private Terrace", "Wine Cellar"],
            2019,
            (2024, 1, 18),
            "Penthouse with a wraparound terrace and bay views.",
        ),
        listing(
            "5",
            "Cozy Family Home",
            "654 Valencia Street",
            "94110",
            980_000,
            (3, 2.0, 1800),
            ListingType::House,
            ListingStatus::ForSale,
            &["Garden", "Updated Kitchen", "Hardwood Floors", "Garage"],
            1925,
            (2024, 1, 12),
            "Family home in the Mission with a sunny backyard.",
        ),
        listing(
            "6",
            "Modern Studio Apartment",
            "987 Mission Street",
            "94103",
            3_200,
            (1, 1.0, 650),
            ListingType::Apartment,
            ListingStatus::ForRent,
            &["Gym", "Laundry", "Air Conditioning", "Pet Friendly"],
            2021,
            (2024, 1, 22),
            "Studio apartment near public transit.",
        ),
    ]
}
