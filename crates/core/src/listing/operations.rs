use std::cmp::Ordering;

use super::types::{Listing, ListingStatus, ListingType};

/// Upper bound of the default price range.
pub const DEFAULT_MAX_PRICE: u64 = 2_000_000;

/// Criteria applied to the marketplace catalogue.
///
/// Zero bedroom or bathroom minimums and a `None` type mean "any".
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFilter {
    pub price_min: u64,
    pub price_max: u64,
    pub min_bedrooms: u32,
    pub min_bathrooms: u32,
    pub listing_type: Option<ListingType>,
    /// Every amenity listed here must be present on a match.
    pub amenities: Vec<String>,
    /// Case-insensitive text matched against address, city, state and zip.
    pub location: Option<String>,
    pub status: Option<ListingStatus>,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            price_min: 0,
            price_max: DEFAULT_MAX_PRICE,
            min_bedrooms: 0,
            min_bathrooms: 0,
            listing_type: None,
            amenities: Vec::new(),
            location: None,
            status: None,
        }
    }
}

impl ListingFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        if listing.price < self.price_min || listing.price > self.price_max {
            return false;
        }
        if self.min_bedrooms > 0 && listing.bedrooms < self.min_bedrooms {
            return false;
        }
        if self.min_bathrooms > 0 && listing.bathrooms < f64::from(self.min_bathrooms) {
            return false;
        }
        if self.listing_type.is_some_and(|t| t != listing.listing_type) {
            return false;
        }
        if self.status.is_some_and(|s| s != listing.status) {
            return false;
        }
        if !self.amenities.iter().all(|a| listing.has_amenity(a)) {
            return false;
        }
        match self.location.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => location_matches(listing, text),
            _ => true,
        }
    }
}

fn location_matches(listing: &Listing, text: &str) -> bool {
    let needle = text.to_lowercase();
    [
        &listing.address,
        &listing.city,
        &listing.state,
        &listing.zip_code,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Ordering of search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Largest,
}

pub fn filter_listings<'a>(listings: &'a [Listing], filter: &ListingFilter) -> Vec<&'a Listing> {
    listings.iter().filter(|l| filter.matches(l)).collect()
}

/// Sorts in place. Equal keys keep their catalogue order.
pub fn sort_listings(listings: &mut [&Listing], key: SortKey) {
    listings.sort_by(|a, b| compare(a, b, key));
}

fn compare(a: &Listing, b: &Listing, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => b.listed_date.cmp(&a.listed_date),
        SortKey::PriceLow => a.price.cmp(&b.price),
        SortKey::PriceHigh => b.price.cmp(&a.price),
        SortKey::Largest => b.sqft.cmp(&a.sqft),
    }
}

/// Filters then sorts the catalogue.
pub fn search_listings<'a>(
    listings: &'a [Listing],
    filter: &ListingFilter,
    key: SortKey,
) -> Vec<&'a Listing> {
    let mut results = filter_listings(listings, filter);
    sort_listings(&mut results, key);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::sample_listings;

    fn ids(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn test_default_filter_excludes_listings_above_default_max() {
        let catalogue = sample_listings();
        let results = filter_listings(&catalogue, &ListingFilter::default());

        // The penthouse is listed at 2.2M.
        assert_eq!(ids(&results), vec!["1", "2", "3", "5", "6"]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let catalogue = sample_listings();
        let filter = ListingFilter {
            price_min: 850_000,
            price_max: 1_250_000,
            ..ListingFilter::default()
        };

        assert_eq!(ids(&filter_listings(&catalogue, &filter)), vec!["1", "2", "5"]);
    }

    #[test]
    fn test_minimum_bedrooms_and_bathrooms() {
        let catalogue = sample_listings();
        let filter = ListingFilter {
            min_bedrooms: 3,
            min_bathrooms: 3,
            price_max: u64::MAX,
            ..ListingFilter::default()
        };

        assert_eq!(ids(&filter_listings(&catalogue, &filter)), vec!["1", "4"]);
    }

    #[test]
    fn test_type_and_status_filters() {
        let catalogue = sample_listings();
        let condos = ListingFilter {
            listing_type: Some(ListingType::Condo),
            price_max: u64::MAX,
            ..ListingFilter::default()
        };
        let rentals = ListingFilter {
            status: Some(ListingStatus::ForRent),
            ..ListingFilter::default()
        };

        assert_eq!(ids(&filter_listings(&catalogue, &condos)), vec!["2", "4"]);
        assert_eq!(ids(&filter_listings(&catalogue, &rentals)), vec!["6"]);
    }

    #[test]
    fn test_all_amenities_required() {
        let catalogue = sample_listings();
        let filter = ListingFilter {
            amenities: vec!["garden".to_string(), "Garage".to_string()],
            ..ListingFilter::default()
        };

        assert_eq!(ids(&filter_listings(&catalogue, &filter)), vec!["1", "5"]);
    }

    #[test]
    fn test_location_matches_address_and_zip() {
        let catalogue = sample_listings();
        let by_street = ListingFilter {
            location: Some("mission".to_string()),
            ..ListingFilter::default()
        };
        let by_zip = ListingFilter {
            location: Some("94133".to_string()),
            ..ListingFilter::default()
        };
        let blank = ListingFilter {
            location: Some("  ".to_string()),
            ..ListingFilter::default()
        };

        assert_eq!(ids(&filter_listings(&catalogue, &by_street)), vec!["6"]);
        assert_eq!(ids(&filter_listings(&catalogue, &by_zip)), vec!["3"]);
        assert_eq!(filter_listings(&catalogue, &blank).len(), 5);
    }

    #[test]
    fn test_sort_newest_first() {
        let catalogue = sample_listings();
        let results = search_listings(&catalogue, &ListingFilter::default(), SortKey::Newest);

        assert_eq!(ids(&results), vec!["6", "2", "1", "5", "3"]);
    }

    #[test]
    fn test_sort_by_price_and_size() {
        let catalogue = sample_listings();
        let filter = ListingFilter::default();

        assert_eq!(
            ids(&search_listings(&catalogue, &filter, SortKey::PriceLow)),
            vec!["6", "2", "5", "1", "3"]
        );
        assert_eq!(
            ids(&search_listings(&catalogue, &filter, SortKey::PriceHigh)),
            vec!["3", "1", "5", "2", "6"]
        );
        assert_eq!(
            ids(&search_listings(&catalogue, &filter, SortKey::Largest)),
            vec!["1", "3", "5", "2", "6"]
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut catalogue = sample_listings();
        catalogue[1].price = catalogue[0].price;
        let mut results: Vec<&Listing> = catalogue.iter().take(2).collect();

        sort_listings(&mut results, SortKey::PriceHigh);

        assert_eq!(ids(&results), vec!["1", "2"]);
    }
}
