mod mock_data;
mod operations;
mod types;

pub use mock_data::sample_listings;
pub use operations::{
    filter_listings, search_listings, sort_listings, ListingFilter, SortKey, DEFAULT_MAX_PRICE,
};
pub use types::{Listing, ListingStatus, ListingType};
