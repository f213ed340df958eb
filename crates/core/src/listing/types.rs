use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of dwelling on the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    House,
    Condo,
    Townhouse,
    Apartment,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::House => "house",
            ListingType::Condo => "condo",
            ListingType::Townhouse => "townhouse",
            ListingType::Apartment => "apartment",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "house" => Ok(ListingType::House),
            "condo" => Ok(ListingType::Condo),
            "townhouse" => Ok(ListingType::Townhouse),
            "apartment" => Ok(ListingType::Apartment),
            other => Err(format!("unknown property type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStatus {
    ForSale,
    ForRent,
    Sold,
    Pending,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "for-sale",
            ListingStatus::ForRent => "for-rent",
            ListingStatus::Sold => "sold",
            ListingStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property advertised on the public marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Sale price, or monthly rent for `ForRent` listings.
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub sqft: u32,
    pub listing_type: ListingType,
    pub status: ListingStatus,
    pub description: String,
    pub amenities: Vec<String>,
    pub year_built: u32,
    pub listed_date: NaiveDate,
}

impl Listing {
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a.eq_ignore_ascii_case(amenity))
    }
}
