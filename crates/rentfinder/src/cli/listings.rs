//! Marketplace listing CLI commands.

use clap::{Parser, Subcommand, ValueEnum};

use rentfinder_core::listing::{
    sample_listings, search_listings, ListingFilter, ListingStatus, ListingType, SortKey,
    DEFAULT_MAX_PRICE,
};

use super::Context;
use crate::output::{pretty, render};

/// Listing search commands.
#[derive(Debug, Parser)]
pub struct ListingsCommand {
    #[command(subcommand)]
    pub action: ListingsAction,
}

/// Available listing actions.
#[derive(Debug, Subcommand)]
pub enum ListingsAction {
    /// Filter and sort the sample catalogue.
    Search {
        #[arg(long, default_value_t = 0)]
        min_price: u64,
        #[arg(long, default_value_t = DEFAULT_MAX_PRICE)]
        max_price: u64,
        /// Minimum bedrooms; 0 means any.
        #[arg(long, default_value_t = 0)]
        bedrooms: u32,
        /// Minimum bathrooms; 0 means any.
        #[arg(long, default_value_t = 0)]
        bathrooms: u32,
        /// house, condo, townhouse or apartment. Omit for all.
        #[arg(long = "type")]
        listing_type: Option<ListingType>,
        /// Only listings for rent.
        #[arg(long, conflicts_with = "for_sale")]
        for_rent: bool,
        /// Only listings for sale.
        #[arg(long)]
        for_sale: bool,
        /// Required amenity; repeat for several.
        #[arg(long = "amenity")]
        amenities: Vec<String>,
        /// Text matched against address, city, state and zip code.
        #[arg(long)]
        location: Option<String>,
        #[arg(long, value_enum, default_value = "newest")]
        sort: SortArg,
    },
}

/// Sort order of search results.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Newest,
    PriceLow,
    PriceHigh,
    Largest,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => SortKey::Newest,
            SortArg::PriceLow => SortKey::PriceLow,
            SortArg::PriceHigh => SortKey::PriceHigh,
            SortArg::Largest => SortKey::Largest,
        }
    }
}

impl ListingsCommand {
    pub fn run(self, ctx: Context) -> anyhow::Result<Option<String>> {
        let ListingsAction::Search {
            min_price,
            max_price,
            bedrooms,
            bathrooms,
            listing_type,
            for_rent,
            for_sale,
            amenities,
            location,
            sort,
        } = self.action;

        let status = match (for_rent, for_sale) {
            (true, _) => Some(ListingStatus::ForRent),
            (_, true) => Some(ListingStatus::ForSale),
            _ => None,
        };
        let filter = ListingFilter {
            price_min: min_price,
            price_max: max_price,
            min_bedrooms: bedrooms,
            min_bathrooms: bathrooms,
            listing_type,
            amenities,
            location,
            status,
        };

        let catalogue = sample_listings();
        let results = search_listings(&catalogue, &filter, sort.into());
        let output = render(&results, ctx.format, |r| pretty::format_listings(r));
        Ok(Some(output))
    }
}
