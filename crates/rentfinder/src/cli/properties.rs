//! Property CLI commands.

use clap::{Parser, Subcommand};

use rentfinder_core::portfolio::{Property, PropertyPatch};

use super::Context;
use crate::output::{pretty, render};
use crate::state::AppState;

/// Property management commands.
#[derive(Debug, Parser)]
pub struct PropertiesCommand {
    #[command(subcommand)]
    pub action: PropertiesAction,
}

/// Available property actions.
#[derive(Debug, Subcommand)]
pub enum PropertiesAction {
    /// List all properties, newest first.
    List,
    /// Get property by ID.
    Get {
        /// Property ID.
        id: String,
    },
    /// Add a property owned by the signed-in user.
    Add {
        /// Listing title.
        #[arg(long)]
        title: String,
        /// Street address.
        #[arg(long)]
        address: String,
        /// Monthly rent.
        #[arg(long)]
        rent: f64,
        #[arg(long, default_value = "")]
        city: String,
        #[arg(long, default_value = "")]
        state: String,
        #[arg(long, default_value = "")]
        zip_code: String,
        #[arg(long, default_value = "")]
        bedrooms: String,
        #[arg(long, default_value = "")]
        bathrooms: String,
        #[arg(long, default_value = "")]
        sqft: String,
        /// House, apartment, condo, ...
        #[arg(long = "type", default_value = "")]
        property_type: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Comma separated, e.g. "Parking, Laundry".
        #[arg(long, default_value = "")]
        amenities: String,
    },
    /// Update a property.
    Update {
        /// Property ID.
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        rent: Option<f64>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        zip_code: Option<String>,
        #[arg(long = "type")]
        property_type: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amenities: Option<String>,
        #[arg(long)]
        available_date: Option<String>,
    },
    /// Delete property by ID.
    Delete {
        /// Property ID.
        id: String,
    },
    /// Portfolio statistics.
    Stats,
    /// Rent, maintenance expenses and profit per property.
    Report,
}

impl PropertiesCommand {
    pub async fn run(self, state: &AppState, ctx: Context) -> anyhow::Result<Option<String>> {
        let service = &state.properties;
        let output = match self.action {
            PropertiesAction::List => {
                let properties = service.list().await?;
                render(&properties, ctx.format, |p| pretty::format_properties(p))
            }
            PropertiesAction::Get { id } => {
                let property = service.get(&id).await?;
                render(&property, ctx.format, pretty::format_property)
            }
            PropertiesAction::Add {
                title,
                address,
                rent,
                city,
                state: region,
                zip_code,
                bedrooms,
                bathrooms,
                sqft,
                property_type,
                description,
                amenities,
            } => {
                let property = Property {
                    description,
                    amenities,
                    ..Property::new(title, address, rent)
                        .with_location(city, region, zip_code)
                        .with_layout(bedrooms, bathrooms, sqft)
                        .with_type(property_type)
                };
                let created = service.create(property).await?;
                render(&created, ctx.format, |p| {
                    format!("Created:\n{}", pretty::format_property(p))
                })
            }
            PropertiesAction::Update {
                id,
                title,
                address,
                rent,
                city,
                state: region,
                zip_code,
                property_type,
                description,
                amenities,
                available_date,
            } => {
                let patch = PropertyPatch {
                    title,
                    address,
                    rent,
                    city,
                    state: region,
                    zip_code,
                    property_type,
                    description,
                    amenities,
                    available_date,
                    ..PropertyPatch::default()
                };
                let updated = service.update(&id, patch).await?;
                render(&updated, ctx.format, |p| {
                    format!("Updated:\n{}", pretty::format_property(p))
                })
            }
            PropertiesAction::Delete { id } => {
                service.delete(&id).await?;
                return Ok(ctx.notice(format!("Deleted property {}", id)));
            }
            PropertiesAction::Stats => {
                let stats = service.stats().await?;
                render(&stats, ctx.format, pretty::format_stats)
            }
            PropertiesAction::Report => {
                let summary = service.financial_summary().await?;
                render(&summary, ctx.format, pretty::format_summary)
            }
        };
        Ok(Some(output))
    }
}
