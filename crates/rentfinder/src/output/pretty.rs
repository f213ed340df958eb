//! Pretty output formatting.

use rentfinder_core::auth::AuthUser;
use rentfinder_core::listing::Listing;
use rentfinder_core::portfolio::{
    MaintenanceCounts, MaintenanceRequest, Message, PortfolioSummary, Property, PropertyStats,
    RentalApplication,
};

const RULE_WIDTH: usize = 40;

fn format_list<T>(heading: &str, items: &[T], empty: &str, format_item: fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    let mut output = format!("{} ({})\n", heading, items.len());
    output.push_str(&"-".repeat(RULE_WIDTH));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Format a property for display.
pub fn format_property(property: &Property) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Address: {}",
        property.title,
        property.id.as_deref().unwrap_or("-"),
        property.address
    );
    let location: Vec<&str> = [&property.city, &property.state, &property.zip_code]
        .into_iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    if !location.is_empty() {
        output.push_str(&format!(", {}", location.join(" ")));
    }
    output.push_str(&format!("\n  Rent: {}/month", money(property.rent)));
    if !property.bedrooms.is_empty() || !property.bathrooms.is_empty() {
        output.push_str(&format!(
            "\n  Layout: {} bd / {} ba",
            property.bedrooms, property.bathrooms
        ));
    }
    if !property.property_type.is_empty() {
        output.push_str(&format!("\n  Type: {}", property.property_type));
    }
    let amenities = property.amenity_list();
    if !amenities.is_empty() {
        output.push_str(&format!("\n  Amenities: {}", amenities.join(", ")));
    }
    output
}

/// Format properties for display.
pub fn format_properties(properties: &[Property]) -> String {
    format_list("PROPERTIES", properties, "No properties found.", format_property)
}

pub fn format_stats(stats: &PropertyStats) -> String {
    format!(
        "Portfolio:\n  Properties: {}\n  Total rent: {}\n  Average rent: {}\n  Occupied: {}",
        stats.total_properties,
        money(stats.total_rent),
        money(stats.average_rent),
        stats.occupied_properties
    )
}

pub fn format_summary(summary: &PortfolioSummary) -> String {
    if summary.rows.is_empty() {
        return "No properties found.".to_string();
    }
    let mut output = format!(
        "{:<30} {:>12} {:>12} {:>12}\n",
        "PROPERTY", "RENT", "EXPENSES", "PROFIT"
    );
    output.push_str(&"-".repeat(69));
    for row in &summary.rows {
        output.push_str(&format!(
            "\n{:<30} {:>12} {:>12} {:>12}",
            row.property,
            money(row.rent),
            money(row.expenses),
            money(row.profit)
        ));
    }
    output.push('\n');
    output.push_str(&"-".repeat(69));
    output.push_str(&format!(
        "\n{:<30} {:>12} {:>12} {:>12}",
        "TOTAL",
        money(summary.total_rent),
        money(summary.total_expenses),
        money(summary.total_profit)
    ));
    output
}

/// Format an application for display.
pub fn format_application(application: &RentalApplication) -> String {
    format!(
        "{} <{}> [{}]\n  ID: {}\n  Property: {}\n  Income: {}\n  Credit score: {}\n  Applied: {}",
        application.applicant_name,
        application.applicant_email,
        application.status,
        application.id.as_deref().unwrap_or("-"),
        application.property_id,
        money(application.income),
        application.credit_score,
        application.applied_date.as_deref().unwrap_or("-")
    )
}

pub fn format_applications(applications: &[RentalApplication]) -> String {
    format_list(
        "APPLICATIONS",
        applications,
        "No applications found.",
        format_application,
    )
}

/// Format a maintenance request for display.
pub fn format_request(request: &MaintenanceRequest) -> String {
    let mut output = format!(
        "{} [{} / {}]\n  ID: {}\n  Property: {}\n  Tenant: {}\n  Opened: {}",
        request.title,
        request.status,
        request.priority,
        request.id.as_deref().unwrap_or("-"),
        request.property,
        request.tenant,
        request.created_date
    );
    if !request.category.is_empty() {
        output.push_str(&format!("\n  Category: {}", request.category));
    }
    if let Some(completed) = &request.completed_date {
        output.push_str(&format!("\n  Completed: {}", completed));
    }
    if let Some(cost) = request.cost {
        output.push_str(&format!("\n  Cost: {}", money(cost)));
    }
    output
}

pub fn format_requests(requests: &[MaintenanceRequest]) -> String {
    format_list(
        "MAINTENANCE REQUESTS",
        requests,
        "No maintenance requests found.",
        format_request,
    )
}

pub fn format_counts(counts: &MaintenanceCounts) -> String {
    format!(
        "Maintenance:\n  Total: {}\n  Pending: {}\n  In progress: {}\n  Completed: {}\n  Cancelled: {}",
        counts.total, counts.pending, counts.in_progress, counts.completed, counts.cancelled
    )
}

/// Format a message as one line of a conversation.
pub fn format_message(message: &Message) -> String {
    let unread = if message.read { "" } else { " *" };
    format!(
        "[{}] {} ({}){}: {}\n  ID: {}",
        message.timestamp.as_deref().unwrap_or("-"),
        message.sender,
        message.message_type,
        unread,
        message.content,
        message.id.as_deref().unwrap_or("-")
    )
}

pub fn format_messages(messages: &[Message]) -> String {
    format_list("MESSAGES", messages, "No messages yet.", format_message)
}

/// Format a marketplace listing for display.
pub fn format_listing(listing: &Listing) -> String {
    format!(
        "{} [{} / {}]\n  ID: {}\n  Address: {}, {}, {} {}\n  Price: ${}\n  Layout: {} bd / {} ba / {} sqft\n  Listed: {}",
        listing.title,
        listing.listing_type,
        listing.status,
        listing.id,
        listing.address,
        listing.city,
        listing.state,
        listing.zip_code,
        listing.price,
        listing.bedrooms,
        listing.bathrooms,
        listing.sqft,
        listing.listed_date
    )
}

pub fn format_listings(listings: &[&Listing]) -> String {
    format_list("LISTINGS", listings, "No listings match.", |l| format_listing(l))
}

/// Format a user for display.
pub fn format_user(user: &AuthUser) -> String {
    format!("{}\n  ID: {}\n  Email: {}", user.display_name(), user.id, user.email)
}
