mod error;
mod finance;
mod messages;
mod operations;
mod stats;
mod types;

pub use error::PortfolioError;
pub use finance::{summarize_portfolio, FinancialRow, PortfolioSummary};
pub use messages::{unread_count, validate_message, Message, MessageSender, MessageType};
pub use operations::{
    maintenance_counts, validate_application, validate_maintenance_request, validate_property,
    MaintenanceCounts,
};
pub use stats::PropertyStats;
pub use types::{
    ApplicationStatus, MaintenancePriority, MaintenanceRequest, MaintenanceStatus, Property,
    PropertyPatch, RentalApplication,
};
