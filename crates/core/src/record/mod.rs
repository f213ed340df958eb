mod filter;
mod identity;
mod ordering;
mod types;

pub use filter::{matches_all, values_equal, Filter};
pub use identity::{format_timestamp, generate_id, stamp_insert, stamp_update};
pub use ordering::{compare_values, sort_records, OrderBy};
pub use types::{
    Database, Record, Table, APPLICATIONS_TABLE, CREATED_AT, ID, KNOWN_TABLES, MAINTENANCE_TABLE,
    MESSAGES_TABLE, PROPERTIES_TABLE, UPDATED_AT,
};
