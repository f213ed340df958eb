//! Typed services over the document store.
//!
//! Services translate between the schema-less [`Record`]s of the store and
//! the portfolio types of `rentfinder_core`, and are where user-facing
//! errors originate: a missing row is [`ServiceError::NotFound`] here,
//! while the store itself only ever answers with `None` or an empty list.

mod application;
mod error;
mod maintenance;
mod messages;
mod property;

pub use application::ApplicationService;
pub use error::{Result, ServiceError};
pub use maintenance::{MaintenanceFilter, MaintenanceService};
pub use messages::MessageService;
pub use property::PropertyService;

use serde::de::DeserializeOwned;

use rentfinder_core::record::Record;

use crate::store::Store;

fn decode<T: DeserializeOwned>(record: Record) -> Result<T> {
    Ok(record.into_typed()?)
}

fn decode_all<T: DeserializeOwned>(records: Vec<Record>) -> Result<Vec<T>> {
    records.into_iter().map(decode).collect()
}

/// Today's calendar date in the store's clock, `YYYY-MM-DD`.
fn today(store: &Store) -> String {
    store.now().date_naive().format("%Y-%m-%d").to_string()
}
