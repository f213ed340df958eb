//! rentfinder - local rental portfolio manager.
//!
//! A single JSON document, persisted through a [`DurableSlot`](rentfinder_core::storage::DurableSlot),
//! holds every table. [`Store`] queries it with a small chainable builder and
//! the services in [`services`] put the rental domain on top.

pub mod auth;
pub mod cli;
pub mod config;
pub mod output;
pub mod query;
pub mod services;
pub mod slot;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::MockAuth;
pub use config::Config;
pub use state::AppState;
pub use store::Store;
