//! Durable slot backends.
//!
//! Concrete implementations of [`rentfinder_core::storage::DurableSlot`].
//! The in-memory slot is always available and is what the tests run
//! against. The SQLite slot is compiled with the `sqlite` feature (on by
//! default) and is what the binary uses unless `--in-memory` is passed.

mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use inmemory::InMemorySlot;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSlot;
