//! SQLite slot backend.
//!
//! Stores every slot as one row of a key/value table, using `rusqlite` for
//! the synchronous work and `tokio-rusqlite` to run it off the async runtime.

mod error;
mod schema;
mod slot;

pub use slot::SqliteSlot;
