//! Chainable queries against one table of the [`Store`](crate::store::Store).
//!
//! The call shapes follow the hosted client the mock stands in for, which
//! are not symmetric:
//!
//! ```text
//! store.from(t).select("*").eq(..).order(field, asc).await   -> Vec<Record>
//! store.from(t).select("*").eq(..).single().await            -> Option<Record>
//! store.from(t).insert(rows).await.select("*").single().await -> Option<Record>
//! store.from(t).update(patch).eq(..).single().await          -> Option<Record>
//! store.from(t).delete().eq(..).await                        -> Vec<Record>
//! ```
//!
//! Each shape is its own builder type, so an update can only run through
//! `single()` and a delete only through `eq()`.

mod builder;

pub use builder::{DeleteBuilder, Inserted, QueryBuilder, UpdateBuilder};

pub(crate) use builder::{Action, Query};
