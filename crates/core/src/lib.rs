//! Core types and pure logic for rentfinder.
//!
//! Everything in this crate is free of I/O: the record model and its query
//! primitives, the durable slot abstraction, domain types for the rental
//! portfolio, listing search and the mock auth rules.

pub mod auth;
pub mod listing;
pub mod portfolio;
pub mod record;
pub mod storage;
