//! Domain logic for the motorcycle catalog.
//!
//! Everything in this crate is pure: no I/O, no locking, no HTTP. The store
//! and API crates build on these types and functions.

pub mod comparison;
pub mod error;
pub mod filters;
pub mod motorcycle;
pub mod query;
pub mod similarity;
pub mod types;
