//! Domain types and rules for the per-user todo service.
//!
//! This crate has no internal dependencies so it can be shared by the store
//! layer and the HTTP layer alike.

pub mod error;
pub mod todo;
pub mod types;
