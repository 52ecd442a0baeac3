//! Data-source collaborator: loads the countries dataset from JSON.
//!
//! # Error Handling Strategy
//!
//! - **I/O and format errors** are returned as `anyhow::Result` with context naming the
//!   file. The caller (TUI or CLI) turns them into an "unavailable" dataset rather than
//!   aborting, so the rest of the UI still renders with an empty list.
//!
//! - **Missing or `null` fields** are not errors. They deserialize to empty strings and
//!   simply fail to match non-empty filters. Only `name` is required.
//!
//! There is no retry or caching here; a reload means calling [`load_countries`] again.

pub mod countries;
pub mod deserializers;

pub use countries::{load_countries, parse_countries};
