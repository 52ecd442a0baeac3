//! Data models for the countries dataset.
//!
//! - [`Country`] - One country record as delivered by the data source
//! - [`Language`] - A language entry nested inside a country
//!
//! Nullable string fields from the source are normalized to empty strings by the
//! deserializers in [`crate::parsers::deserializers`], so matching code never has to
//! care whether a field was absent, `null`, or `""`.

pub mod country;

pub use country::{Country, Language};
