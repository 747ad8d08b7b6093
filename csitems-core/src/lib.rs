//! Core library for extracting the CS item catalog from game definition files.

pub mod catalog;
pub mod cdn;
pub mod config;
pub mod equipment;
pub mod error;
pub mod file_utils;
pub mod keyvalues;
pub mod models;
pub mod music;
pub mod output;
pub mod paints;
pub mod pipeline;
pub mod registry;
pub mod schema;
pub mod stickers;

#[cfg(test)]
mod test_fixtures;

pub use error::{CatalogError, Result};
pub use pipeline::{RunSummary, run};
