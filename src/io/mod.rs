//! Input/output helpers.
//!
//! - tabular ingest + cleaning (`ingest`)
//! - dataset CSV export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
