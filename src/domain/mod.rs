//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the validated measurement pair (`Dataset`)
//! - fit outputs (`FitResult`, `CurveSamples`)
//! - presentation enums (`ThemeKind`)

pub mod types;

pub use types::*;
