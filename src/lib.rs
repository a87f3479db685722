//! `curve-lab` library crate.
//!
//! The binary (`curvelab`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the console and TUI front-ends share one ingest/fit core
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod tui;
