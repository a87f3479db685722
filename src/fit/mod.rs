//! Least-squares polynomial fitting.

pub mod fitter;

pub use fitter::*;
