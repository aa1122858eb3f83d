#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// per-case setup of the synthetic images and the transform.
pub mod case;

/// Error types for the benchmark harness.
pub mod error;

/// parsing of the `(WIDTHxHEIGHT, INTER_MODE, BORDER_MODE)` filter.
pub mod filter;

/// the parameter matrix of the sweep.
pub mod params;

/// criterion driver for the sweep.
pub mod runner;

pub use crate::error::PerfError;
