#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities for interpolation and border handling.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// image geometric transformations module.
pub mod warp;
