//! Pixel interpolation methods for image transformations.
//!
//! This module provides the interpolation kernels used when resampling images
//! during geometric transformations like warping.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, uses nearest pixel value (no interpolation)
//! - **Bilinear**: Smooth linear interpolation between adjacent pixels
//!
//! Every source tap goes through a [`BorderMode`] which decides what is read
//! when the sampled coordinate falls outside of the image.

mod bilinear;
mod border;
pub(crate) mod interpolate;
mod nearest;

pub use border::BorderMode;
pub use interpolate::{interpolate_pixel, InterpolationMode};
