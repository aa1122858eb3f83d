//! Geometric image transformations using perspective warps.
//!
//! - Perspective transformations (homographies) with configurable borders
//! - Rotation matrix generation
//!
//! # Examples
//!
//! Rotating around the center of a 256x256 image:
//!
//! ```no_run
//! use kornia_imgproc::warp::get_rotation_matrix2d;
//!
//! let rotation_matrix = get_rotation_matrix2d((128.0, 128.0), 45.0, 1.0);
//! ```

mod affine;
mod perspective;

pub use affine::get_rotation_matrix2d;
pub use perspective::warp_perspective;
