use kornia_image::{Image, ImageDtype};

use super::border::{fetch_pixel, BorderMode};

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `border` - The policy for coordinates outside the image.
/// * `border_value` - The value used by the constant border.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn nearest_neighbor_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    border: BorderMode,
    border_value: &[f32; C],
) -> [f32; C] {
    // float to int casts saturate, so far away points stay out of bounds
    let iu = u.round() as i64;
    let iv = v.round() as i64;
    fetch_pixel(image, iu, iv, border, border_value)
}
