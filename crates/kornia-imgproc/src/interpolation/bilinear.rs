use kornia_image::{Image, ImageDtype};

use super::border::{fetch_pixel, BorderMode};

/// Kernel for bilinear interpolation
///
/// The four neighbours are read through the border policy, so a constant
/// border blends the edge pixels toward the border value.
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
pub(crate) fn bilinear_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    border: BorderMode,
    border_value: &[f32; C],
) -> [f32; C] {
    let (u0, v0) = (u.floor(), v.floor());
    let (frac_u, frac_v) = (u - u0, v - v0);
    let (iu0, iv0) = (u0 as i64, v0 as i64);
    let (iu1, iv1) = (iu0.saturating_add(1), iv0.saturating_add(1));

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let p00 = fetch_pixel(image, iu0, iv0, border, border_value);
    let p01 = fetch_pixel(image, iu1, iv0, border, border_value);
    let p10 = fetch_pixel(image, iu0, iv1, border, border_value);
    let p11 = fetch_pixel(image, iu1, iv1, border, border_value);

    let mut pixel = [0.0; C];
    for k in 0..C {
        pixel[k] = p00[k] * w00 + p01[k] * w01 + p10[k] * w10 + p11[k] * w11;
    }

    pixel
}
