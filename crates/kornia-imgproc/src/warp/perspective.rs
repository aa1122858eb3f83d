use crate::{
    interpolation::{interpolate_pixel, BorderMode, InterpolationMode},
    parallel,
};

use kornia_image::{Image, ImageDtype, ImageError};

#[rustfmt::skip]
fn determinant3x3(m: &[f64; 9]) -> f64 {
    m[0] * (m[4] * m[8] - m[5] * m[7]) -
    m[1] * (m[3] * m[8] - m[5] * m[6]) +
    m[2] * (m[3] * m[7] - m[4] * m[6])
}

#[rustfmt::skip]
fn adjugate3x3(m: &[f64; 9]) -> [f64; 9] {
    [
        m[4] * m[8] - m[5] * m[7],  // [0, 0]
        m[2] * m[7] - m[1] * m[8],  // [0, 1]
        m[1] * m[5] - m[2] * m[4],  // [0, 2]
        m[5] * m[6] - m[3] * m[8],  // [1, 0]
        m[0] * m[8] - m[2] * m[6],  // [1, 1]
        m[2] * m[3] - m[0] * m[5],  // [1, 2]
        m[3] * m[7] - m[4] * m[6],  // [2, 0]
        m[1] * m[6] - m[0] * m[7],  // [2, 1]
        m[0] * m[4] - m[1] * m[3],  // [2, 2]
    ]
}

fn inverse_perspective_matrix(m: &[f64; 9]) -> Result<[f64; 9], ImageError> {
    let det = determinant3x3(m);

    if det == 0.0 {
        return Err(ImageError::CannotComputeDeterminant);
    }

    let inv_det = 1.0 / det;
    Ok(adjugate3x3(m).map(|v| v * inv_det))
}

// points at infinity (w == 0) map to an infinite coordinate keeping the sign
// of the numerator, so the sampler reads the border
fn transform_point(x: f64, y: f64, m: &[f64; 9]) -> (f64, f64) {
    let u = m[0] * x + m[1] * y + m[2];
    let v = m[3] * x + m[4] * y + m[5];
    let w = m[6] * x + m[7] * y + m[8];
    if w == 0.0 {
        return (u.signum() * f64::INFINITY, v.signum() * f64::INFINITY);
    }
    (u / w, v / w)
}

/// Applies a perspective transformation to an image.
///
/// The output size is the size of `dst`. Every destination pixel `(x, y)` is
/// sampled from the source at `M^-1 * (x, y, 1)`.
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (new_height, new_width, channels).
/// * `m` - The 3x3 perspective transformation matrix src -> dst, row major.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - The policy for samples falling outside of `src`.
/// * `border_value` - The pixel value used by [`BorderMode::Constant`].
///
/// # Errors
///
/// Returns [`ImageError::CannotComputeDeterminant`] if `m` is singular.
///
/// # Example
///
/// ```
/// use kornia_image::{Image, ImageSize};
/// use kornia_imgproc::interpolation::{BorderMode, InterpolationMode};
/// use kornia_imgproc::warp::warp_perspective;
///
/// let src = Image::<u8, 4>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     10,
/// ).unwrap();
///
/// let m = [1.0, 0.0, -1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0];
///
/// let mut dst = Image::<u8, 4>::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     0,
/// ).unwrap();
///
/// warp_perspective(
///     &src,
///     &mut dst,
///     &m,
///     InterpolationMode::Bilinear,
///     BorderMode::Constant,
///     [150; 4],
/// ).unwrap();
///
/// assert_eq!(dst.size().width, 2);
/// assert_eq!(dst.size().height, 3);
/// assert_eq!(dst.pixel(0, 0).unwrap(), &[150; 4]);
/// assert_eq!(dst.pixel(1, 1).unwrap(), &[10; 4]);
/// ```
pub fn warp_perspective<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    m: &[f64; 9],
    interpolation: InterpolationMode,
    border: BorderMode,
    border_value: [T; C],
) -> Result<(), ImageError> {
    // TODO: skip the inversion when the caller passes the inverse map already
    let inv_m = inverse_perspective_matrix(m)?;
    let border_value = border_value.map(ImageDtype::to_f32);

    parallel::par_iter_rows_indexed(dst, |x, y, dst_pixel| {
        let (u, v) = transform_point(x as f64, y as f64, &inv_m);
        let pixel = interpolate_pixel(
            src,
            u as f32,
            v as f32,
            interpolation,
            border,
            &border_value,
        );
        dst_pixel
            .iter_mut()
            .zip(pixel)
            .for_each(|(d, p)| *d = T::from_f32(p));
    });

    Ok(())
}
