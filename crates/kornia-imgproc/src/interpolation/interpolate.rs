use super::bilinear::bilinear_interpolation;
use super::border::{fetch_pixel, BorderMode};
use super::nearest::nearest_neighbor_interpolation;
use kornia_image::{Image, ImageDtype};

/// Interpolation mode for the resampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - The policy for coordinates outside the image.
/// * `border_value` - The value used by [`BorderMode::Constant`].
///
/// Non finite coordinates (points mapped to infinity) are not interpolated:
/// they read the border directly, i.e. `border_value` for
/// [`BorderMode::Constant`] and the closest edge pixel for
/// [`BorderMode::Replicate`].
///
/// # Returns
///
/// The interpolated pixel value for every channel.
pub fn interpolate_pixel<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
    border: BorderMode,
    border_value: &[f32; C],
) -> [f32; C] {
    if !(u.is_finite() && v.is_finite()) {
        // float to int casts saturate, NaN goes to 0
        return fetch_pixel(image, u as i64, v as i64, border, border_value);
    }

    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v, border, border_value),
        InterpolationMode::Nearest => {
            nearest_neighbor_interpolation(image, u, v, border, border_value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{interpolate_pixel, BorderMode, InterpolationMode};
    use approx::assert_relative_eq;
    use kornia_image::{Image, ImageError};

    fn ramp() -> Result<Image<f32, 1>, ImageError> {
        Image::new([2, 2].into(), vec![0.0, 10.0, 20.0, 30.0])
    }

    #[test]
    fn bilinear_inside() -> Result<(), ImageError> {
        let image = ramp()?;
        let [val] = interpolate_pixel(
            &image,
            0.5,
            0.5,
            InterpolationMode::Bilinear,
            BorderMode::Constant,
            &[0.0],
        );
        assert_relative_eq!(val, 15.0);
        Ok(())
    }

    #[test]
    fn bilinear_constant_border_blends() -> Result<(), ImageError> {
        let image = ramp()?;
        let [val] = interpolate_pixel(
            &image,
            1.5,
            0.0,
            InterpolationMode::Bilinear,
            BorderMode::Constant,
            &[100.0],
        );
        assert_relative_eq!(val, 55.0);
        Ok(())
    }

    #[test]
    fn bilinear_replicate_border() -> Result<(), ImageError> {
        let image = ramp()?;
        let [val] = interpolate_pixel(
            &image,
            1.5,
            0.0,
            InterpolationMode::Bilinear,
            BorderMode::Replicate,
            &[100.0],
        );
        assert_relative_eq!(val, 10.0);
        Ok(())
    }

    #[test]
    fn nearest_rounds() -> Result<(), ImageError> {
        let image = ramp()?;
        let nearest = |u, v, border| {
            interpolate_pixel(&image, u, v, InterpolationMode::Nearest, border, &[-1.0])[0]
        };
        assert_eq!(nearest(0.6, 0.4, BorderMode::Constant), 10.0);
        assert_eq!(nearest(0.4, 0.6, BorderMode::Constant), 20.0);
        assert_eq!(nearest(1.6, 0.0, BorderMode::Constant), -1.0);
        assert_eq!(nearest(1.6, 0.0, BorderMode::Replicate), 10.0);
        assert_eq!(nearest(f32::MAX, f32::MIN, BorderMode::Replicate), 10.0);
        Ok(())
    }

    #[test]
    fn infinite_coordinates_read_the_border() -> Result<(), ImageError> {
        let image = ramp()?;
        for interpolation in [InterpolationMode::Nearest, InterpolationMode::Bilinear] {
            let sample = |u, v, border| {
                interpolate_pixel(&image, u, v, interpolation, border, &[-1.0])[0]
            };
            assert_eq!(sample(f32::INFINITY, 0.0, BorderMode::Constant), -1.0);
            assert_eq!(sample(0.0, f32::NEG_INFINITY, BorderMode::Constant), -1.0);
            assert_eq!(sample(f32::INFINITY, f32::INFINITY, BorderMode::Replicate), 30.0);
            assert_eq!(sample(f32::NEG_INFINITY, f32::INFINITY, BorderMode::Replicate), 20.0);
        }
        Ok(())
    }
}
