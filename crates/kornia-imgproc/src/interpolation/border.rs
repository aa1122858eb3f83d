use kornia_image::{Image, ImageDtype};

/// Policy to produce pixel values for coordinates outside of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderMode {
    /// Outside pixels take a constant value.
    Constant,
    /// Outside pixels repeat the closest edge pixel.
    Replicate,
}

impl BorderMode {
    /// Map a possibly out of bounds coordinate to a valid index along an axis of length `len`.
    ///
    /// Returns `None` when the constant border value must be used instead.
    ///
    /// # Example
    ///
    /// ```
    /// use kornia_imgproc::interpolation::BorderMode;
    ///
    /// assert_eq!(BorderMode::Constant.resolve(-1, 4), None);
    /// assert_eq!(BorderMode::Replicate.resolve(-1, 4), Some(0));
    /// assert_eq!(BorderMode::Replicate.resolve(9, 4), Some(3));
    /// ```
    pub fn resolve(&self, coord: i64, len: usize) -> Option<usize> {
        let last = len as i64 - 1;
        match self {
            BorderMode::Constant => (0..=last).contains(&coord).then_some(coord as usize),
            BorderMode::Replicate => Some(coord.clamp(0, last) as usize),
        }
    }
}

/// Read a pixel as f32 channels, falling back to the border policy when out of bounds.
pub(crate) fn fetch_pixel<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    x: i64,
    y: i64,
    border: BorderMode,
    border_value: &[f32; C],
) -> [f32; C] {
    let (Some(ix), Some(iy)) = (
        border.resolve(x, image.cols()),
        border.resolve(y, image.rows()),
    ) else {
        return *border_value;
    };

    let base = (iy * image.cols() + ix) * C;
    let src = &image.as_slice()[base..base + C];

    let mut pixel = [0.0; C];
    for (p, s) in pixel.iter_mut().zip(src) {
        *p = s.to_f32();
    }
    pixel
}

#[cfg(test)]
mod tests {
    use super::{fetch_pixel, BorderMode};
    use kornia_image::{Image, ImageError, ImageSize};

    #[test]
    fn resolve_constant() {
        assert_eq!(BorderMode::Constant.resolve(0, 3), Some(0));
        assert_eq!(BorderMode::Constant.resolve(2, 3), Some(2));
        assert_eq!(BorderMode::Constant.resolve(3, 3), None);
        assert_eq!(BorderMode::Constant.resolve(i64::MIN, 3), None);
    }

    #[test]
    fn resolve_replicate() {
        assert_eq!(BorderMode::Replicate.resolve(-5, 3), Some(0));
        assert_eq!(BorderMode::Replicate.resolve(1, 3), Some(1));
        assert_eq!(BorderMode::Replicate.resolve(i64::MAX, 3), Some(2));
    }

    #[test]
    fn fetch_outside() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1, 2, 3, 4],
        )?;
        assert_eq!(fetch_pixel(&image, 1, 1, BorderMode::Constant, &[9.0]), [4.0]);
        assert_eq!(fetch_pixel(&image, 2, 1, BorderMode::Constant, &[9.0]), [9.0]);
        assert_eq!(fetch_pixel(&image, 2, -1, BorderMode::Replicate, &[9.0]), [2.0]);
        Ok(())
    }
}
