use kornia_image::{Image, ImageError, ImageSize};
use kornia_imgproc::warp::{get_rotation_matrix2d, warp_perspective};

use crate::error::PerfError;
use crate::params::{BorderType, WarpPerspectiveParams};

/// Size of the synthetic source image.
pub const SRC_SIZE: ImageSize = ImageSize {
    width: 512,
    height: 512,
};

/// Value of every channel outside of the source image for constant borders.
pub const BORDER_COLOR: [u8; 4] = [150; 4];

/// Step of the triangular gradient written in the source image.
pub const GRADIENT_DELTA: usize = 5;

/// Step of the fade toward the border color for constant borders.
pub const SMOOTH_BORDER_DELTA: usize = 1;

const ROTATION_ANGLE: f64 = 30.0;
const ROTATION_SCALE: f64 = 2.2;
const PERSPECTIVE_FACTOR: f64 = 0.3;

// 0, delta, 2 * delta, .. up to 255 and back down
fn triangle_wave(i: usize, n: usize, delta: usize) -> u8 {
    let k = i % (2 * n);
    let val = if k <= n { delta * k } else { delta * (2 * n - k) };
    val.min(255) as u8
}

/// Fill a RGBA image with a triangular gradient.
///
/// The first channel ramps along the rows and the second along the columns,
/// both bouncing between 0 and 255 with step `delta`. The third channel grows
/// linearly from 0 to 200 with the row and the alpha is opaque.
pub fn fill_gradient(image: &mut Image<u8, 4>, delta: usize) {
    let delta = delta.clamp(1, 255);
    let n = 255 / delta;
    let (rows, cols) = (image.rows(), image.cols());

    image
        .as_slice_mut()
        .chunks_exact_mut(4 * cols)
        .enumerate()
        .for_each(|(r, row)| {
            let val_r = triangle_wave(r, n, delta);
            let val_b = (200 * r / rows) as u8;
            row.chunks_exact_mut(4).enumerate().for_each(|(c, pixel)| {
                let val_c = triangle_wave(c, n, delta);
                pixel.copy_from_slice(&[val_r, val_c, val_b, 255]);
            });
        });
}

fn blend(pixel: &mut [u8], color: &[u8; 4], k1: f64) {
    let k2 = 1.0 - k1;
    for (p, c) in pixel.iter_mut().zip(color) {
        *p = (*p as f64 * k1 + *c as f64 * k2) as u8;
    }
}

/// Fade the outer rows and columns of the image toward `color`.
///
/// The pixel at distance `d` from an edge keeps `d * delta / 100` of its value,
/// so the fade covers `100 / delta` pixels (at most half of the image).
pub fn smooth_border(image: &mut Image<u8, 4>, color: [u8; 4], delta: usize) {
    let delta = delta.max(1) as f64;
    let (rows, cols) = (image.rows(), image.cols());
    let n = 100.0 / delta;
    let n_rows = n.min((rows + 1) as f64 / 2.0);
    let n_cols = n.min((cols + 1) as f64 / 2.0);
    let stride = 4 * cols;
    let data = image.as_slice_mut();

    for r in (0..rows).take_while(|&r| (r as f64) < n_rows) {
        let k1 = r as f64 * delta / 100.0;
        for y in [r, rows - r - 1] {
            data[y * stride..(y + 1) * stride]
                .chunks_exact_mut(4)
                .for_each(|pixel| blend(pixel, &color, k1));
        }
    }

    for row in data.chunks_exact_mut(stride) {
        for c in (0..cols).take_while(|&c| (c as f64) < n_cols) {
            let k1 = c as f64 * delta / 100.0;
            for x in [c, cols - c - 1] {
                blend(&mut row[4 * x..4 * x + 4], &color, k1);
            }
        }
    }
}

/// Build the 3x3 transform of a case.
///
/// The affine part rotates the source by 30 degrees around its center and
/// scales it by 2.2; the last row adds a perspective term depending on the
/// destination size.
pub fn warp_matrix(src_size: ImageSize, dsize: ImageSize) -> [f64; 9] {
    let center = (src_size.width as f64 / 2.0, src_size.height as f64 / 2.0);
    let [a, b, c, d, e, f] = get_rotation_matrix2d(center, ROTATION_ANGLE, ROTATION_SCALE);
    [
        a,
        b,
        c,
        d,
        e,
        f,
        PERSPECTIVE_FACTOR / dsize.width as f64,
        PERSPECTIVE_FACTOR / dsize.height as f64,
        1.0,
    ]
}

/// The images and the transform of one combination of the sweep.
///
/// Dropping the case releases its buffers.
pub struct WarpPerspectiveCase {
    params: WarpPerspectiveParams,
    src: Image<u8, 4>,
    dst: Image<u8, 4>,
    transform: [f64; 9],
}

impl WarpPerspectiveCase {
    /// Allocate and fill the images of a combination.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination size is empty.
    pub fn setup(params: WarpPerspectiveParams) -> Result<Self, PerfError> {
        let mut src = Image::from_size_val(SRC_SIZE, 0u8)?;
        fill_gradient(&mut src, GRADIENT_DELTA);
        if params.border_type == BorderType::Constant {
            smooth_border(&mut src, BORDER_COLOR, SMOOTH_BORDER_DELTA);
        }

        let dst = Image::from_size_val(params.size, 0u8)?;
        let transform = warp_matrix(src.size(), params.size);

        log::debug!("set up warpPerspective {params} with transform {transform:?}");

        Ok(Self {
            params,
            src,
            dst,
            transform,
        })
    }

    /// Warp the source into the destination once.
    pub fn run(&mut self) -> Result<(), ImageError> {
        warp_perspective(
            &self.src,
            &mut self.dst,
            &self.transform,
            self.params.inter_type.mode(),
            self.params.border_type.mode(),
            BORDER_COLOR,
        )
    }

    /// The combination of the case.
    pub fn params(&self) -> &WarpPerspectiveParams {
        &self.params
    }

    /// The synthetic source image.
    pub fn src(&self) -> &Image<u8, 4> {
        &self.src
    }

    /// The destination image, holding the last warp result.
    pub fn dst(&self) -> &Image<u8, 4> {
        &self.dst
    }

    /// The 3x3 transform, row major.
    pub fn transform(&self) -> &[f64; 9] {
        &self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gradient_values() -> Result<(), ImageError> {
        let mut image = Image::<u8, 4>::from_size_val([120, 110].into(), 0)?;
        fill_gradient(&mut image, 5);

        assert_eq!(image.pixel(0, 0)?, &[0, 0, 0, 255]);
        assert_eq!(image.pixel(3, 2)?, &[10, 15, 3, 255]);
        // peak at n = 51, then back down
        assert_eq!(image.pixel(51, 51)?, &[255, 255, 92, 255]);
        assert_eq!(image.pixel(53, 0)?, &[0, 245, 0, 255]);
        // period of 2 * n = 102
        assert_eq!(image.pixel(102, 109)?, &[35, 0, 198, 255]);
        Ok(())
    }

    #[test]
    fn smooth_border_fades_edges() -> Result<(), ImageError> {
        let mut image = Image::<u8, 4>::from_size_val([8, 6].into(), 250)?;
        smooth_border(&mut image, [150; 4], 25);

        // the fade spans min(100 / 25, (6 + 1) / 2) = 3.5 rows, so the two
        // middle rows are blended from the top and from the bottom
        assert_eq!(image.pixel(4, 0)?, &[150; 4]);
        assert_eq!(image.pixel(0, 3)?, &[150; 4]);
        // 250 -> 175 (row 1) -> 168.75 (column 4 mirrors column 3)
        assert_eq!(image.pixel(4, 1)?, &[168; 4]);
        // 250 -> 200 -> 187 (rows 2 and 3) -> 159.25 (column 6 mirrors column 1)
        assert_eq!(image.pixel(6, 2)?, &[159; 4]);
        Ok(())
    }

    #[test]
    fn matrix_of_case() {
        let m = warp_matrix(SRC_SIZE, [640, 480].into());
        assert_relative_eq!(m[0], 2.2 * 30f64.to_radians().cos(), epsilon = 1e-12);
        assert_relative_eq!(m[1], 1.1, epsilon = 1e-12);
        assert_relative_eq!(m[6], 0.3 / 640.0);
        assert_relative_eq!(m[7], 0.3 / 480.0);
        assert_eq!(m[8], 1.0);
    }

    #[test]
    fn setup_and_run() -> Result<(), PerfError> {
        let params = crate::params::WarpPerspectiveParams {
            size: [64, 48].into(),
            inter_type: crate::params::InterType::Linear,
            border_type: BorderType::Constant,
        };
        let mut case = WarpPerspectiveCase::setup(params)?;
        assert_eq!(case.src().size(), SRC_SIZE);
        assert_eq!(case.dst().size(), params.size);
        // corners faded to the border color
        assert_eq!(case.src().pixel(0, 0)?, &BORDER_COLOR);

        case.run()?;
        assert!(case.dst().as_slice().iter().any(|&v| v != 0));
        Ok(())
    }

    #[test]
    fn setup_rejects_empty_size() {
        let params = crate::params::WarpPerspectiveParams {
            size: [0, 48].into(),
            inter_type: crate::params::InterType::Nearest,
            border_type: BorderType::Replicate,
        };
        assert!(matches!(
            WarpPerspectiveCase::setup(params),
            Err(PerfError::Image(ImageError::InvalidImageSize(0, 48)))
        ));
    }
}
