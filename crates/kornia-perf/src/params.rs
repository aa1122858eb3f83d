use std::fmt;
use std::str::FromStr;

use kornia_image::ImageSize;
use kornia_imgproc::interpolation::{BorderMode, InterpolationMode};

use crate::error::PerfError;

/// VGA output size.
pub const SZ_VGA: ImageSize = ImageSize {
    width: 640,
    height: 480,
};

/// 720p output size.
pub const SZ_720P: ImageSize = ImageSize {
    width: 1280,
    height: 720,
};

/// 1080p output size.
pub const SZ_1080P: ImageSize = ImageSize {
    width: 1920,
    height: 1080,
};

/// Output sizes swept by the warpPerspective benchmark.
pub const WARP_PERSPECTIVE_SIZES: [ImageSize; 3] = [SZ_VGA, SZ_720P, SZ_1080P];

/// Interpolation flag as written in the benchmark parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterType {
    /// `INTER_NEAREST`
    Nearest,
    /// `INTER_LINEAR`
    Linear,
}

impl InterType {
    /// All the interpolation flags of the sweep, in sweep order.
    pub const ALL: [InterType; 2] = [InterType::Nearest, InterType::Linear];

    /// The flag name, e.g. `INTER_LINEAR`.
    pub fn name(&self) -> &'static str {
        match self {
            InterType::Nearest => "INTER_NEAREST",
            InterType::Linear => "INTER_LINEAR",
        }
    }

    /// The interpolation mode passed to the warp.
    pub fn mode(&self) -> InterpolationMode {
        match self {
            InterType::Nearest => InterpolationMode::Nearest,
            InterType::Linear => InterpolationMode::Bilinear,
        }
    }
}

impl fmt::Display for InterType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterType {
    type Err = PerfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| PerfError::UnknownParam {
                kind: "interpolation",
                value: s.to_string(),
            })
    }
}

/// Border flag as written in the benchmark parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderType {
    /// `BORDER_CONSTANT`
    Constant,
    /// `BORDER_REPLICATE`
    Replicate,
}

impl BorderType {
    /// All the border flags of the sweep, in sweep order.
    pub const ALL: [BorderType; 2] = [BorderType::Constant, BorderType::Replicate];

    /// The flag name, e.g. `BORDER_CONSTANT`.
    pub fn name(&self) -> &'static str {
        match self {
            BorderType::Constant => "BORDER_CONSTANT",
            BorderType::Replicate => "BORDER_REPLICATE",
        }
    }

    /// The border mode passed to the warp.
    pub fn mode(&self) -> BorderMode {
        match self {
            BorderType::Constant => BorderMode::Constant,
            BorderType::Replicate => BorderMode::Replicate,
        }
    }
}

impl fmt::Display for BorderType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderType {
    type Err = PerfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| PerfError::UnknownParam {
                kind: "border",
                value: s.to_string(),
            })
    }
}

/// Parse a `WIDTHxHEIGHT` string.
///
/// # Example
///
/// ```
/// use kornia_perf::params::parse_size;
///
/// let size = parse_size("640x480").unwrap();
/// assert_eq!((size.width, size.height), (640, 480));
/// assert!(parse_size("640 x 480").is_err());
/// ```
pub fn parse_size(s: &str) -> Result<ImageSize, PerfError> {
    let invalid = || PerfError::UnknownParam {
        kind: "size",
        value: s.to_string(),
    };
    let (width, height) = s.split_once('x').ok_or_else(invalid)?;
    let width = width.parse().map_err(|_| invalid())?;
    let height = height.parse().map_err(|_| invalid())?;
    Ok(ImageSize { width, height })
}

/// One combination of the warpPerspective sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WarpPerspectiveParams {
    /// Size of the destination image.
    pub size: ImageSize,
    /// Interpolation flag.
    pub inter_type: InterType,
    /// Border flag.
    pub border_type: BorderType,
}

impl fmt::Display for WarpPerspectiveParams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.size, self.inter_type, self.border_type
        )
    }
}

impl From<(ImageSize, InterType, BorderType)> for WarpPerspectiveParams {
    fn from((size, inter_type, border_type): (ImageSize, InterType, BorderType)) -> Self {
        Self {
            size,
            inter_type,
            border_type,
        }
    }
}

/// Ordered cross product of three parameter lists, the first list being the outermost.
///
/// # Example
///
/// ```
/// use kornia_perf::params::combine;
///
/// let combos = combine(&[1, 2], &['a'], &[true, false]);
/// assert_eq!(combos, vec![(1, 'a', true), (1, 'a', false), (2, 'a', true), (2, 'a', false)]);
/// ```
pub fn combine<A: Clone, B: Clone, C: Clone>(a: &[A], b: &[B], c: &[C]) -> Vec<(A, B, C)> {
    a.iter()
        .flat_map(|x| {
            b.iter().flat_map(move |y| {
                c.iter()
                    .map(move |z| (x.clone(), y.clone(), z.clone()))
            })
        })
        .collect()
}

/// The full warpPerspective sweep: sizes, then interpolation, then border.
pub fn warp_perspective_combinations() -> Vec<WarpPerspectiveParams> {
    combine(&WARP_PERSPECTIVE_SIZES, &InterType::ALL, &BorderType::ALL)
        .into_iter()
        .map(WarpPerspectiveParams::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_order() {
        let combos = warp_perspective_combinations();
        assert_eq!(combos.len(), 12);
        assert_eq!(
            combos[0].to_string(),
            "(640x480, INTER_NEAREST, BORDER_CONSTANT)"
        );
        assert_eq!(
            combos[1].to_string(),
            "(640x480, INTER_NEAREST, BORDER_REPLICATE)"
        );
        assert_eq!(
            combos[2].to_string(),
            "(640x480, INTER_LINEAR, BORDER_CONSTANT)"
        );
        assert_eq!(
            combos[11].to_string(),
            "(1920x1080, INTER_LINEAR, BORDER_REPLICATE)"
        );
    }

    #[test]
    fn flag_names() -> Result<(), PerfError> {
        assert_eq!("INTER_LINEAR".parse::<InterType>()?, InterType::Linear);
        assert_eq!(InterType::Linear.mode(), InterpolationMode::Bilinear);
        assert_eq!("BORDER_REPLICATE".parse::<BorderType>()?, BorderType::Replicate);
        assert_eq!(BorderType::Constant.mode(), BorderMode::Constant);
        assert_eq!(
            "INTER_CUBIC".parse::<InterType>(),
            Err(PerfError::UnknownParam {
                kind: "interpolation",
                value: "INTER_CUBIC".to_string(),
            })
        );
        assert!("BORDER_WRAP".parse::<BorderType>().is_err());
        Ok(())
    }

    #[test]
    fn sizes() -> Result<(), PerfError> {
        assert_eq!(parse_size("1280x720")?, SZ_720P);
        assert!(parse_size("1280").is_err());
        assert!(parse_size("x720").is_err());
        Ok(())
    }
}
