/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image has a zero dimension.
    #[error("Invalid image size ({0}x{1}), width and height must be greater than zero")]
    InvalidImageSize(usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds for image size ({2}x{3})")]
    InvalidPixelIndex(usize, usize, usize, usize),

    /// Error when the determinant of a transform is zero.
    #[error("Cannot compute the determinant of the transform")]
    CannotComputeDeterminant,
}
