use kornia_image::ImageError;

/// An error type for the benchmark harness.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PerfError {
    /// Error when building the images of a case.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error when a parameter name is not part of the sweep.
    #[error("Unknown {kind} `{value}`")]
    UnknownParam {
        /// The kind of parameter, e.g. interpolation.
        kind: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Error when the suite configuration cannot drive criterion.
    #[error("Invalid suite configuration: {0}")]
    InvalidConfig(String),
}
