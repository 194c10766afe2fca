//! Error types for grid construction, transforms and renderers.

/// Errors produced by the image, transform and rendering functions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageError {
    /// An argument is outside the range the operation accepts.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input is well-formed but the operation cannot produce a meaningful result.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ImageError>;
