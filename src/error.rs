use thiserror::Error;

/// Crop computation error.
///
/// Raised before any box arithmetic runs, so a failed call never yields a
/// partially computed box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum CropError {
    /// Desired width or height is zero or negative.
    #[error("desired dimensions must be positive, got {width}x{height}")]
    InvalidDesiredDimensions { width: i64, height: i64 },

    /// Original (source image) width or height is zero or negative.
    #[error("original dimensions must be positive, got {width}x{height}")]
    InvalidOriginalDimensions { width: i64, height: i64 },

    /// A plan was requested without a target width and height.
    #[error("desired width and height are both required")]
    MissingDesiredDimensions,
}
