use thiserror::Error;

/// Errors raised while loading slider configuration or handle images.
///
/// The slider itself never fails; invalid values are corrected in place.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[cfg(feature = "serde")]
    #[error("invalid slider configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// A handle image could not be decoded.
    #[error("failed to decode handle image: {0}")]
    Image(#[from] image::ImageError),
}
