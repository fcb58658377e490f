//! Errors for the fallible edges of the crate.
//!
//! Building, mutating, animating and drawing shapes cannot fail. Only the
//! parts that touch the outside world (reading configuration, encoding
//! images) return [`Result`].

use std::fmt;

/// Errors raised while loading configuration or exporting rendered images.
#[derive(Debug)]
pub enum RaypalsError {
    /// Reading or writing a file failed.
    Io(std::io::Error),
    /// A configuration document could not be parsed.
    Config(String),
    /// Encoding a rasterized image failed.
    #[cfg(feature = "raster")]
    Image(image::ImageError),
}

impl fmt::Display for RaypalsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaypalsError::Io(e) => write!(f, "i/o failed: {e}"),
            RaypalsError::Config(e) => write!(f, "invalid configuration: {e}"),
            #[cfg(feature = "raster")]
            RaypalsError::Image(e) => write!(f, "image export failed: {e}"),
        }
    }
}

impl std::error::Error for RaypalsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RaypalsError::Io(e) => Some(e),
            RaypalsError::Config(_) => None,
            #[cfg(feature = "raster")]
            RaypalsError::Image(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for RaypalsError {
    fn from(e: std::io::Error) -> Self {
        RaypalsError::Io(e)
    }
}

impl From<serde_json::Error> for RaypalsError {
    fn from(e: serde_json::Error) -> Self {
        RaypalsError::Config(e.to_string())
    }
}

#[cfg(feature = "raster")]
impl From<image::ImageError> for RaypalsError {
    fn from(e: image::ImageError) -> Self {
        RaypalsError::Image(e)
    }
}

pub type Result<T> = std::result::Result<T, RaypalsError>;
