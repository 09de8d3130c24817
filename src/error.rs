//! Error types for the compositor

use thiserror::Error;

/// Result type alias for compositor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering, exporting or copying a surface
///
/// Malformed style values are never reported here: they are clamped by
/// [`StyleConfig::sanitized`](crate::StyleConfig::sanitized) before rendering.
/// A canceled save destination is not an error either; `export_to_file`
/// returns `Ok(false)` for it.
#[derive(Error, Debug)]
pub enum Error {
    /// The surface could not be converted to an encoded byte buffer
    #[error("Encoding to {format} failed: {reason}")]
    EncodingFailure { format: String, reason: String },

    /// The host clipboard rejected the image write
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// The source image could not be decoded
    #[error("Image decode failed: {0}")]
    Decode(String),

    /// The output surface could not be allocated
    #[error("Surface allocation failed: {0}")]
    Surface(String),

    /// A style file could not be parsed
    #[error("Invalid style configuration: {0}")]
    Config(String),

    /// I/O error while reading an input or writing an export
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_failure_names_format() {
        let err = Error::EncodingFailure {
            format: "PNG".into(),
            reason: "surface has zero area".into(),
        };
        assert_eq!(err.to_string(), "Encoding to PNG failed: surface has zero area");
    }

    #[test]
    fn json_errors_become_config_errors() {
        let err: Error = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
