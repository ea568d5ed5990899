//! Error types for the roomcrop library.

use std::io;
use thiserror::Error;

/// Result type alias for roomcrop operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting rooms from a floor plan.
///
/// Input and recognition errors are fatal to a run and carry the original
/// engine message. A run that completes without matches is not an error;
/// it is reported as [`crate::Extraction::NoRooms`].
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input bytes are not recognized as a PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version marker is malformed.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The document could not be opened or its first page rendered.
    #[error("Document error: {0}")]
    Document(String),

    /// The document contains no pages.
    #[error("Document has no pages")]
    NoPages,

    /// The text-recognition engine failed to initialize or run.
    #[error("Recognition error: {0}")]
    Recognition(String),

    /// The output document could not be assembled or serialized.
    #[error("Compose error: {0}")]
    Compose(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Compose(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(err.to_string(), "Unknown file format: not a valid PDF");

        let err = Error::NoPages;
        assert_eq!(err.to_string(), "Document has no pages");

        let err = Error::Recognition("missing language data".to_string());
        assert_eq!(err.to_string(), "Recognition error: missing language data");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
