//! Error types for the paperback library.

use std::io;
use thiserror::Error;

/// Result type alias for paperback operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning a manuscript into a PDF.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the source or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file extension is neither `.docx` nor `.md`.
    #[error("Unsupported file format: {0}. Please provide a .docx or a .md file.")]
    UnsupportedFormat(String),

    /// The `.docx` container is broken or missing required parts.
    #[error("Invalid .docx file: {0}")]
    InvalidDocx(String),

    /// XML inside the `.docx` container could not be parsed.
    #[error("XML error: {0}")]
    Xml(String),

    /// Source text is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A layout parameter is malformed or produces an impossible page.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// The HTML-to-PDF engine failed.
    #[error("Rendering error: {0}")]
    Render(String),

    /// A rendered PDF could not be loaded or assembled.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => {
                Error::InvalidDocx("missing part in archive".to_string())
            }
            _ => Error::InvalidDocx(err.to_string()),
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}
