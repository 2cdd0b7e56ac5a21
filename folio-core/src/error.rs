//! Error types for Folio Core

use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Top-level error type for all Folio operations
#[derive(Debug, Error)]
pub enum FolioError {
    /// No usable text after extraction
    #[error("No text content extracted from manuscript")]
    EmptyContent,

    #[error("Malformed metadata: {0}")]
    MalformedMetadata(String),

    #[error("Packaging failed: {0}")]
    PackagingFailure(String),

    /// An existing archive could not be read back
    #[error("Invalid archive: {0}")]
    InvalidArchive(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for FolioError {
    fn from(err: zip::result::ZipError) -> Self {
        FolioError::PackagingFailure(err.to_string())
    }
}

/// Errors that occur while pulling raw text out of a source document
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    #[error("Invalid DOCX: {0}")]
    InvalidDocx(String),
}

/// Errors that occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}
