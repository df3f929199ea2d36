//! Error types for the sav-header crate.

use sav_model::{Category, DictionaryError};
use thiserror::Error;

/// Errors raised while reading a data dictionary from a provider.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// The provider does not expose the requested category. Indicates a
    /// provider/version mismatch; a partial dictionary must never escape.
    #[error("provider does not expose dictionary category {category}")]
    CategoryUnavailable { category: Category },

    /// The underlying resource has been released.
    #[error("reader session is closed")]
    SessionClosed,

    /// An incomplete dictionary mapping.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// I/O error from the underlying file resource.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for header operations.
pub type Result<T> = std::result::Result<T, HeaderError>;
