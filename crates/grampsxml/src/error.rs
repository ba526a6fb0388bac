//! Error types for reading and writing Gramps XML documents.

use thiserror::Error;

/// Errors raised by the Gramps XML reader and writer.
///
/// Every failure aborts the whole call; no partially built document is ever
/// returned alongside an error.
#[derive(Debug, Error)]
pub enum GrampsError {
    /// The input is not well-formed XML, or it does not have the shape of a
    /// Gramps document (wrong root, unexpected element, unparsable attribute).
    #[error("malformed document at byte {position}: {message}")]
    MalformedDocument { position: u64, message: String },

    /// The document declares a namespace this crate does not model.
    ///
    /// Only raised under [`NamespacePolicy::Strict`](crate::NamespacePolicy::Strict).
    #[error("unsupported namespace {}, expected {expected}", .found.as_deref().unwrap_or("<none>"))]
    UnsupportedNamespace {
        found: Option<String>,
        expected: &'static str,
    },

    /// Reading the input stream or writing the output stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialized output could not be decoded as UTF-8.
    #[error("invalid UTF-8 in serialized output: {0}")]
    Encoding(String),
}

impl GrampsError {
    pub(crate) fn malformed(position: u64, message: impl Into<String>) -> Self {
        GrampsError::MalformedDocument {
            position,
            message: message.into(),
        }
    }

    /// Byte offset of the failure for [`GrampsError::MalformedDocument`].
    pub fn position(&self) -> Option<u64> {
        match self {
            GrampsError::MalformedDocument { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Result type alias for Gramps XML operations.
pub type Result<T> = std::result::Result<T, GrampsError>;
