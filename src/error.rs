//! Unified error types for chatlift.
//!
//! This module provides a single [`ChatliftError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlift operations.
///
/// This type is broadly used across the library for any operation that
/// may produce an error.
///
/// # Example
///
/// ```rust
/// use chatlift::error::Result;
/// use chatlift::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatliftError>;

/// The error type for all chatlift operations.
///
/// This enum represents all possible errors that can occur when using chatlift.
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatliftError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No transcript could be extracted from the document.
    ///
    /// Contains the stage of extraction that came up empty. Extraction walks
    /// an ordered fallback chain; this error means every strategy in the
    /// chain (including the last-resort scan) found nothing.
    #[error("Extraction failed: {0}")]
    Extraction(#[source] ExtractionErrorKind),

    /// A compressed code stream could not be decoded.
    ///
    /// This occurs when:
    /// - A code references a dictionary entry that was never created
    /// - A code-string token is not a non-negative integer
    /// - The decoded bytes are not valid UTF-8
    #[error("Malformed code stream: {0}")]
    MalformedStream(#[source] CodecErrorKind),

    /// JSON parsing/serialization error.
    ///
    /// This can occur when serializing a transcript or reading a
    /// previously exported artifact back in.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input record is not a compressed-export artifact.
    ///
    /// Raised by the decode path when the JSON it was given lacks the
    /// `compressedContent` field or carries the wrong compression mode.
    #[error("Invalid compressed payload: {message}")]
    InvalidPayload {
        /// Description of what's wrong
        message: String,
    },

    /// An output artifact could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Delivery {
        /// The destination path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Kinds of extraction failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionErrorKind {
    /// No strategy in the container chain matched the document.
    #[error("no conversation container found in document")]
    NoContainer,
    /// A container was found but no candidate survived filtering.
    #[error("no message content found in conversation container")]
    NoMessages,
}

/// Kinds of codec failures.
#[derive(Debug, Error)]
pub enum CodecErrorKind {
    /// A code is neither a known dictionary entry nor the next to be assigned.
    #[error("code {code} out of range (next unassigned code: {next_code})")]
    CodeOutOfRange {
        /// The offending code
        code: u32,
        /// The code the decoder would have assigned next
        next_code: u32,
    },
    /// A token in a code string failed to parse as a code.
    #[error("invalid code token `{token}`")]
    InvalidToken {
        /// The offending token
        token: String,
    },
    /// The decoded byte sequence is not valid UTF-8.
    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl From<std::string::FromUtf8Error> for ChatliftError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatliftError::MalformedStream(CodecErrorKind::InvalidUtf8(err))
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatliftError {
    /// Creates an extraction error for a document with no conversation container.
    pub fn no_container() -> Self {
        ChatliftError::Extraction(ExtractionErrorKind::NoContainer)
    }

    /// Creates an extraction error for a container with no usable messages.
    pub fn no_messages() -> Self {
        ChatliftError::Extraction(ExtractionErrorKind::NoMessages)
    }

    /// Creates a malformed-stream error for an out-of-range code.
    pub fn code_out_of_range(code: u32, next_code: u32) -> Self {
        ChatliftError::MalformedStream(CodecErrorKind::CodeOutOfRange { code, next_code })
    }

    /// Creates a malformed-stream error for an unparseable code token.
    pub fn invalid_token(token: impl Into<String>) -> Self {
        ChatliftError::MalformedStream(CodecErrorKind::InvalidToken {
            token: token.into(),
        })
    }

    /// Creates an invalid payload error.
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        ChatliftError::InvalidPayload {
            message: message.into(),
        }
    }

    /// Creates a delivery error for a failed artifact write.
    pub fn delivery(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatliftError::Delivery {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatliftError::Io(_))
    }

    /// Returns `true` if this is an extraction error.
    pub fn is_extraction(&self) -> bool {
        matches!(self, ChatliftError::Extraction(_))
    }

    /// Returns `true` if this is a malformed code stream error.
    pub fn is_malformed_stream(&self) -> bool {
        matches!(self, ChatliftError::MalformedStream(_))
    }

    /// Returns `true` if this is an invalid payload error.
    pub fn is_invalid_payload(&self) -> bool {
        matches!(self, ChatliftError::InvalidPayload { .. })
    }

    /// Returns the extraction failure kind, if this is an extraction error.
    pub fn extraction_kind(&self) -> Option<&ExtractionErrorKind> {
        match self {
            ChatliftError::Extraction(kind) => Some(kind),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
