//! Export format types for the chatlift library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks, so they work the same whether the binary, a test, or another
//! crate drives the export.
//!
//! # Example
//!
//! ```rust
//! use chatlift::format::ExportFormat;
//! use std::str::FromStr;
//!
//! let format = ExportFormat::from_str("lzw").unwrap();
//! assert_eq!(format, ExportFormat::CompressedJson);
//! assert_eq!(format.extension(), "json");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatliftError, Result};
use crate::output::{html, json};
use crate::transcript::Transcript;

/// Export format for extracted transcripts.
///
/// Three artifact shapes are supported:
/// - [`Json`](ExportFormat::Json) - Full transcript as pretty-printed JSON
/// - [`CompressedJson`](ExportFormat::CompressedJson) - Metadata plus the
///   conversation as an LZW code string
/// - [`Html`](ExportFormat::Html) - Self-contained styled page for reading
///
/// # Example
///
/// ```rust
/// use chatlift::format::ExportFormat;
/// use std::str::FromStr;
///
/// let format = ExportFormat::from_str("html").unwrap();
/// assert_eq!(format, ExportFormat::Html);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExportFormat {
    /// Pretty-printed JSON transcript (default)
    ///
    /// Carries the metadata block and the full conversation array.
    #[default]
    Json,

    /// JSON envelope with an LZW-compressed conversation
    ///
    /// The conversation array is serialized compactly, compressed, and
    /// stored as a comma-joined code string alongside the metadata.
    #[serde(rename = "lzw")]
    CompressedJson,

    /// Self-contained HTML page
    ///
    /// Inline CSS, no scripts, no external assets.
    Html,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// Both JSON variants use `json`; the compressed one is distinguished
    /// by the `-compressed` suffix in [`default_filename`](Self::default_filename).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlift::format::ExportFormat;
    ///
    /// assert_eq!(ExportFormat::Json.extension(), "json");
    /// assert_eq!(ExportFormat::CompressedJson.extension(), "json");
    /// assert_eq!(ExportFormat::Html.extension(), "html");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json | ExportFormat::CompressedJson => "json",
            ExportFormat::Html => "html",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "lzw", "compressed", "html"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ExportFormat] {
        &[
            ExportFormat::Json,
            ExportFormat::CompressedJson,
            ExportFormat::Html,
        ]
    }

    /// Detects format from a file path based on extension.
    ///
    /// A `.json` extension maps to the uncompressed variant; compressed
    /// output has no extension of its own and must be requested explicitly.
    /// The decode action uses this to pick its republication format from
    /// the output path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlift::format::ExportFormat;
    /// use std::path::Path;
    ///
    /// let format = ExportFormat::from_path(Path::new("out/conversation.html")).unwrap();
    /// assert_eq!(format, ExportFormat::Html);
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(ExportFormat::Json),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(ChatliftError::invalid_payload(format!(
                "Unknown file extension: '.{ext}'. Expected one of: json, html"
            ))),
        }
    }

    /// Returns the conventional filename for an export made at `timestamp`.
    ///
    /// Colons are not filesystem-safe everywhere, so the time-of-day part
    /// uses dashes. Compressed exports get a `-compressed` suffix to keep
    /// them apart from plain JSON written in the same second.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlift::format::ExportFormat;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 45).unwrap();
    /// assert_eq!(
    ///     ExportFormat::CompressedJson.default_filename(ts),
    ///     "conversation-2024-06-15T12-30-45-compressed.json"
    /// );
    /// ```
    pub fn default_filename(&self, timestamp: chrono::DateTime<chrono::Utc>) -> String {
        let suffix = match self {
            ExportFormat::CompressedJson => "-compressed",
            _ => "",
        };
        format!(
            "conversation-{}{}.{}",
            timestamp.format("%Y-%m-%dT%H-%M-%S"),
            suffix,
            self.extension()
        )
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::CompressedJson => write!(f, "compressed JSON"),
            ExportFormat::Html => write!(f, "HTML"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "lzw" | "compressed" | "compressed-json" => Ok(ExportFormat::CompressedJson),
            "html" => Ok(ExportFormat::Html),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders a transcript to a string in the specified format.
///
/// This is useful when you need the artifact in memory rather than on disk.
///
/// # Example
///
/// ```rust
/// use chatlift::format::{ExportFormat, to_format_string};
/// use chatlift::{Message, Role, Transcript};
/// use chrono::Utc;
///
/// # fn main() -> chatlift::Result<()> {
/// let now = Utc::now();
/// let transcript = Transcript::new(
///     "https://example.com/chat",
///     now,
///     vec![Message::new(Role::User, "Hello!", 1, now)],
/// );
/// let html = to_format_string(&transcript, ExportFormat::Html)?;
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// # Ok(())
/// # }
/// ```
pub fn to_format_string(transcript: &Transcript, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => json::to_json(transcript),
        ExportFormat::CompressedJson => json::to_compressed_json(transcript),
        ExportFormat::Html => Ok(html::render(transcript)),
    }
}

/// Writes a transcript to a file in the specified format.
///
/// This is a convenience function that selects the appropriate writer
/// based on the format enum.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_to_format(transcript: &Transcript, path: &Path, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Json => json::write_json(transcript, path),
        ExportFormat::CompressedJson => json::write_compressed_json(transcript, path),
        ExportFormat::Html => html::write_html(transcript, path),
    }
}
