//! Transcript container and export metadata.
//!
//! This module provides [`Transcript`], the ordered collection of extracted
//! messages plus the [`Meta`] block that accompanies it in every artifact,
//! and [`Compression`], the mode recorded in that block.
//!
//! # Artifact shape
//!
//! An uncompressed transcript serializes as:
//!
//! ```json
//! {
//!   "meta": {
//!     "url": "https://example.com/chat/abc",
//!     "timestamp": "2024-06-15T12:00:00Z",
//!     "compression": "none",
//!     "messageCount": 2,
//!     "exportedBy": "chatlift v0.2.0"
//!   },
//!   "conversation": [ ... ]
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use chatlift::{Message, Role, Transcript};
//! use chrono::Utc;
//!
//! let now = Utc::now();
//! let transcript = Transcript::new(
//!     "https://example.com/chat",
//!     now,
//!     vec![
//!         Message::new(Role::User, "Hello", 1, now),
//!         Message::new(Role::Assistant, "Hi there", 2, now),
//!     ],
//! );
//!
//! assert_eq!(transcript.len(), 2);
//! assert_eq!(transcript.meta().message_count, 2);
//! assert_eq!(transcript.user_count(), 1);
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::message::{Message, Role};

/// Tool identifier stamped into the `exportedBy` meta field.
pub const EXPORTER: &str = concat!("chatlift v", env!("CARGO_PKG_VERSION"));

/// The compression mode recorded in a transcript's metadata.
///
/// Serialized in lowercase (`"none"`, `"dictionary"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// Conversation serialized in clear.
    #[default]
    None,
    /// Conversation run through the dictionary codec.
    Dictionary,
}

impl Compression {
    /// Returns the lowercase string form used in artifacts.
    pub fn as_str(self) -> &'static str {
        match self {
            Compression::None => "none",
            Compression::Dictionary => "dictionary",
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata block written alongside every exported transcript.
///
/// Field names in JSON follow the artifact format (`messageCount`,
/// `exportedBy`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Source page URL, or an empty string when not provided.
    pub url: String,
    /// When the extraction ran.
    pub timestamp: DateTime<Utc>,
    /// Compression mode of the accompanying conversation.
    pub compression: Compression,
    /// Number of messages in the conversation.
    pub message_count: usize,
    /// Tool name and version that produced the artifact.
    pub exported_by: String,
}

/// An ordered, role-labeled conversation plus its export metadata.
///
/// The constructor derives `meta.message_count` from the message list, so a
/// freshly built transcript always satisfies the count invariant. Messages
/// are stored in extraction order; their `index` fields run `1..=N`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Export metadata.
    pub meta: Meta,
    /// The extracted messages, in order.
    #[serde(rename = "conversation")]
    pub messages: Vec<Message>,
}

impl Transcript {
    /// Creates a transcript with metadata derived from the message list.
    ///
    /// The compression mode starts as [`Compression::None`]; the compressed
    /// export path stamps [`Compression::Dictionary`] when it wraps the
    /// conversation.
    pub fn new(
        url: impl Into<String>,
        timestamp: DateTime<Utc>,
        messages: Vec<Message>,
    ) -> Self {
        let meta = Meta {
            url: url.into(),
            timestamp,
            compression: Compression::None,
            message_count: messages.len(),
            exported_by: EXPORTER.to_string(),
        };
        Self { meta, messages }
    }

    /// Returns the metadata block.
    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Returns the messages in extraction order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the transcript holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the number of messages classified as [`Role::User`].
    pub fn user_count(&self) -> usize {
        self.count_role(Role::User)
    }

    /// Returns the number of messages classified as [`Role::Assistant`].
    pub fn assistant_count(&self) -> usize {
        self.count_role(Role::Assistant)
    }

    /// Returns the number of messages the classifier could not attribute.
    pub fn unknown_count(&self) -> usize {
        self.count_role(Role::Unknown)
    }

    fn count_role(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn sample() -> Transcript {
        Transcript::new(
            "https://example.com/chat",
            ts(),
            vec![
                Message::new(Role::User, "Hello", 1, ts()),
                Message::new(Role::Assistant, "Hi there", 2, ts()),
                Message::new(Role::User, "How are you?", 3, ts()),
            ],
        )
    }

    #[test]
    fn test_message_count_matches_len() {
        let transcript = sample();
        assert_eq!(transcript.meta().message_count, transcript.len());
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn test_empty_transcript() {
        let transcript = Transcript::new("", ts(), vec![]);
        assert!(transcript.is_empty());
        assert_eq!(transcript.meta().message_count, 0);
    }

    #[test]
    fn test_role_counts() {
        let transcript = sample();
        assert_eq!(transcript.user_count(), 2);
        assert_eq!(transcript.assistant_count(), 1);
        assert_eq!(transcript.unknown_count(), 0);
    }

    #[test]
    fn test_new_defaults_to_uncompressed() {
        let transcript = sample();
        assert_eq!(transcript.meta().compression, Compression::None);
    }

    #[test]
    fn test_exported_by_carries_version() {
        let transcript = sample();
        assert!(transcript.meta().exported_by.starts_with("chatlift v"));
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let transcript = sample();
        let json = serde_json::to_string(&transcript).unwrap();
        assert!(json.contains("\"messageCount\":3"));
        assert!(json.contains("\"exportedBy\""));
        assert!(json.contains("\"compression\":\"none\""));
        assert!(json.contains("\"conversation\""));
        // the struct field name must not leak
        assert!(!json.contains("\"messages\""));
    }

    #[test]
    fn test_compression_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Compression::None).unwrap(),
            "\"none\""
        );
        assert_eq!(
            serde_json::to_string(&Compression::Dictionary).unwrap(),
            "\"dictionary\""
        );
    }

    #[test]
    fn test_transcript_round_trip() {
        let transcript = sample();
        let json = serde_json::to_string_pretty(&transcript).unwrap();
        let parsed: Transcript = serde_json::from_str(&json).unwrap();
        assert_eq!(transcript, parsed);
    }
}
