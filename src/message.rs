//! Normalized message type for extracted transcripts.
//!
//! This module provides [`Message`], the representation every extraction
//! strategy converges on, and [`Role`], the speaker classification attached
//! to it. Whatever selector chain located a node in the source document,
//! the result is the same structure, enabling uniform serialization and
//! rendering downstream.
//!
//! # Overview
//!
//! A message consists of:
//! - **`role`**: who spoke (`user`, `assistant`, or `unknown`)
//! - **`content`**: the trimmed text content, never empty
//! - **`index`**: 1-based position in the transcript, dense (no gaps)
//! - **`timestamp`**: when the extraction ran, in UTC
//!
//! # Examples
//!
//! ```
//! use chatlift::{Message, Role};
//! use chrono::Utc;
//!
//! let msg = Message::new(Role::User, "Hello, world!", 1, Utc::now());
//! assert_eq!(msg.role(), Role::User);
//! assert_eq!(msg.content(), "Hello, world!");
//! assert_eq!(msg.index(), 1);
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatlift::{Message, Role};
//! use chrono::Utc;
//!
//! let msg = Message::new(Role::Assistant, "Hi there", 2, Utc::now());
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The speaker classification of an extracted message.
///
/// Serialized in lowercase (`"user"`, `"assistant"`, `"unknown"`), matching
/// the transcript artifact format.
///
/// # Example
///
/// ```
/// use chatlift::Role;
///
/// assert_eq!(serde_json::to_string(&Role::User)?, "\"user\"");
/// assert_eq!(Role::Assistant.as_str(), "assistant");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human side of the conversation.
    User,
    /// The model side of the conversation.
    Assistant,
    /// A speaker the classifier could not attribute.
    #[default]
    Unknown,
}

impl Role {
    /// Returns the lowercase string form used in artifacts.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single extracted message.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `role` | [`Role`] | Speaker classification |
/// | `content` | `String` | Trimmed text content, never empty |
/// | `index` | `u32` | 1-based transcript position, dense |
/// | `timestamp` | `DateTime<Utc>` | Extraction instant, RFC 3339 in JSON |
///
/// The extractor guarantees two invariants the rest of the crate relies on:
/// `content` is non-empty after trimming (short candidates are skipped, not
/// emitted blank), and `index` runs exactly `1..=N` over a transcript with
/// no gaps regardless of how many candidates were skipped.
///
/// # Example
///
/// ```
/// use chatlift::{Message, Role};
/// use chrono::Utc;
///
/// let msg = Message::new(Role::User, "What is LZW?", 1, Utc::now());
/// assert!(!msg.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Speaker classification.
    pub role: Role,

    /// Trimmed text content of the message.
    ///
    /// May contain newlines for multiline messages.
    pub content: String,

    /// 1-based position in the transcript.
    pub index: u32,

    /// When the extraction ran.
    ///
    /// Source pages carry no per-message times, so every message in a
    /// transcript shares the run's extraction instant.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a new message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlift::{Message, Role};
    /// use chrono::Utc;
    ///
    /// let msg = Message::new(Role::Assistant, "Sure, here's how.", 2, Utc::now());
    /// assert_eq!(msg.role(), Role::Assistant);
    /// assert_eq!(msg.index(), 2);
    /// ```
    pub fn new(
        role: Role,
        content: impl Into<String>,
        index: u32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            role,
            content: content.into(),
            index,
            timestamp,
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the speaker role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the 1-based transcript position.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the extraction timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns `true` if this message's content is empty or whitespace-only.
    ///
    /// Extracted transcripts never contain such messages; this exists for
    /// callers constructing messages by hand.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_message_new() {
        let msg = Message::new(Role::User, "Hello", 1, ts());
        assert_eq!(msg.role(), Role::User);
        assert_eq!(msg.content(), "Hello");
        assert_eq!(msg.index(), 1);
        assert_eq!(msg.timestamp(), ts());
    }

    #[test]
    fn test_message_is_empty() {
        assert!(Message::new(Role::User, "", 1, ts()).is_empty());
        assert!(Message::new(Role::User, "   ", 1, ts()).is_empty());
        assert!(!Message::new(Role::User, "Hello", 1, ts()).is_empty());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(
            serde_json::to_string(&Role::Unknown).unwrap(),
            "\"unknown\""
        );
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
        assert_eq!(Role::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_role_default_is_unknown() {
        assert_eq!(Role::default(), Role::Unknown);
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new(Role::Assistant, "Hi there", 2, ts());
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"assistant\""));
        assert!(json.contains("\"index\":2"));
        assert!(json.contains("Hi there"));
        // chrono serializes as RFC 3339
        assert!(json.contains("2024-06-15T12:00:00Z"));
    }

    #[test]
    fn test_message_deserialization() {
        let json = r#"{"role":"user","content":"Hi","index":1,"timestamp":"2024-06-15T12:00:00Z"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.role(), Role::User);
        assert_eq!(msg.content(), "Hi");
        assert_eq!(msg.index(), 1);
        assert_eq!(msg.timestamp(), ts());
    }

    #[test]
    fn test_message_round_trip() {
        let msg = Message::new(Role::Unknown, "multi\nline", 7, ts());
        let json = serde_json::to_string(&msg).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, parsed);
    }
}
