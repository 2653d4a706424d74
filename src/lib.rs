//! # Chatlift
//!
//! A Rust library for lifting chat transcripts out of saved conversation
//! pages and exporting them as JSON, LZW-compressed JSON, or styled HTML.
//!
//! ## Overview
//!
//! Chat sites rarely offer a real export button, so people save the page
//! instead. Chatlift turns such a saved page back into structured data:
//!
//! - **Extraction** — finds the conversation container and its messages by
//!   walking ordered fallback chains of selectors, from precise
//!   `data-testid` markers down to a generic scan over leaf text blocks
//! - **Role detection** — explicit `data-role` markers first, then a
//!   vocabulary match over identifying attributes, then alternation
//! - **Compression** — a byte-level LZW coder shrinks repetitive
//!   conversations into a comma-joined code string, and decodes it back
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlift::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let html = r#"<html><body>
//!         <div data-testid="conversation">
//!             <div data-testid="user-message">What is LZW compression?</div>
//!             <div data-testid="assistant-message">A dictionary coder from 1984.</div>
//!         </div>
//!     </body></html>"#;
//!
//!     let extractor = Extractor::new();
//!     let transcript = extractor.extract(html, "https://claude.ai/chat/abc123")?;
//!     assert_eq!(transcript.len(), 2);
//!
//!     let json = to_json(&transcript)?;
//!     assert!(json.contains("\"messageCount\": 2"));
//!     Ok(())
//! }
//! ```
//!
//! ## Compression Round Trip
//!
//! The codec works on any string and always restores the original exactly:
//!
//! ```rust
//! use chatlift::codec::{decode, encode};
//!
//! let codes = encode("TOBEORNOTTOBEORTOBEORNOT");
//! assert!(codes.len() < 24);
//! assert_eq!(decode(&codes)?, "TOBEORNOTTOBEORTOBEORNOT");
//! # Ok::<(), chatlift::ChatliftError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`extract`] — The extraction engine
//!   - [`Extractor`](extract::Extractor) — Fallback-chain document scanner
//!   - [`ExtractionStats`](extract::ExtractionStats) — Which strategies won
//! - [`codec`] — Byte-level LZW codec ([`encode`](codec::encode), [`decode`](codec::decode))
//! - [`transcript`] — [`Transcript`], [`Meta`], [`Compression`]
//! - [`message`] — [`Message`] and [`Role`]
//! - [`output`] — Artifact writers ([`output::json`], [`output::html`])
//! - [`format`] — [`ExportFormat`](format::ExportFormat) and dispatch helpers
//! - [`config`] — Extraction tuning knobs ([`ExtractorConfig`](config::ExtractorConfig))
//! - [`cli`] — CLI types (requires the `cli` feature)
//! - [`error`] — Unified error types ([`ChatliftError`], [`Result`])
//! - [`prelude`] — Convenient re-exports
//!
//! ## Feature Flags
//!
//! - `cli` (default) — Enables the [`cli`] module and the `chatlift` binary;
//!   pulls in clap. Disable it for a lean library-only build.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod message;
pub mod output;
pub mod transcript;

// Re-export the main types at the crate root for convenience
pub use error::{ChatliftError, Result};
pub use extract::{ExtractionStats, Extractor};
pub use message::{Message, Role};
pub use transcript::{Compression, Meta, Transcript};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlift::prelude::*;
/// ```
pub mod prelude {
    // Core data types
    pub use crate::message::{Message, Role};
    pub use crate::transcript::{Compression, EXPORTER, Meta, Transcript};

    // Error types
    pub use crate::error::{ChatliftError, Result};

    // Extraction
    pub use crate::config::ExtractorConfig;
    pub use crate::extract::{ContainerStrategy, ExtractionStats, Extractor, MessageStrategy};

    // Codec
    pub use crate::codec::{compress_to_string, decode, decompress_from_string, encode};

    // Output (file writers and string converters)
    pub use crate::output::html::{render, write_html};
    pub use crate::output::json::{
        decode_payload, read_compressed_json, to_compressed_json, to_json, write_compressed_json,
        write_json,
    };

    // Format dispatch
    pub use crate::format::{ExportFormat, to_format_string, write_to_format};

    // CLI types
    #[cfg(feature = "cli")]
    pub use crate::cli::ExportAction;
}
