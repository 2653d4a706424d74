//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ExportAction`] - What the binary should produce from its input
//!
//! # Using ExportAction in Libraries
//!
//! The action type is designed to be usable outside of CLI context:
//!
//! ```rust
//! use chatlift::cli::ExportAction;
//! use chatlift::format::ExportFormat;
//!
//! let action = ExportAction::Lzw;
//! assert_eq!(action.format(), Some(ExportFormat::CompressedJson));
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::format::ExportFormat;

/// Extract chat transcripts from saved conversation pages and export
/// them as JSON, LZW-compressed JSON, or styled HTML.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlift json saved_page.html
    chatlift j saved_page.html -o transcript.json
    chatlift lzw saved_page.html --url https://claude.ai/chat/abc123
    chatlift html saved_page.html -o conversation.html
    chatlift decode conversation-2024-06-15T12-30-45-compressed.json
    chatlift json saved_page.html --stdout")]
pub struct Args {
    /// What to produce from the input
    #[arg(value_enum)]
    pub action: ExportAction,

    /// Path to input file (a saved HTML page, or a compressed export for decode)
    pub input: PathBuf,

    /// Path to output file (defaults to a timestamped name in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Source URL to record in the export metadata (defaults to the input path)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Print the artifact to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

/// Supported export actions.
///
/// The first three extract a transcript from a saved page and publish it
/// in one format each; [`Decode`](ExportAction::Decode) goes the other way
/// and restores a compressed export back to plain JSON.
///
/// # Example
///
/// ```rust
/// use chatlift::cli::ExportAction;
///
/// let action: ExportAction = "lzw".parse().unwrap();
/// assert_eq!(action, ExportAction::Lzw);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportAction {
    /// Extract and write pretty-printed JSON
    #[value(alias = "j")]
    Json,

    /// Extract and write LZW-compressed JSON
    #[value(alias = "c")]
    #[serde(alias = "c")]
    Lzw,

    /// Extract and write a self-contained HTML page
    #[value(alias = "h")]
    #[serde(alias = "h")]
    Html,

    /// Restore a compressed export to plain JSON (or HTML via `-o page.html`)
    #[value(alias = "d")]
    #[serde(alias = "d")]
    Decode,
}

impl ExportAction {
    /// Returns the export format this action publishes, if it has one.
    ///
    /// [`Decode`](ExportAction::Decode) returns `None`: it republishes the
    /// restored transcript as plain JSON, or as whatever format the output
    /// path's extension names
    /// ([`ExportFormat::from_path`](crate::format::ExportFormat::from_path)).
    pub fn format(self) -> Option<ExportFormat> {
        match self {
            ExportAction::Json => Some(ExportFormat::Json),
            ExportAction::Lzw => Some(ExportFormat::CompressedJson),
            ExportAction::Html => Some(ExportFormat::Html),
            ExportAction::Decode => None,
        }
    }

    /// Returns true when this action parses a saved page.
    pub fn extracts(self) -> bool {
        !matches!(self, ExportAction::Decode)
    }

    /// Returns all supported action names (including aliases).
    pub fn all_names() -> &'static [&'static str] {
        &["json", "j", "lzw", "c", "html", "h", "decode", "d"]
    }
}

impl std::fmt::Display for ExportAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportAction::Json => write!(f, "JSON"),
            ExportAction::Lzw => write!(f, "LZW"),
            ExportAction::Html => write!(f, "HTML"),
            ExportAction::Decode => write!(f, "Decode"),
        }
    }
}

impl std::str::FromStr for ExportAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" | "j" => Ok(ExportAction::Json),
            "lzw" | "c" | "compressed" => Ok(ExportAction::Lzw),
            "html" | "h" => Ok(ExportAction::Html),
            "decode" | "d" => Ok(ExportAction::Decode),
            _ => Err(format!(
                "Unknown action: '{}'. Expected one of: {}",
                s,
                ExportAction::all_names().join(", ")
            )),
        }
    }
}
