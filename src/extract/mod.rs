//! Transcript extraction engine.
//!
//! [`Extractor`] turns a saved conversation page into a [`Transcript`] by
//! walking two ordered fallback chains. First a conversation container is
//! located ([`ContainerStrategy`]), then candidate message nodes inside it
//! ([`MessageStrategy`]); when no selector strategy matches, a last-resort
//! scan collects leaf-level text blocks. The first strategy that yields a
//! match wins outright; later strategies never run and results are never
//! merged across strategies.
//!
//! Surviving candidates are trimmed, filtered against
//! [`ExtractorConfig::min_content_chars`], role-classified, and numbered
//! `1..=N` with no gaps regardless of how many candidates were skipped.
//!
//! # Example
//!
//! ```
//! use chatlift::extract::Extractor;
//!
//! let html = r#"
//!     <div data-testid="conversation">
//!         <div data-testid="user-message">Hello</div>
//!         <div data-testid="assistant-message">Hi there</div>
//!     </div>
//! "#;
//!
//! let transcript = Extractor::new().extract(html, "https://example.com/chat")?;
//! assert_eq!(transcript.len(), 2);
//! assert_eq!(transcript.messages()[0].index(), 1);
//! # Ok::<(), chatlift::ChatliftError>(())
//! ```

mod role;
mod strategies;

pub use strategies::{ContainerStrategy, MessageStrategy};

use chrono::Utc;
use scraper::{ElementRef, Html};

use crate::config::ExtractorConfig;
use crate::error::{ChatliftError, Result};
use crate::message::Message;
use crate::transcript::Transcript;

use role::RoleClassifier;
use strategies::{ContainerMatcher, FallbackScanner, MessageMatcher};

/// How a transcript was located, plus candidate accounting.
///
/// Returned by [`Extractor::extract_with_stats`] and reported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Container strategy that matched.
    pub container_strategy: ContainerStrategy,
    /// Message strategy that matched, or `None` when the last-resort scan
    /// supplied the candidates.
    pub message_strategy: Option<MessageStrategy>,
    /// Candidate nodes considered.
    pub candidates: usize,
    /// Candidates dropped by the minimum-content filter.
    pub skipped: usize,
}

impl ExtractionStats {
    /// Returns `true` when no selector strategy matched and the leaf scan ran.
    pub fn used_fallback_scan(&self) -> bool {
        self.message_strategy.is_none()
    }

    /// Short name of the message source for progress output.
    pub fn message_strategy_name(&self) -> &'static str {
        self.message_strategy
            .map_or("fallback-scan", MessageStrategy::name)
    }
}

/// Extracts ordered, role-labeled transcripts from saved chat pages.
///
/// The extractor is a pure reader: it never mutates the document and holds
/// no state between calls, so one instance can serve any number of pages.
///
/// # Example
///
/// ```rust,no_run
/// use chatlift::config::ExtractorConfig;
/// use chatlift::extract::Extractor;
///
/// let extractor = Extractor::with_config(ExtractorConfig::new().with_min_content_chars(5));
/// let html = std::fs::read_to_string("conversation.html")?;
/// let transcript = extractor.extract(&html, "")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Extractor {
    config: ExtractorConfig,
    containers: Vec<ContainerMatcher>,
    messages: Vec<MessageMatcher>,
    scanner: FallbackScanner,
    roles: RoleClassifier,
}

impl Extractor {
    /// Creates an extractor with default configuration.
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Creates an extractor with custom configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            config,
            containers: strategies::container_matchers(),
            messages: strategies::message_matchers(),
            scanner: FallbackScanner::new(),
            roles: RoleClassifier::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts a transcript from raw HTML.
    ///
    /// `url` is recorded in the transcript metadata; pass an empty string
    /// when the source location is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`ChatliftError::Extraction`] when no container strategy
    /// matches the document, or when no candidate survives filtering.
    pub fn extract(&self, html: &str, url: &str) -> Result<Transcript> {
        self.extract_with_stats(html, url)
            .map(|(transcript, _)| transcript)
    }

    /// Extracts a transcript and reports which strategies located it.
    ///
    /// # Errors
    ///
    /// Same conditions as [`extract`](Self::extract).
    pub fn extract_with_stats(
        &self,
        html: &str,
        url: &str,
    ) -> Result<(Transcript, ExtractionStats)> {
        let document = Html::parse_document(html);
        let extracted_at = Utc::now();

        let (container, container_strategy) = self.find_container(&document)?;
        let (candidates, message_strategy) = self.find_candidates(container);
        if candidates.is_empty() {
            return Err(ChatliftError::no_messages());
        }

        let mut messages: Vec<Message> = Vec::new();
        let mut skipped = 0usize;
        for element in &candidates {
            let text = text_content(*element);
            if text.chars().count() < self.config.min_content_chars {
                skipped += 1;
                continue;
            }
            // Position counts kept candidates only, so parity agrees with
            // the published index.
            let position = messages.len();
            let role = self.roles.classify(*element, position);
            messages.push(Message::new(role, text, (position + 1) as u32, extracted_at));
        }

        if messages.is_empty() {
            return Err(ChatliftError::no_messages());
        }

        let stats = ExtractionStats {
            container_strategy,
            message_strategy,
            candidates: candidates.len(),
            skipped,
        };
        Ok((Transcript::new(url, extracted_at, messages), stats))
    }

    fn find_container<'a>(
        &self,
        document: &'a Html,
    ) -> Result<(ElementRef<'a>, ContainerStrategy)> {
        for matcher in &self.containers {
            if let Some(element) = matcher.find_in(document) {
                return Ok((element, matcher.strategy()));
            }
        }
        Err(ChatliftError::no_container())
    }

    fn find_candidates<'a>(
        &self,
        container: ElementRef<'a>,
    ) -> (Vec<ElementRef<'a>>, Option<MessageStrategy>) {
        for matcher in &self.messages {
            let found = matcher.select_all(container);
            if !found.is_empty() {
                return (found, Some(matcher.strategy()));
            }
        }
        let scanned = self.scanner.scan(container, self.config.fallback_min_chars);
        (scanned, None)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Joined, trimmed text content of an element and its descendants.
pub(crate) fn text_content(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join("")
        .trim()
        .to_string()
}
