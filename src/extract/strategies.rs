//! Selector strategy tables for the extraction fallback chains.
//!
//! Strategies are tried in a fixed order; the first one that yields a match
//! wins and the rest never run. The tables go from the most explicit markup
//! a chat page can carry (role-marker attributes) down to class-substring
//! guesses, with a last-resort scan over leaf blocks when every selector
//! comes up empty.

use std::fmt;

use scraper::{ElementRef, Html, Selector};

use super::text_content;

/// Container strategies, in fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerStrategy {
    /// `[data-testid="conversation"]`
    ConversationMarker,
    /// `div[class*="conversation"]`
    ConversationClass,
    /// `main`, the document's main content region
    MainRegion,
}

impl ContainerStrategy {
    /// All container strategies, in the order they are tried.
    pub const ORDER: [ContainerStrategy; 3] = [
        ContainerStrategy::ConversationMarker,
        ContainerStrategy::ConversationClass,
        ContainerStrategy::MainRegion,
    ];

    fn selector_str(self) -> &'static str {
        match self {
            ContainerStrategy::ConversationMarker => r#"[data-testid="conversation"]"#,
            ContainerStrategy::ConversationClass => r#"div[class*="conversation"]"#,
            ContainerStrategy::MainRegion => "main",
        }
    }

    /// Short name used in stats and progress output.
    pub fn name(self) -> &'static str {
        match self {
            ContainerStrategy::ConversationMarker => "conversation-marker",
            ContainerStrategy::ConversationClass => "conversation-class",
            ContainerStrategy::MainRegion => "main-region",
        }
    }
}

impl fmt::Display for ContainerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Message strategies, in fallback order.
///
/// The last-resort leaf scan is not listed here; it runs only when every
/// strategy in [`MessageStrategy::ORDER`] found nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStrategy {
    /// `[data-testid="user-message"]` or `[data-testid="assistant-message"]`
    RoleMarker,
    /// `article`
    Article,
    /// `div[class*="message"]`
    MessageClass,
    /// `div[class*="user"]`
    UserClass,
    /// `div[class*="assistant"]`
    AssistantClass,
    /// `div[class*="human"]`
    HumanClass,
    /// `div[class*="claude"]`
    ClaudeClass,
}

impl MessageStrategy {
    /// All message strategies, in the order they are tried.
    pub const ORDER: [MessageStrategy; 7] = [
        MessageStrategy::RoleMarker,
        MessageStrategy::Article,
        MessageStrategy::MessageClass,
        MessageStrategy::UserClass,
        MessageStrategy::AssistantClass,
        MessageStrategy::HumanClass,
        MessageStrategy::ClaudeClass,
    ];

    fn selector_str(self) -> &'static str {
        match self {
            // One grouped selector: a page marking only user turns still
            // matches, and a page marking both keeps every node.
            MessageStrategy::RoleMarker => {
                r#"[data-testid="user-message"], [data-testid="assistant-message"]"#
            }
            MessageStrategy::Article => "article",
            MessageStrategy::MessageClass => r#"div[class*="message"]"#,
            MessageStrategy::UserClass => r#"div[class*="user"]"#,
            MessageStrategy::AssistantClass => r#"div[class*="assistant"]"#,
            MessageStrategy::HumanClass => r#"div[class*="human"]"#,
            MessageStrategy::ClaudeClass => r#"div[class*="claude"]"#,
        }
    }

    /// Short name used in stats and progress output.
    pub fn name(self) -> &'static str {
        match self {
            MessageStrategy::RoleMarker => "role-marker",
            MessageStrategy::Article => "article",
            MessageStrategy::MessageClass => "message-class",
            MessageStrategy::UserClass => "user-class",
            MessageStrategy::AssistantClass => "assistant-class",
            MessageStrategy::HumanClass => "human-class",
            MessageStrategy::ClaudeClass => "claude-class",
        }
    }
}

impl fmt::Display for MessageStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A container strategy with its selector compiled.
pub(crate) struct ContainerMatcher {
    strategy: ContainerStrategy,
    selector: Selector,
}

impl ContainerMatcher {
    fn new(strategy: ContainerStrategy) -> Self {
        Self {
            strategy,
            selector: Selector::parse(strategy.selector_str()).unwrap(),
        }
    }

    pub(crate) fn strategy(&self) -> ContainerStrategy {
        self.strategy
    }

    /// Returns the first match in the document, if any.
    pub(crate) fn find_in<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document.select(&self.selector).next()
    }
}

/// A message strategy with its selector compiled.
pub(crate) struct MessageMatcher {
    strategy: MessageStrategy,
    selector: Selector,
}

impl MessageMatcher {
    fn new(strategy: MessageStrategy) -> Self {
        Self {
            strategy,
            selector: Selector::parse(strategy.selector_str()).unwrap(),
        }
    }

    pub(crate) fn strategy(&self) -> MessageStrategy {
        self.strategy
    }

    /// Returns all matches under the container, in document order.
    pub(crate) fn select_all<'a>(&self, container: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        container.select(&self.selector).collect()
    }
}

/// Builds the container chain with selectors compiled.
pub(crate) fn container_matchers() -> Vec<ContainerMatcher> {
    ContainerStrategy::ORDER
        .iter()
        .map(|&strategy| ContainerMatcher::new(strategy))
        .collect()
}

/// Builds the message chain with selectors compiled.
pub(crate) fn message_matchers() -> Vec<MessageMatcher> {
    MessageStrategy::ORDER
        .iter()
        .map(|&strategy| MessageMatcher::new(strategy))
        .collect()
}

/// Block elements the last-resort scan considers.
const BLOCK_SELECTOR: &str = "div, p, section, blockquote, li, pre";

/// Controls whose presence marks a node as UI chrome, not conversation.
const INTERACTIVE_SELECTOR: &str = r#"button, input, select, textarea, [role="button"]"#;

/// Last-resort candidate scan.
///
/// Collects leaf-level block nodes: block elements with no block descendant,
/// whose trimmed text exceeds the configured length, and which contain no
/// interactive controls. Toolbars and composer widgets fail the last check
/// even when their label text is long enough.
pub(crate) struct FallbackScanner {
    blocks: Selector,
    interactive: Selector,
}

impl FallbackScanner {
    pub(crate) fn new() -> Self {
        Self {
            blocks: Selector::parse(BLOCK_SELECTOR).unwrap(),
            interactive: Selector::parse(INTERACTIVE_SELECTOR).unwrap(),
        }
    }

    pub(crate) fn scan<'a>(
        &self,
        container: ElementRef<'a>,
        min_chars: usize,
    ) -> Vec<ElementRef<'a>> {
        container
            .select(&self.blocks)
            .filter(|el| self.is_leaf_block(*el))
            .filter(|el| text_content(*el).chars().count() > min_chars)
            .filter(|el| el.select(&self.interactive).next().is_none())
            .collect()
    }

    fn is_leaf_block(&self, element: ElementRef<'_>) -> bool {
        element.select(&self.blocks).next().is_none()
    }
}
