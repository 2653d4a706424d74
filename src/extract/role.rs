//! Role classification for candidate message nodes.
//!
//! Three rules, applied in order, first hit wins:
//!
//! 1. An explicit `data-role` attribute on the node or a descendant.
//! 2. Substring vocabulary over the node's `data-testid`, `class`, and `id`
//!    attributes. The user vocabulary is checked before the assistant one.
//! 3. Positional parity among kept candidates: even zero-based position is
//!    the user, odd is the assistant.
//!
//! Rule 3 is a declared heuristic, not a guarantee. Transcripts that do not
//! strictly alternate will misclassify under it; that is accepted behavior.

use scraper::{ElementRef, Selector};

use crate::message::Role;

/// Identifier substrings that mark the human side.
const USER_VOCAB: [&str; 2] = ["user", "human"];

/// Identifier substrings that mark the model side.
const ASSISTANT_VOCAB: [&str; 2] = ["assistant", "claude"];

/// Attributes scanned by the vocabulary rule.
const IDENTIFIER_ATTRS: [&str; 3] = ["data-testid", "class", "id"];

pub(crate) struct RoleClassifier {
    role_attr: Selector,
}

impl RoleClassifier {
    pub(crate) fn new() -> Self {
        Self {
            role_attr: Selector::parse("[data-role]").unwrap(),
        }
    }

    /// Classifies a candidate node.
    ///
    /// `kept_position` is the zero-based position among candidates that
    /// survived filtering, so the parity rule stays consistent with the
    /// published 1-based index.
    pub(crate) fn classify(&self, element: ElementRef<'_>, kept_position: usize) -> Role {
        if let Some(role) = self.explicit_role(element) {
            return role;
        }
        if let Some(role) = vocabulary_role(element) {
            return role;
        }
        parity_role(kept_position)
    }

    /// Rule 1: `data-role` on the node itself, else on the first descendant
    /// carrying one.
    fn explicit_role(&self, element: ElementRef<'_>) -> Option<Role> {
        let value = element.value().attr("data-role").or_else(|| {
            element
                .select(&self.role_attr)
                .next()
                .and_then(|node| node.value().attr("data-role"))
        })?;
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        // The marker is explicit even when it names a third party, so an
        // unrecognized value classifies as Unknown rather than falling
        // through to weaker rules.
        Some(match_vocab(&value.to_ascii_lowercase()).unwrap_or(Role::Unknown))
    }
}

/// Rule 2: substring scan over identifying attributes.
fn vocabulary_role(element: ElementRef<'_>) -> Option<Role> {
    let mut haystack = String::new();
    for attr in IDENTIFIER_ATTRS {
        if let Some(value) = element.value().attr(attr) {
            haystack.push_str(&value.to_ascii_lowercase());
            haystack.push(' ');
        }
    }
    match_vocab(&haystack)
}

/// Rule 3: alternation heuristic over kept candidates.
fn parity_role(kept_position: usize) -> Role {
    if kept_position % 2 == 0 {
        Role::User
    } else {
        Role::Assistant
    }
}

fn match_vocab(haystack: &str) -> Option<Role> {
    if USER_VOCAB.iter().any(|word| haystack.contains(word)) {
        return Some(Role::User);
    }
    if ASSISTANT_VOCAB.iter().any(|word| haystack.contains(word)) {
        return Some(Role::Assistant);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn classify_first(html: &str, kept_position: usize) -> Role {
        let document = Html::parse_fragment(html);
        let selector = Selector::parse(".candidate").unwrap();
        let element = document.select(&selector).next().unwrap();
        RoleClassifier::new().classify(element, kept_position)
    }

    #[test]
    fn test_explicit_data_role_on_node() {
        let role = classify_first(r#"<div class="candidate" data-role="assistant">x</div>"#, 0);
        assert_eq!(role, Role::Assistant);
    }

    #[test]
    fn test_explicit_data_role_on_descendant() {
        let role = classify_first(
            r#"<div class="candidate"><span data-role="user">x</span></div>"#,
            1,
        );
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_explicit_data_role_unrecognized_value() {
        // Explicit but third-party: does not fall through to parity.
        let role = classify_first(r#"<div class="candidate" data-role="system">x</div>"#, 0);
        assert_eq!(role, Role::Unknown);
    }

    #[test]
    fn test_explicit_data_role_empty_falls_through() {
        let role = classify_first(r#"<div class="candidate" data-role="">x</div>"#, 1);
        assert_eq!(role, Role::Assistant);
    }

    #[test]
    fn test_vocabulary_from_testid() {
        let role = classify_first(
            r#"<div class="candidate" data-testid="user-message">x</div>"#,
            1,
        );
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_vocabulary_from_class() {
        let role = classify_first(r#"<div class="candidate claude-response">x</div>"#, 0);
        assert_eq!(role, Role::Assistant);
    }

    #[test]
    fn test_vocabulary_from_id() {
        let role = classify_first(r#"<div class="candidate" id="human-turn-3">x</div>"#, 1);
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_user_vocab_checked_first() {
        // Both vocabularies present: user wins.
        let role = classify_first(r#"<div class="candidate user claude">x</div>"#, 1);
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_vocabulary_is_case_insensitive() {
        let role = classify_first(r#"<div class="candidate" data-testid="User-Message">x</div>"#, 1);
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_parity_fallback() {
        assert_eq!(classify_first(r#"<div class="candidate">x</div>"#, 0), Role::User);
        assert_eq!(
            classify_first(r#"<div class="candidate">x</div>"#, 1),
            Role::Assistant
        );
        assert_eq!(classify_first(r#"<div class="candidate">x</div>"#, 2), Role::User);
    }
}
