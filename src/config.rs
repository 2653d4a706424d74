//! Configuration types for extraction.
//!
//! This module provides a clean configuration struct for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatlift::config::ExtractorConfig;
//! use chatlift::extract::Extractor;
//!
//! let config = ExtractorConfig::new()
//!     .with_min_content_chars(5)
//!     .with_fallback_min_chars(20);
//!
//! let extractor = Extractor::with_config(config);
//! ```

/// Configuration for transcript extraction.
///
/// Both thresholds are measured in characters over trimmed text content.
///
/// # Example
///
/// ```rust
/// use chatlift::config::ExtractorConfig;
///
/// let config = ExtractorConfig::new().with_min_content_chars(1);
/// assert_eq!(config.min_content_chars, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Minimum trimmed length for a candidate to become a message
    /// (default: 3). Shorter candidates are skipped silently; they are
    /// neither counted nor indexed.
    pub min_content_chars: usize,

    /// Trimmed length a leaf block must exceed for the last-resort scan to
    /// keep it (default: 10). Strictly greater-than, so the default keeps
    /// 11 characters and up.
    pub fallback_min_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_content_chars: 3,
            fallback_min_chars: 10,
        }
    }
}

impl ExtractorConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum trimmed length for kept candidates.
    #[must_use]
    pub fn with_min_content_chars(mut self, chars: usize) -> Self {
        self.min_content_chars = chars;
        self
    }

    /// Sets the length a fallback-scanned block must exceed.
    #[must_use]
    pub fn with_fallback_min_chars(mut self, chars: usize) -> Self {
        self.fallback_min_chars = chars;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_config_default() {
        let config = ExtractorConfig::default();
        assert_eq!(config.min_content_chars, 3);
        assert_eq!(config.fallback_min_chars, 10);
    }

    #[test]
    fn test_extractor_config_builder() {
        let config = ExtractorConfig::new()
            .with_min_content_chars(5)
            .with_fallback_min_chars(20);

        assert_eq!(config.min_content_chars, 5);
        assert_eq!(config.fallback_min_chars, 20);
    }
}
