use regex::Regex;
use tracing::debug;

use crate::core::config::SplitterConfig;
use crate::core::exceptions::Result;
use crate::splitter::TextSplitter;
use crate::splitter::merge::merge_splits;
use crate::splitter::split::{compile_separator, split_chars, split_with_pattern};

/// Splits on a single fixed separator, then merges the pieces back up to
/// `chunk_size`. No recursion; for when one split granularity is enough.
pub struct CharacterTextSplitter {
    separator: String,
    pattern: Option<Regex>,
    config: SplitterConfig,
}

impl CharacterTextSplitter {
    pub const DEFAULT_SEPARATOR: &'static str = "\n\n";

    /// Fails fast on an invalid configuration or separator pattern.
    pub fn new(separator: impl Into<String>, config: SplitterConfig) -> Result<Self> {
        config.validate()?;
        let separator = separator.into();
        let pattern = if separator.is_empty() {
            // Empty separator means per-character splitting.
            None
        } else {
            Some(compile_separator(&separator, config.is_separator_regex)?)
        };
        debug!(
            separator = %separator.escape_debug(),
            ?config,
            "character splitter initialized"
        );
        Ok(Self {
            separator,
            pattern,
            config,
        })
    }

    pub fn with_defaults(config: SplitterConfig) -> Result<Self> {
        Self::new(Self::DEFAULT_SEPARATOR, config)
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }
}

impl TextSplitter for CharacterTextSplitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        let pieces = match &self.pattern {
            Some(pattern) => split_with_pattern(text, pattern, self.config.keep_separator),
            None => split_chars(text),
        };
        // When the separator stays embedded in the pieces, joining with it
        // again would duplicate it.
        let join = if self.config.keep_separator {
            ""
        } else {
            self.separator.as_str()
        };
        merge_splits(pieces, join, &self.config)
    }
}
