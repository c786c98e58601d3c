use regex::Regex;
use tracing::{debug, warn};

use crate::core::config::SplitterConfig;
use crate::core::exceptions::{ChunkflowError, Result};
use crate::language::{Language, get_separators_for_language};
use crate::splitter::TextSplitter;
use crate::splitter::merge::merge_splits;
use crate::splitter::split::{compile_separator, split_chars, split_with_pattern};

struct CompiledSeparator {
    raw: String,
    /// `None` marks the empty-string entry, the per-character catch-all.
    pattern: Option<Regex>,
}

/// Tries separators in priority order, recursing into any piece still over
/// `chunk_size` with the separators that remain, and merges the small pieces
/// back up near the cap.
pub struct RecursiveCharacterTextSplitter {
    separators: Vec<CompiledSeparator>,
    config: SplitterConfig,
}

impl RecursiveCharacterTextSplitter {
    /// Paragraphs, then lines, then words, then characters.
    pub const DEFAULT_SEPARATORS: [&'static str; 4] = ["\n\n", "\n", " ", ""];

    pub fn new(separators: Vec<String>, config: SplitterConfig) -> Result<Self> {
        config.validate()?;
        if separators.is_empty() {
            return Err(ChunkflowError::configuration(
                "at least one separator is required",
            ));
        }
        let separators = separators
            .into_iter()
            .map(|raw| {
                let pattern = if raw.is_empty() {
                    None
                } else {
                    Some(compile_separator(&raw, config.is_separator_regex)?)
                };
                Ok(CompiledSeparator { raw, pattern })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            levels = separators.len(),
            ?config,
            "recursive splitter initialized"
        );
        Ok(Self { separators, config })
    }

    pub fn with_defaults(config: SplitterConfig) -> Result<Self> {
        Self::new(
            Self::DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            config,
        )
    }

    /// Builds a splitter preloaded with `language`'s registry list.
    ///
    /// Registry entries are matched literally, and `keep_separator` is forced
    /// on so structural tokens (declaration openers, heading markers) survive
    /// into the chunks they introduce.
    pub fn from_language(language: Language, config: SplitterConfig) -> Result<Self> {
        let separators = get_separators_for_language(language)?;
        let config = config.with_keep_separator(true).with_separator_regex(false);
        Self::new(separators, config)
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    fn split_recursive(&self, text: &str, separators: &[CompiledSeparator]) -> Vec<String> {
        // First separator that occurs in the text wins; otherwise the last
        // entry is the fallback that guarantees progress.
        let mut active_idx = separators.len() - 1;
        let mut remaining: &[CompiledSeparator] = &[];
        for (i, separator) in separators.iter().enumerate() {
            match &separator.pattern {
                None => {
                    active_idx = i;
                    remaining = &[];
                    break;
                }
                Some(pattern) if pattern.is_match(text) => {
                    active_idx = i;
                    remaining = &separators[i + 1..];
                    break;
                }
                Some(_) => {}
            }
        }
        let active = &separators[active_idx];

        let pieces = match &active.pattern {
            Some(pattern) => split_with_pattern(text, pattern, self.config.keep_separator),
            None => split_chars(text),
        };
        let join = if self.config.keep_separator {
            ""
        } else {
            active.raw.as_str()
        };

        let mut chunks = Vec::new();
        let mut good: Vec<String> = Vec::new();
        for piece in pieces {
            if self.config.measure(&piece) < self.config.chunk_size {
                good.push(piece);
            } else {
                if !good.is_empty() {
                    chunks.extend(merge_splits(good.drain(..), join, &self.config));
                }
                if remaining.is_empty() {
                    warn!(
                        piece_len = self.config.measure(&piece),
                        chunk_size = self.config.chunk_size,
                        "no separators left, emitting oversized piece as-is"
                    );
                    chunks.push(piece);
                } else {
                    chunks.extend(self.split_recursive(&piece, remaining));
                }
            }
        }
        if !good.is_empty() {
            chunks.extend(merge_splits(good.drain(..), join, &self.config));
        }
        chunks
    }
}

impl TextSplitter for RecursiveCharacterTextSplitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        self.split_recursive(text, &self.separators)
    }
}
