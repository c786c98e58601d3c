use std::fmt;
use std::sync::Arc;

use crate::core::exceptions::{ChunkflowError, Result};
use crate::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

/// Caller-supplied measure of a string's size (characters, tokens, ...).
pub type LengthFn = Arc<dyn Fn(&str) -> usize + Send + Sync>;

/// Shared configuration for all splitters.
///
/// When `keep_separator` is enabled, the matched separator text is re-attached
/// to the start of the piece that follows it. That is the one convention used
/// everywhere in this crate.
#[derive(Clone)]
pub struct SplitterConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub keep_separator: bool,
    pub is_separator_regex: bool,
    pub strip_whitespace: bool,
    length_function: LengthFn,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            keep_separator: false,
            is_separator_regex: false,
            strip_whitespace: true,
            length_function: Arc::new(|s: &str| s.chars().count()),
        }
    }
}

impl SplitterConfig {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            ..Self::default()
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_chunk_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    pub fn with_keep_separator(mut self, keep_separator: bool) -> Self {
        self.keep_separator = keep_separator;
        self
    }

    pub fn with_separator_regex(mut self, is_separator_regex: bool) -> Self {
        self.is_separator_regex = is_separator_regex;
        self
    }

    pub fn with_strip_whitespace(mut self, strip_whitespace: bool) -> Self {
        self.strip_whitespace = strip_whitespace;
        self
    }

    pub fn with_length_function<F>(mut self, length_function: F) -> Self
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        self.length_function = Arc::new(length_function);
        self
    }

    /// Must hold before any splitting starts; callers check at construction.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_overlap >= self.chunk_size {
            return Err(ChunkflowError::configuration(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn measure(&self, text: &str) -> usize {
        (self.length_function)(text)
    }
}

impl fmt::Debug for SplitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitterConfig")
            .field("chunk_size", &self.chunk_size)
            .field("chunk_overlap", &self.chunk_overlap)
            .field("keep_separator", &self.keep_separator)
            .field("is_separator_regex", &self.is_separator_regex)
            .field("strip_whitespace", &self.strip_whitespace)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SplitterConfig::default();
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.chunk_overlap, DEFAULT_CHUNK_OVERLAP);
        assert!(!config.keep_separator);
        assert!(!config.is_separator_regex);
        assert!(config.strip_whitespace);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overlap_must_be_smaller_than_size() {
        let config = SplitterConfig::new(2, 4);
        assert!(matches!(
            config.validate(),
            Err(ChunkflowError::Configuration(_))
        ));
    }

    #[test]
    fn test_overlap_equal_to_size_rejected() {
        let config = SplitterConfig::new(10, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_length_counts_chars_not_bytes() {
        let config = SplitterConfig::default();
        assert_eq!(config.measure("Привет"), 6);
        assert_eq!(config.measure("hello"), 5);
    }

    #[test]
    fn test_custom_length_function() {
        let config =
            SplitterConfig::default().with_length_function(|s: &str| s.split_whitespace().count());
        assert_eq!(config.measure("one two three"), 3);
    }
}
