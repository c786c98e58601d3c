pub mod core;
pub mod document;
pub mod language;
pub mod splitter;

pub use crate::core::config::SplitterConfig;
pub use crate::core::exceptions::{ChunkflowError, Result};
pub use crate::document::{Document, Metadata};
pub use crate::language::{Language, get_separators_for_language};
pub use crate::splitter::{
    CharacterTextSplitter, RecursiveCharacterTextSplitter, TextSplitter, merge_splits,
};

/// Soft cap on produced chunk size, in length-function units.
pub const DEFAULT_CHUNK_SIZE: usize = 4000;

/// Trailing context carried over from one chunk into the next.
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;
