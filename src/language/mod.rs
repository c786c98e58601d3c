pub mod registry;

pub use registry::get_separators_for_language;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::core::exceptions::{ChunkflowError, Result};

/// Closed set of languages with a curated separator list in the registry.
///
/// Tags are lowercase ("python", "csharp", ...). Adding a language means
/// adding a variant here and one ordered list in [`registry`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    Go,
    Java,
    Kotlin,
    Js,
    Ts,
    Php,
    Proto,
    Python,
    Rst,
    Ruby,
    Rust,
    Scala,
    Swift,
    Markdown,
    Latex,
    Html,
    Sol,
    CSharp,
}

impl Language {
    /// Resolves a string tag, failing on anything outside the closed set.
    pub fn parse(tag: &str) -> Result<Self> {
        tag.parse::<Self>()
            .map_err(|_| ChunkflowError::UnsupportedLanguage(tag.to_string()))
    }

    pub fn tag(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(Language::parse("python").unwrap(), Language::Python);
        assert_eq!(Language::parse("csharp").unwrap(), Language::CSharp);
        assert_eq!(Language::parse("rst").unwrap(), Language::Rst);
    }

    #[test]
    fn test_parse_unknown_tag_fails() {
        let err = Language::parse("cobol").unwrap_err();
        assert!(matches!(err, ChunkflowError::UnsupportedLanguage(_)));
        assert_eq!(err.to_string(), "Unsupported language: cobol");
    }

    #[test]
    fn test_tag_round_trip() {
        assert_eq!(Language::Python.tag(), "python");
        assert_eq!(Language::parse(Language::Go.tag()).unwrap(), Language::Go);
    }
}
