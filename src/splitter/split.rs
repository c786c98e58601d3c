use regex::Regex;

use crate::core::exceptions::Result;

/// Compiles a separator into a matcher, escaping it first unless the caller
/// declared it to already be a regex.
pub(crate) fn compile_separator(separator: &str, is_separator_regex: bool) -> Result<Regex> {
    let pattern = if is_separator_regex {
        separator.to_string()
    } else {
        regex::escape(separator)
    };
    Ok(Regex::new(&pattern)?)
}

/// Splits `text` on every match of `pattern`, dropping empty fragments.
///
/// With `keep_separator`, each matched separator is re-attached to the start
/// of the piece that follows it, so no separator bytes are lost.
pub(crate) fn split_with_pattern(text: &str, pattern: &Regex, keep_separator: bool) -> Vec<String> {
    // Interleaved [piece, sep, piece, sep, ..., piece]; always an odd count.
    let mut parts: Vec<&str> = Vec::new();
    let mut last = 0;
    for m in pattern.find_iter(text) {
        parts.push(&text[last..m.start()]);
        parts.push(m.as_str());
        last = m.end();
    }
    parts.push(&text[last..]);

    let pieces: Vec<String> = if keep_separator {
        let mut merged = vec![parts[0].to_string()];
        let mut i = 1;
        while i + 1 < parts.len() {
            merged.push(format!("{}{}", parts[i], parts[i + 1]));
            i += 2;
        }
        merged
    } else {
        parts.iter().step_by(2).map(|s| s.to_string()).collect()
    };

    pieces.into_iter().filter(|piece| !piece.is_empty()).collect()
}

/// The terminal split granularity: one piece per Unicode scalar.
pub(crate) fn split_chars(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(separator: &str) -> Regex {
        compile_separator(separator, false).unwrap()
    }

    #[test]
    fn test_split_discards_separator_by_default() {
        let pieces = split_with_pattern("a.b.c", &literal("."), false);
        assert_eq!(pieces, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_keeps_separator_on_following_piece() {
        let pieces = split_with_pattern("a.b.c", &literal("."), true);
        assert_eq!(pieces, vec!["a", ".b", ".c"]);
    }

    #[test]
    fn test_leading_separator_keeps_no_empty_fragment() {
        let pieces = split_with_pattern(".a.b", &literal("."), true);
        assert_eq!(pieces, vec![".a", ".b"]);
    }

    #[test]
    fn test_trailing_separator_dropped() {
        let pieces = split_with_pattern("a b ", &literal(" "), false);
        assert_eq!(pieces, vec!["a", "b"]);
    }

    #[test]
    fn test_consecutive_separators_collapse() {
        let pieces = split_with_pattern("foo  bar", &literal(" "), false);
        assert_eq!(pieces, vec!["foo", "bar"]);
    }

    #[test]
    fn test_regex_separator() {
        let pattern = compile_separator(r"\d+", true).unwrap();
        let pieces = split_with_pattern("a1b22c", &pattern, false);
        assert_eq!(pieces, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_literal_escaping_neutralizes_metacharacters() {
        let pieces = split_with_pattern("a.b", &literal("+"), false);
        assert_eq!(pieces, vec!["a.b"]);
    }

    #[test]
    fn test_split_chars() {
        assert_eq!(split_chars("héé"), vec!["h", "é", "é"]);
        assert!(split_chars("").is_empty());
    }
}
