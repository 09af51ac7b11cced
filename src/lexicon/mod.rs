//! Shared lexical vocabulary for Cambridge pseudocode
//!
//! The validator and the formatter both scan raw source lines instead of a
//! token stream, so the pieces they agree on live here:
//! - [`KEYWORDS`]: the reserved-word set, matched ASCII case-insensitively
//! - [`words`]: maximal runs of word characters with their byte offsets
//! - [`mask_double_quoted`]: blanks `"..."` spans so their contents are opaque
//! - [`INDENT_WIDTH`]: the canonical indent unit
//! - small prefix/suffix helpers used for indentation and statement matching
//!
//! Both processors must consult the same keyword set, otherwise a line the
//! formatter leaves alone could still be flagged by the validator.

use rustc_hash::FxHashSet;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Reserved words of the Cambridge International pseudocode dialect.
pub const KEYWORDS: &[&str] = &[
    "IF", "THEN", "ELSE", "ENDIF", "CASE", "OF", "OTHERWISE", "ENDCASE",
    "FOR", "TO", "STEP", "NEXT", "REPEAT", "UNTIL", "WHILE", "DO", "ENDWHILE",
    "PROCEDURE", "ENDPROCEDURE", "FUNCTION", "RETURN", "RETURNS", "ENDFUNCTION",
    "DECLARE", "CONSTANT", "ARRAY", "TYPE", "ENDTYPE",
    "CALL", "BYREF", "BYVAL", "OUTPUT", "INPUT",
    "OPENFILE", "READFILE", "WRITEFILE", "CLOSEFILE", "EOF",
    "AND", "OR", "NOT", "MOD", "DIV",
    "CLASS", "ENDCLASS", "NEW", "PUBLIC", "PRIVATE", "INHERITS",
    "STRING", "INTEGER", "REAL", "BOOLEAN", "CHAR", "DATE",
];

/// Spaces per indent level, for both indentation warnings and formatting.
pub const INDENT_WIDTH: usize = 3;

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Longest entry in [`KEYWORDS`]; anything longer cannot be a keyword.
const MAX_KEYWORD_LEN: usize = 12;

/// Check whether `word` is a reserved word, ignoring ASCII case.
pub fn is_keyword(word: &str) -> bool {
    if word.is_empty() || word.len() > MAX_KEYWORD_LEN || !word.is_ascii() {
        return false;
    }
    KEYWORD_SET.contains(word.to_ascii_uppercase().as_str())
}

/// Word characters are alphanumerics and underscores.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A line is a comment when its trimmed form starts with `//`.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with("//")
}

/// Iterator over maximal runs of word characters in a line.
///
/// Yields `(byte_offset, word)` pairs in left-to-right order.
pub struct Words<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.source[self.position..];
        let start = self.position + rest.find(is_word_char)?;
        let len = self.source[start..]
            .find(|c: char| !is_word_char(c))
            .unwrap_or(self.source.len() - start);
        self.position = start + len;
        Some((start, &self.source[start..start + len]))
    }
}

/// Split a line into its words.
pub fn words(line: &str) -> Words<'_> {
    Words {
        source: line,
        position: 0,
    }
}

/// Replace every double-quoted span (quotes included) with spaces.
///
/// An unterminated quote blanks the rest of the line. Lines without quotes
/// are returned borrowed.
pub fn mask_double_quoted(line: &str) -> Cow<'_, str> {
    if !line.contains('"') {
        return Cow::Borrowed(line);
    }

    let mut masked = String::with_capacity(line.len());
    let mut in_quote = false;
    for c in line.chars() {
        if c == '"' {
            in_quote = !in_quote;
            masked.push(' ');
        } else if in_quote {
            masked.push(' ');
        } else {
            masked.push(c);
        }
    }
    Cow::Owned(masked)
}

/// ASCII case-insensitive `starts_with`.
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// ASCII case-insensitive `ends_with`.
pub fn ends_with_ignore_case(text: &str, suffix: &str) -> bool {
    text.len() >= suffix.len()
        && text
            .get(text.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}

/// Check whether `text` starts with `keyword` as a whole word, ignoring case
/// and leading whitespace.
pub fn starts_with_word(text: &str, keyword: &str) -> bool {
    let text = text.trim_start();
    starts_with_ignore_case(text, keyword)
        && !text[keyword.len()..].starts_with(is_word_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_ignores_case() {
        assert!(is_keyword("IF"));
        assert!(is_keyword("endWhile"));
        assert!(is_keyword("integer"));
        assert!(!is_keyword("Total"));
        assert!(!is_keyword(""));
        assert!(!is_keyword("ENDPROCEDUREX"));
    }

    #[test]
    fn test_max_keyword_len_covers_all_keywords() {
        let longest = KEYWORDS.iter().map(|k| k.len()).max().unwrap();
        assert_eq!(longest, MAX_KEYWORD_LEN);
    }

    #[test]
    fn test_words_split_on_punctuation() {
        let found: Vec<_> = words("Total ← (x_1 + 20)").collect();
        assert_eq!(found, vec![(0, "Total"), (11, "x_1"), (17, "20")]);
    }

    #[test]
    fn test_words_on_empty_line() {
        assert_eq!(words("   ").count(), 0);
    }

    #[test]
    fn test_mask_double_quoted() {
        assert_eq!(mask_double_quoted(r#"OUTPUT "if then" x"#), "OUTPUT           x");
        assert_eq!(mask_double_quoted(r#"OUTPUT "open"#), "OUTPUT      ");
        assert!(matches!(mask_double_quoted("OUTPUT x"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_starts_with_word() {
        assert!(starts_with_word("  if x THEN", "IF"));
        assert!(starts_with_word("IF(x)", "IF"));
        assert!(!starts_with_word("IFFY ← 1", "IF"));
        assert!(!starts_with_word("I", "IF"));
    }

    #[test]
    fn test_suffix_and_prefix_helpers() {
        assert!(ends_with_ignore_case("WHILE x do", "DO"));
        assert!(!ends_with_ignore_case("O", "DO"));
        assert!(ends_with_ignore_case("x ← é then", "THEN"));
        assert!(!ends_with_ignore_case("é", "DO"));
        assert!(starts_with_ignore_case("endif", "ENDIF"));
        assert!(!starts_with_ignore_case("é", "EN"));
    }
}
