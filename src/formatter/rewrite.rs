//! Per-line keyword rewrite
//!
//! Walks a line one character at a time. Quoted spans are copied verbatim;
//! outside them, every word that is a keyword is uppercased and everything
//! else (identifiers, numbers, operators, punctuation) is left alone.

use crate::lexicon::{is_keyword, is_word_char};

/// Quote tracking for the rewrite scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Code,
    Quoted(char),
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

fn flush_word(word: &mut String, out: &mut String) {
    if word.is_empty() {
        return;
    }
    if is_keyword(word) {
        out.push_str(&word.to_ascii_uppercase());
    } else {
        out.push_str(word);
    }
    word.clear();
}

/// Uppercase every keyword in `line` that is not inside a quoted span.
///
/// A `'` or `"` opens a span and only the same character closes it. A quote
/// preceded by a backslash neither opens nor closes a span.
pub fn rewrite_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut word = String::new();
    let mut state = ScanState::Code;
    let mut prev: Option<char> = None;

    for c in line.chars() {
        let escaped = prev == Some('\\');
        prev = Some(c);

        match state {
            ScanState::Quoted(opener) => {
                if c == opener && !escaped {
                    state = ScanState::Code;
                }
                out.push(c);
            }
            ScanState::Code if is_quote(c) && !escaped => {
                flush_word(&mut word, &mut out);
                state = ScanState::Quoted(c);
                out.push(c);
            }
            ScanState::Code if is_word_char(c) => word.push(c),
            ScanState::Code => {
                flush_word(&mut word, &mut out);
                out.push(c);
            }
        }
    }

    flush_word(&mut word, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_uppercased() {
        assert_eq!(rewrite_line("declare x : integer"), "DECLARE x : INTEGER");
        assert_eq!(rewrite_line("while count < 10 do"), "WHILE count < 10 DO");
        assert_eq!(rewrite_line("x ← a mod b"), "x ← a MOD b");
    }

    #[test]
    fn test_identifiers_and_operators_untouched() {
        assert_eq!(rewrite_line("Total←Total+ifx*2"), "Total←Total+ifx*2");
        assert_eq!(rewrite_line("endIfCount ← 0"), "endIfCount ← 0");
    }

    #[test]
    fn test_quoted_spans_are_verbatim() {
        assert_eq!(
            rewrite_line(r#"output "Please type if or else""#),
            r#"OUTPUT "Please type if or else""#
        );
        assert_eq!(rewrite_line("ch ← 'x' then"), "ch ← 'x' THEN");
    }

    #[test]
    fn test_other_quote_does_not_close_span() {
        assert_eq!(
            rewrite_line(r#"output "O'Brien said if" and then"#),
            r#"OUTPUT "O'Brien said if" AND THEN"#
        );
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(
            rewrite_line(r#"output "say \"if\" now" then"#),
            r#"OUTPUT "say \"if\" now" THEN"#
        );
        // An escaped quote outside a span does not open one.
        assert_eq!(rewrite_line(r#"x \"if"#), r#"x \"IF"#);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(rewrite_line(r#"output "if then"#), r#"OUTPUT "if then"#);
    }

    #[test]
    fn test_non_ascii_words_survive() {
        assert_eq!(rewrite_line("output café"), "OUTPUT café");
        assert_eq!(rewrite_line("é"), "é");
    }
}
