//! Per-line style and syntax checks
//!
//! Every check sees every non-blank, non-comment line and appends whatever it
//! finds; no check can suppress another. The order of [`all_checks`] is the
//! order diagnostics appear in for a single line.

use super::diagnostic::{Diagnostic, DiagnosticCode};
use crate::lexicon::{
    self, ends_with_ignore_case, is_keyword, starts_with_word, words, INDENT_WIDTH,
};

/// Identifiers shorter than this are never reported.
const MIN_IDENTIFIER_LEN: usize = 3;

/// A single line-level check.
pub(crate) trait LineCheck {
    fn check(&self, line: &str, line_number: usize, diagnostics: &mut Vec<Diagnostic>);
}

/// All checks, in reporting order.
pub(crate) fn all_checks() -> [&'static dyn LineCheck; 4] {
    [
        &KeywordCaseCheck,
        &IdentifierCaseCheck,
        &IndentationCheck,
        &SyntaxCheck,
    ]
}

/// Keywords must be written fully uppercase.
pub(crate) struct KeywordCaseCheck;

impl LineCheck for KeywordCaseCheck {
    fn check(&self, line: &str, line_number: usize, diagnostics: &mut Vec<Diagnostic>) {
        let masked = lexicon::mask_double_quoted(line);
        for (_, word) in words(&masked) {
            if !word.chars().all(|c| c.is_ascii_alphabetic()) || !is_keyword(word) {
                continue;
            }
            let upper = word.to_ascii_uppercase();
            if word != upper {
                diagnostics.push(Diagnostic::new(
                    DiagnosticCode::KeywordCase,
                    line_number,
                    format!("Keyword '{}' should be in UPPER CASE: {}", word, upper),
                ));
            }
        }
    }
}

/// Lowercase snake_case identifiers are discouraged.
///
/// Only words made entirely of `[a-z_]` are considered, so `Student_Name`
/// and `MAX_SIZE` pass.
pub(crate) struct IdentifierCaseCheck;

impl LineCheck for IdentifierCaseCheck {
    fn check(&self, line: &str, line_number: usize, diagnostics: &mut Vec<Diagnostic>) {
        let masked = lexicon::mask_double_quoted(line);
        for (_, word) in words(&masked) {
            if word.len() < MIN_IDENTIFIER_LEN
                || !word.chars().all(|c| c.is_ascii_lowercase() || c == '_')
                || is_keyword(word)
            {
                continue;
            }
            if word.contains('_') {
                diagnostics.push(Diagnostic::new(
                    DiagnosticCode::IdentifierCase,
                    line_number,
                    format!(
                        "Identifier '{}' should use camelCase instead of snake_case",
                        word
                    ),
                ));
            }
        }
    }
}

/// Leading spaces must come in multiples of [`INDENT_WIDTH`].
pub(crate) struct IndentationCheck;

impl LineCheck for IndentationCheck {
    fn check(&self, line: &str, line_number: usize, diagnostics: &mut Vec<Diagnostic>) {
        if !line.starts_with(char::is_whitespace) {
            return;
        }

        // Tabs stop the count, so tab-indented lines are exempt.
        let leading_spaces = line.chars().take_while(|&c| c == ' ').count();
        if leading_spaces % INDENT_WIDTH != 0 {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::Indentation,
                line_number,
                format!(
                    "Indentation should be in multiples of {} spaces (found {})",
                    INDENT_WIDTH, leading_spaces
                ),
            ));
        }
    }
}

/// Missing THEN hints and per-line delimiter balance.
pub(crate) struct SyntaxCheck;

impl SyntaxCheck {
    fn is_missing_then(trimmed: &str) -> bool {
        starts_with_word(trimmed, "IF")
            && !words(trimmed).any(|(_, w)| w.eq_ignore_ascii_case("THEN"))
            && !ends_with_ignore_case(trimmed, "THEN")
    }
}

impl LineCheck for SyntaxCheck {
    fn check(&self, line: &str, line_number: usize, diagnostics: &mut Vec<Diagnostic>) {
        let trimmed = line.trim();

        // THEN may legitimately sit on the next line, so this stays a warning.
        if Self::is_missing_then(trimmed) {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::MissingThen,
                line_number,
                "IF statement should include THEN on the same or next line",
            ));
        }

        let count = |target: char| trimmed.chars().filter(|&c| c == target).count();

        if count('(') != count(')') {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::UnmatchedParens,
                line_number,
                "Unmatched parentheses",
            ));
        }

        if count('[') != count(']') {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::UnmatchedBrackets,
                line_number,
                "Unmatched brackets",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(check: &dyn LineCheck, line: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        check.check(line, 1, &mut diagnostics);
        diagnostics
    }

    fn codes(diagnostics: &[Diagnostic]) -> Vec<DiagnosticCode> {
        diagnostics.iter().map(|d| d.code).collect()
    }

    #[test]
    fn test_keyword_case_reports_each_offender() {
        let diags = run(&KeywordCaseCheck, "if x > 0 Then");
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].message, "Keyword 'if' should be in UPPER CASE: IF");
        assert_eq!(diags[1].message, "Keyword 'Then' should be in UPPER CASE: THEN");
    }

    #[test]
    fn test_keyword_case_skips_strings_and_mixed_words() {
        assert!(run(&KeywordCaseCheck, r#"OUTPUT "if you can""#).is_empty());
        assert!(run(&KeywordCaseCheck, "if2 ← for_x").is_empty());
        assert!(run(&KeywordCaseCheck, "IF X THEN").is_empty());
    }

    #[test]
    fn test_identifier_case() {
        let diags = run(&IdentifierCaseCheck, "DECLARE student_name : STRING");
        assert_eq!(codes(&diags), vec![DiagnosticCode::IdentifierCase]);
        assert!(diags[0].message.contains("'student_name'"));

        // Mixed and upper case underscores are a known blind spot.
        assert!(run(&IdentifierCaseCheck, "DECLARE Student_Name : STRING").is_empty());
        assert!(run(&IdentifierCaseCheck, "CONSTANT MAX_SIZE = 10").is_empty());
        assert!(run(&IdentifierCaseCheck, "a_ ← 1").is_empty());
        assert_eq!(run(&IdentifierCaseCheck, "a_b ← 1").len(), 1);
        assert!(run(&IdentifierCaseCheck, r#"OUTPUT "snake_case""#).is_empty());
    }

    #[test]
    fn test_indentation() {
        assert!(run(&IndentationCheck, "OUTPUT X").is_empty());
        assert!(run(&IndentationCheck, "      OUTPUT X").is_empty());
        assert!(run(&IndentationCheck, "\tOUTPUT X").is_empty());

        let diags = run(&IndentationCheck, "    OUTPUT X");
        assert_eq!(
            diags[0].message,
            "Indentation should be in multiples of 3 spaces (found 4)"
        );
    }

    #[test]
    fn test_missing_then() {
        assert_eq!(
            codes(&run(&SyntaxCheck, "IF X > 0")),
            vec![DiagnosticCode::MissingThen]
        );
        assert_eq!(
            codes(&run(&SyntaxCheck, "if x > 0")),
            vec![DiagnosticCode::MissingThen]
        );
        assert!(run(&SyntaxCheck, "IF X > 0 THEN").is_empty());
        assert!(run(&SyntaxCheck, "IF X > 0 then OUTPUT X").is_empty());
        assert!(run(&SyntaxCheck, "IFFY ← 3").is_empty());
    }

    #[test]
    fn test_delimiters_are_balanced_per_line() {
        assert_eq!(
            codes(&run(&SyntaxCheck, "Result ← (5 + 3")),
            vec![DiagnosticCode::UnmatchedParens]
        );
        assert_eq!(
            codes(&run(&SyntaxCheck, "Array[[1]")),
            vec![DiagnosticCode::UnmatchedBrackets]
        );
        assert_eq!(
            codes(&run(&SyntaxCheck, "IF (A[1 > 0")),
            vec![
                DiagnosticCode::MissingThen,
                DiagnosticCode::UnmatchedParens,
                DiagnosticCode::UnmatchedBrackets
            ]
        );
        assert!(run(&SyntaxCheck, "X ← (A[1] + 2)").is_empty());
    }
}
