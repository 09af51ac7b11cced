//! Cambridge pseudocode formatter
//!
//! [`format`] rewrites source text into canonical form: keywords uppercased,
//! each line re-indented to `INDENT_WIDTH * level` spaces. The formatter is
//! total and idempotent; it performs no validation of its own.
//!
//! Indentation is driven by the first and last words of each trimmed line:
//! - closing lines (`ENDIF`, `NEXT`, `UNTIL`, `ELSE`, ...) dedent before they
//!   are emitted
//! - opening lines (`IF`, `WHILE`, `FOR`, ..., or anything ending in `THEN` or
//!   `DO`) indent the lines after them
//!
//! `ELSE` does both, so it sits at its parent's level and leaves the level
//! unchanged.

pub mod rewrite;

pub use rewrite::rewrite_line;

use crate::lexicon::{
    ends_with_ignore_case, is_comment, starts_with_ignore_case, starts_with_word, INDENT_WIDTH,
};

/// Prefixes that dedent the line they start.
const CLOSING_PREFIXES: &[&str] = &[
    "ENDIF",
    "ENDWHILE",
    "NEXT",
    "UNTIL",
    "ENDCASE",
    "ENDPROCEDURE",
    "ENDFUNCTION",
    "ENDTYPE",
    "ENDCLASS",
    "ELSE",
];

/// First words that open a block.
const OPENING_WORDS: &[&str] = &[
    "IF",
    "ELSE",
    "WHILE",
    "FOR",
    "REPEAT",
    "CASE",
    "PROCEDURE",
    "FUNCTION",
    "TYPE",
    "CLASS",
];

/// Check whether a trimmed line closes a block.
///
/// This is a plain prefix test, so `NEXTVALUE ← 1` also dedents.
pub fn is_closing(trimmed: &str) -> bool {
    CLOSING_PREFIXES
        .iter()
        .any(|prefix| starts_with_ignore_case(trimmed, prefix))
}

/// Check whether a trimmed line opens a block.
pub fn is_opening(trimmed: &str) -> bool {
    OPENING_WORDS.iter().any(|kw| starts_with_word(trimmed, kw))
        || ends_with_ignore_case(trimmed, "THEN")
        || ends_with_ignore_case(trimmed, "DO")
}

/// Running indent state while walking a document
#[derive(Debug, Default)]
struct IndentTracker {
    level: usize,
}

impl IndentTracker {
    fn indent(&self, text: &str) -> String {
        let mut line = " ".repeat(self.level * INDENT_WIDTH);
        line.push_str(text);
        line
    }

    fn format_line(&mut self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return String::new();
        }
        if is_comment(trimmed) {
            return self.indent(trimmed);
        }

        if is_closing(trimmed) {
            self.level = self.level.saturating_sub(1);
        }
        let formatted = self.indent(&rewrite_line(trimmed));
        if is_opening(trimmed) {
            self.level += 1;
        }
        formatted
    }
}

/// Format pseudocode source text.
///
/// Empty or whitespace-only input yields an empty string. Lines are split and
/// joined on `\n`, so the line count never changes.
pub fn format(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let mut tracker = IndentTracker::default();
    text.split('\n')
        .map(|line| tracker.format_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check whether `text` is already in canonical form.
pub fn is_formatted(text: &str) -> bool {
    format(text) == text
}
