//! Cambridge pseudocode validator
//!
//! [`validate`] scans source text line by line and reports:
//! - warnings for style deviations (keyword case, snake_case identifiers,
//!   indentation that is not a multiple of three, IF without THEN)
//! - errors for unmatched parentheses or brackets on a line
//!
//! Validation never fails: malformed or empty input still produces a
//! [`ValidationResult`]. Blank lines and `//` comment lines are skipped.
//!
//! # Known limitations
//!
//! Delimiter balance is checked per line, so an expression whose parentheses
//! span two lines is reported on both of them.

pub mod checks;
pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};

use crate::lexicon::is_comment;
use serde::{Deserialize, Serialize};

/// Outcome of validating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl ValidationResult {
    fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    /// All diagnostics ordered by line, errors before warnings on the same line.
    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        let mut all: Vec<&Diagnostic> = self.errors.iter().chain(&self.warnings).collect();
        all.sort_by_key(|d| (d.line_number, std::cmp::Reverse(d.severity)));
        all
    }

    /// The most severe diagnostic reported for `line_number`, if any.
    pub fn worst_on_line(&self, line_number: usize) -> Option<Severity> {
        self.errors
            .iter()
            .chain(&self.warnings)
            .filter(|d| d.line_number == line_number)
            .map(|d| d.severity)
            .max()
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }
}

/// Validate pseudocode source text.
pub fn validate(text: &str) -> ValidationResult {
    let mut result = ValidationResult::default();
    if text.trim().is_empty() {
        return result;
    }

    let checks = checks::all_checks();
    let mut found = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        if line.trim().is_empty() || is_comment(line) {
            continue;
        }

        let line_number = index + 1;
        for check in &checks {
            check.check(line, line_number, &mut found);
        }
        for diagnostic in found.drain(..) {
            result.push(diagnostic);
        }
    }

    result.is_valid = result.errors.is_empty();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_valid() {
        for text in ["", "   ", "\n\n", " \t\r\n "] {
            let result = validate(text);
            assert!(result.is_valid);
            assert!(!result.has_diagnostics());
        }
    }

    #[test]
    fn test_comments_are_skipped() {
        let result = validate("// if (unbalanced\n   // snake_case here");
        assert!(result.is_valid);
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_all_lines_are_scanned_after_an_error() {
        let result = validate("X ← (1\nY ← (2\nif Z THEN");
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[1].line_number, 2);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].line_number, 3);
    }

    #[test]
    fn test_diagnostics_order_and_worst_severity() {
        let result = validate("if (x THEN\nOUTPUT 1");
        let ordered = result.diagnostics();
        assert_eq!(ordered[0].code, DiagnosticCode::UnmatchedParens);
        assert_eq!(ordered[1].code, DiagnosticCode::KeywordCase);
        assert_eq!(result.worst_on_line(1), Some(Severity::Error));
        assert_eq!(result.worst_on_line(2), None);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(validate("X ← (1")).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"][0]["code"], "UNMATCHED_PARENS");
        assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
    }
}
