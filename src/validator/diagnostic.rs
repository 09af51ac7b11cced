//! Diagnostic types reported by the validator
//!
//! Diagnostic codes are a stable wire vocabulary: they serialize as
//! `SCREAMING_SNAKE_CASE` strings (`KEYWORD_CASE`, `UNMATCHED_PARENS`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a diagnostic is.
///
/// Errors mean the text is not well-formed; warnings are style deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Stable identifier for each kind of diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    KeywordCase,
    IdentifierCase,
    Indentation,
    UnmatchedParens,
    UnmatchedBrackets,
    MissingThen,
}

impl DiagnosticCode {
    /// The wire form of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::KeywordCase => "KEYWORD_CASE",
            DiagnosticCode::IdentifierCase => "IDENTIFIER_CASE",
            DiagnosticCode::Indentation => "INDENTATION",
            DiagnosticCode::UnmatchedParens => "UNMATCHED_PARENS",
            DiagnosticCode::UnmatchedBrackets => "UNMATCHED_BRACKETS",
            DiagnosticCode::MissingThen => "MISSING_THEN",
        }
    }

    /// Only unmatched delimiters are errors; everything else is style.
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticCode::UnmatchedParens | DiagnosticCode::UnmatchedBrackets => Severity::Error,
            DiagnosticCode::KeywordCase
            | DiagnosticCode::IdentifierCase
            | DiagnosticCode::Indentation
            | DiagnosticCode::MissingThen => Severity::Warning,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single issue tied to a 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub line_number: usize,
    pub code: DiagnosticCode,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    /// Create a diagnostic whose severity follows from its code.
    pub fn new(code: DiagnosticCode, line_number: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            line_number,
            code,
            message: message.into(),
            severity: code.severity(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {}[{}]: {}",
            self.line_number, self.severity, self.code, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_code() {
        assert!(Diagnostic::new(DiagnosticCode::UnmatchedParens, 1, "x").is_error());
        assert!(Diagnostic::new(DiagnosticCode::UnmatchedBrackets, 1, "x").is_error());
        assert!(!Diagnostic::new(DiagnosticCode::MissingThen, 1, "x").is_error());
    }

    #[test]
    fn test_wire_format() {
        let diag = Diagnostic::new(DiagnosticCode::KeywordCase, 3, "Keyword 'if' should be in UPPER CASE: IF");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["lineNumber"], 3);
        assert_eq!(json["code"], "KEYWORD_CASE");
        assert_eq!(json["severity"], "warning");
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::new(DiagnosticCode::UnmatchedParens, 7, "Unmatched parentheses");
        assert_eq!(
            diag.to_string(),
            "line 7: error[UNMATCHED_PARENS]: Unmatched parentheses"
        );
    }
}
