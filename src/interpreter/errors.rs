//! Runtime fault types for the pseudocode evaluator
//!
//! This module defines [`RuntimeFault`], which represents every condition that
//! stops a run. Each fault carries the 1-based line it was raised on.
//!
//! All runtime faults are fatal: the run halts and the fault becomes the single
//! terminal `error` event. Faults never escape
//! [`Interpreter::run`](super::engine::Interpreter::run).

use crate::memory::variables::BindingError;
use thiserror::Error;

/// Runtime faults that can occur during execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeFault {
    /// More lines stepped through than the step cap allows
    #[error("Execution step limit exceeded (possible infinite loop)")]
    StepLimitExceeded { line: usize },

    /// The run took longer than the time cap allows
    #[error("Execution time limit exceeded")]
    TimeLimitExceeded { line: usize },

    /// DECLARE of a name that is already bound
    #[error("Variable '{name}' is already declared")]
    AlreadyDeclared { name: String, line: usize },

    /// CONSTANT of a name that is already bound
    #[error("'{name}' is already declared")]
    ConstantRedeclared { name: String, line: usize },

    /// DECLARE with a type the evaluator does not know
    #[error("Unknown type '{type_name}'")]
    UnknownType { type_name: String, line: usize },

    /// Reference to or assignment of an undeclared name
    #[error("Variable '{name}' has not been declared")]
    UndeclaredVariable { name: String, line: usize },

    /// Assignment to a CONSTANT
    #[error("Cannot reassign CONSTANT '{name}'")]
    ConstModification { name: String, line: usize },

    /// `/` or `DIV` with a zero divisor
    #[error("Cannot divide by zero")]
    DivisionByZero { line: usize },

    /// `MOD` with a zero divisor
    #[error("Cannot perform MOD with zero")]
    ModuloByZero { line: usize },

    /// An operand has no numeric reading
    #[error("Cannot convert '{text}' to a number")]
    NotANumber { text: String, line: usize },

    /// Integer arithmetic left the `i64` range
    #[error("Integer overflow in {operation}")]
    IntegerOverflow { operation: String, line: usize },
}

impl RuntimeFault {
    pub fn line(&self) -> usize {
        match self {
            RuntimeFault::StepLimitExceeded { line }
            | RuntimeFault::TimeLimitExceeded { line }
            | RuntimeFault::AlreadyDeclared { line, .. }
            | RuntimeFault::ConstantRedeclared { line, .. }
            | RuntimeFault::UnknownType { line, .. }
            | RuntimeFault::UndeclaredVariable { line, .. }
            | RuntimeFault::ConstModification { line, .. }
            | RuntimeFault::DivisionByZero { line }
            | RuntimeFault::ModuloByZero { line }
            | RuntimeFault::NotANumber { line, .. }
            | RuntimeFault::IntegerOverflow { line, .. } => *line,
        }
    }

    /// Text of the terminal error event
    pub fn event_text(&self) -> String {
        format!("Line {}: RuntimeError — {}", self.line(), self)
    }

    /// Tag a binding violation from a DECLARE line
    pub fn from_declare(err: BindingError, line: usize) -> Self {
        match err {
            BindingError::AlreadyBound(name) => RuntimeFault::AlreadyDeclared { name, line },
            other => Self::from_binding(other, line),
        }
    }

    /// Tag a binding violation from a CONSTANT or assignment line
    pub fn from_binding(err: BindingError, line: usize) -> Self {
        match err {
            BindingError::AlreadyBound(name) => RuntimeFault::ConstantRedeclared { name, line },
            BindingError::Undeclared(name) => RuntimeFault::UndeclaredVariable { name, line },
            BindingError::Constant(name) => RuntimeFault::ConstModification { name, line },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let fault = RuntimeFault::DivisionByZero { line: 1 };
        assert_eq!(fault.to_string(), "Cannot divide by zero");
        assert_eq!(fault.event_text(), "Line 1: RuntimeError — Cannot divide by zero");

        let fault = RuntimeFault::UnknownType {
            type_name: "FOO".to_string(),
            line: 4,
        };
        assert_eq!(fault.event_text(), "Line 4: RuntimeError — Unknown type 'FOO'");
    }

    #[test]
    fn test_binding_conversion() {
        let err = BindingError::AlreadyBound("X".to_string());
        assert_eq!(
            RuntimeFault::from_declare(err.clone(), 2).to_string(),
            "Variable 'X' is already declared"
        );
        assert_eq!(
            RuntimeFault::from_binding(err, 2).to_string(),
            "'X' is already declared"
        );
        let fault = RuntimeFault::from_binding(BindingError::Constant("Pi".to_string()), 9);
        assert_eq!(fault.line(), 9);
        assert!(matches!(fault, RuntimeFault::ConstModification { .. }));
    }
}
