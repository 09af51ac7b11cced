//! Variable table for one evaluator run
//!
//! - [`VariableTable`]: name → value bindings in declaration order
//! - [`Binding`]: a stored value plus its constant flag
//!
//! Names are case-sensitive. The table enforces the binding rules (no
//! redeclaration, no assignment to constants or unknown names) and reports
//! violations as [`BindingError`]s, which the evaluator turns into runtime
//! faults tagged with the current line.

use super::value::Value;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// A binding rule was violated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("'{0}' is already declared")]
    AlreadyBound(String),

    #[error("Variable '{0}' has not been declared")]
    Undeclared(String),

    #[error("Cannot reassign CONSTANT '{0}'")]
    Constant(String),
}

/// A bound variable or constant
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub value: Value,
    pub is_constant: bool,
}

/// All bindings created during a run
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    bindings: FxHashMap<String, Binding>,
    insertion_order: Vec<String>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a new mutable variable
    pub fn declare(&mut self, name: &str, value: Value) -> Result<(), BindingError> {
        self.insert(name, value, false)
    }

    /// Bind a new constant
    pub fn define_constant(&mut self, name: &str, value: Value) -> Result<(), BindingError> {
        self.insert(name, value, true)
    }

    /// Fail unless `name` is still free to declare
    pub fn ensure_unbound(&self, name: &str) -> Result<(), BindingError> {
        if self.bindings.contains_key(name) {
            return Err(BindingError::AlreadyBound(name.to_string()));
        }
        Ok(())
    }

    /// Fail unless `name` is a declared, non-constant variable
    pub fn ensure_assignable(&self, name: &str) -> Result<(), BindingError> {
        match self.bindings.get(name) {
            None => Err(BindingError::Undeclared(name.to_string())),
            Some(binding) if binding.is_constant => Err(BindingError::Constant(name.to_string())),
            Some(_) => Ok(()),
        }
    }

    fn insert(&mut self, name: &str, value: Value, is_constant: bool) -> Result<(), BindingError> {
        self.ensure_unbound(name)?;
        self.bindings.insert(
            name.to_string(),
            Binding {
                value,
                is_constant,
            },
        );
        self.insertion_order.push(name.to_string());
        Ok(())
    }

    /// Rebind an existing variable
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), BindingError> {
        self.ensure_assignable(name)?;
        if let Some(binding) = self.bindings.get_mut(name) {
            binding.value = value;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name).map(|b| &b.value)
    }

    pub fn is_constant(&self, name: &str) -> bool {
        self.bindings.get(name).is_some_and(|b| b.is_constant)
    }

    /// Iterate over bindings in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.insertion_order
            .iter()
            .filter_map(|name| self.bindings.get(name).map(|b| (name.as_str(), b)))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
        self.insertion_order.clear();
    }
}
