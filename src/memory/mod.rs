//! Memory model for the pseudocode evaluator
//!
//! This module provides the runtime storage abstractions:
//! - [`value`]: Tagged runtime values (Integer, Real, String, Boolean, Char)
//!   and the declarable [`value::DataType`]s
//! - [`variables`]: The per-run variable table, including constants
//!
//! # Lifetime
//!
//! A [`variables::VariableTable`] belongs to exactly one run. The evaluator
//! clears it at the start of every run, so nothing survives between calls.

pub mod value;
pub mod variables;
