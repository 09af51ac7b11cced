//! Runtime value representation
//!
//! This module defines the [`Value`] enum, which represents all runtime values
//! of the pseudocode evaluator. Variables are dynamically typed: any cell may
//! hold any variant, and operators coerce their operands as needed.
//!
//! # Value Types
//!
//! - [`Value::Integer`]: 64-bit signed integer
//! - [`Value::Real`]: 64-bit float
//! - [`Value::String`]: owned text
//! - [`Value::Boolean`]: `TRUE` / `FALSE`
//! - [`Value::Char`]: a single character
//!
//! # Numeric Coercion
//!
//! Arithmetic asks operands for a number through [`Value::as_real`] or
//! [`Value::as_integer`]. Booleans count as 1/0 and strings are parsed, while
//! a `CHAR` is never numeric.

use std::fmt;

/// Runtime values in the evaluator
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
    String(String),
    Boolean(bool),
    Char(char),
}

/// Declarable type names and their default values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Real,
    String,
    Boolean,
    Char,
}

impl DataType {
    /// Look up a type name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<DataType> {
        match name.to_ascii_uppercase().as_str() {
            "INTEGER" => Some(DataType::Integer),
            "REAL" => Some(DataType::Real),
            "STRING" => Some(DataType::String),
            "BOOLEAN" => Some(DataType::Boolean),
            "CHAR" => Some(DataType::Char),
            _ => None,
        }
    }

    /// The value a freshly declared variable of this type holds
    pub fn default_value(self) -> Value {
        match self {
            DataType::Integer => Value::Integer(0),
            DataType::Real => Value::Real(0.0),
            DataType::String => Value::String(String::new()),
            DataType::Boolean => Value::Boolean(false),
            DataType::Char => Value::Char('\0'),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DataType::Integer => "INTEGER",
            DataType::Real => "REAL",
            DataType::String => "STRING",
            DataType::Boolean => "BOOLEAN",
            DataType::Char => "CHAR",
        }
    }
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Integer(_) => DataType::Integer,
            Value::Real(_) => DataType::Real,
            Value::String(_) => DataType::String,
            Value::Boolean(_) => DataType::Boolean,
            Value::Char(_) => DataType::Char,
        }
    }

    /// Parse a numeric literal.
    ///
    /// The text must start with a digit, a sign or `.`, and parse as a finite
    /// decimal float. Integral values that fit in `i64` become
    /// [`Value::Integer`]; everything else becomes [`Value::Real`].
    pub fn parse_numeric(text: &str) -> Option<Value> {
        let first = text.chars().next()?;
        if !(first.is_ascii_digit() || matches!(first, '+' | '-' | '.')) {
            return None;
        }

        if let Ok(n) = text.parse::<i64>() {
            return Some(Value::Integer(n));
        }
        let number: f64 = text.parse().ok()?;
        if !number.is_finite() {
            return None;
        }
        Some(Value::from_f64(number))
    }

    /// Wrap a float, narrowing to an integer when it is integral and in range.
    fn from_f64(number: f64) -> Value {
        // i64::MAX is not representable, so compare against 2^63 exclusively.
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        if number.fract() == 0.0 && number >= -LIMIT && number < LIMIT {
            Value::Integer(number as i64)
        } else {
            Value::Real(number)
        }
    }

    /// Check if this value takes part in `+` as text
    pub fn is_textual(&self) -> bool {
        matches!(self, Value::String(_) | Value::Char(_))
    }

    /// Get the value as a float, returns None if it has no numeric reading
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Real(x) => Some(*x),
            Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|x| x.is_finite()),
            Value::Char(_) => None,
        }
    }

    /// Get the value as an integer, returns None if it has no integral reading
    ///
    /// Reals round half to even; strings must hold an integer literal.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Real(x) => {
                let rounded = x.round_ties_even();
                match Value::from_f64(rounded) {
                    Value::Integer(n) => Some(n),
                    _ => None,
                }
            }
            Value::Boolean(b) => Some(i64::from(*b)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            Value::Char(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Real(x) => write!(f, "{}", x),
            Value::String(s) => f.write_str(s),
            Value::Boolean(true) => f.write_str("TRUE"),
            Value::Boolean(false) => f.write_str("FALSE"),
            Value::Char(c) => write!(f, "{}", c),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Real(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
