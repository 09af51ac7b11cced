//! Expression evaluation
//!
//! Expressions are not parsed into a tree. Each expression string is tried
//! against a fixed sequence of shapes and the first one that fits decides how
//! it is evaluated:
//!
//! 1. a double-quoted string literal
//! 2. a numeric literal
//! 3. `TRUE` / `FALSE`
//! 4. a binary split on `/`, then ` DIV `, ` MOD `, `+`, `-`, `*`
//! 5. a declared variable
//! 6. a bare word, which faults as an undeclared variable
//! 7. anything else, returned as its own text
//!
//! A split always happens at the FIRST occurrence of the operator, and both
//! halves are evaluated the same way. This does not follow
//! conventional precedence: `2 * 3 + 4` splits on `+` first and is `10`,
//! while `8 - 2 - 1` splits on the first `-` and is `8 - (2 - 1) = 7`.
//!
//! # Safety
//!
//! Integer arithmetic is checked and reports overflow as a runtime fault
//! instead of wrapping or panicking.

use crate::interpreter::constants::DIVISION_EPSILON;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeFault;
use crate::lexicon::is_word_char;
use crate::memory::value::Value;

/// Binary operators in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Divide,
    IntDivide,
    Modulo,
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub const TRIAL_ORDER: [Operator; 6] = [
        Operator::Divide,
        Operator::IntDivide,
        Operator::Modulo,
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Divide => "/",
            Operator::IntDivide => "DIV",
            Operator::Modulo => "MOD",
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
        }
    }

    /// Byte offset of the first occurrence after `start` in a trimmed `text`
    ///
    /// An occurrence qualifies when the halves around it, taken from `start`,
    /// are both non-empty. That only depends on it lying strictly after
    /// `start`, so an occurrence found for one start stays the first one for
    /// any later start that has not passed it.
    fn find(self, text: &str, start: usize) -> Option<usize> {
        match self {
            Operator::Divide => find_symbol(text, start, '/'),
            Operator::IntDivide => find_word(text, start, "DIV"),
            Operator::Modulo => find_word(text, start, "MOD"),
            Operator::Add => find_symbol(text, start, '+'),
            Operator::Subtract => find_symbol(text, start, '-'),
            Operator::Multiply => find_symbol(text, start, '*'),
        }
    }

    fn halves(self, text: &str, start: usize, index: usize) -> (&str, &str) {
        let left = text[start..index].trim();
        let right = text[index + self.symbol().len()..].trim();
        (left, right)
    }

    fn apply(self, left: Value, right: Value, line: usize) -> Result<Value, RuntimeFault> {
        match self {
            Operator::Divide => {
                let dividend = real_operand(&left, line)?;
                let divisor = real_operand(&right, line)?;
                if divisor.abs() < DIVISION_EPSILON {
                    return Err(RuntimeFault::DivisionByZero { line });
                }
                Ok(Value::Real(dividend / divisor))
            }
            Operator::IntDivide => {
                let dividend = integer_operand(&left, line)?;
                let divisor = integer_operand(&right, line)?;
                if divisor == 0 {
                    return Err(RuntimeFault::DivisionByZero { line });
                }
                dividend
                    .checked_div(divisor)
                    .map(Value::Integer)
                    .ok_or_else(|| self.overflow(line))
            }
            Operator::Modulo => {
                let dividend = integer_operand(&left, line)?;
                let divisor = integer_operand(&right, line)?;
                if divisor == 0 {
                    return Err(RuntimeFault::ModuloByZero { line });
                }
                dividend
                    .checked_rem(divisor)
                    .map(Value::Integer)
                    .ok_or_else(|| self.overflow(line))
            }
            Operator::Add if left.is_textual() || right.is_textual() => {
                Ok(Value::String(format!("{}{}", left, right)))
            }
            Operator::Add => self.arithmetic(&left, &right, line, i64::checked_add, |a, b| a + b),
            Operator::Subtract => {
                self.arithmetic(&left, &right, line, i64::checked_sub, |a, b| a - b)
            }
            Operator::Multiply => {
                self.arithmetic(&left, &right, line, i64::checked_mul, |a, b| a * b)
            }
        }
    }

    /// INTEGER op INTEGER stays INTEGER; any other mix is REAL
    #[inline]
    fn arithmetic(
        self,
        left: &Value,
        right: &Value,
        line: usize,
        int_op: fn(i64, i64) -> Option<i64>,
        real_op: fn(f64, f64) -> f64,
    ) -> Result<Value, RuntimeFault> {
        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            return int_op(*a, *b)
                .map(Value::Integer)
                .ok_or_else(|| self.overflow(line));
        }
        let a = real_operand(left, line)?;
        let b = real_operand(right, line)?;
        Ok(Value::Real(real_op(a, b)))
    }

    fn overflow(self, line: usize) -> RuntimeFault {
        RuntimeFault::IntegerOverflow {
            operation: self.symbol().to_string(),
            line,
        }
    }
}

fn real_operand(value: &Value, line: usize) -> Result<f64, RuntimeFault> {
    value.as_real().ok_or_else(|| RuntimeFault::NotANumber {
        text: value.to_string(),
        line,
    })
}

fn integer_operand(value: &Value, line: usize) -> Result<i64, RuntimeFault> {
    value.as_integer().ok_or_else(|| RuntimeFault::NotANumber {
        text: value.to_string(),
        line,
    })
}

/// First `symbol` past `start` that is not the last character
fn find_symbol(text: &str, start: usize, symbol: char) -> Option<usize> {
    text[start..]
        .char_indices()
        .skip(1)
        .find(|&(i, c)| c == symbol && start + i + c.len_utf8() < text.len())
        .map(|(i, _)| start + i)
}

/// First `word` (any ASCII case) past `start` with whitespace on both sides
fn find_word(text: &str, start: usize, word: &str) -> Option<usize> {
    text[start..].char_indices().skip(1).find_map(|(i, _)| {
        let index = start + i;
        let candidate = text.get(index..index + word.len())?;
        if !candidate.eq_ignore_ascii_case(word) {
            return None;
        }
        let before = text[..index].chars().next_back()?;
        let after = text[index + word.len()..].chars().next()?;
        (before.is_whitespace() && after.is_whitespace()).then_some(index)
    })
}

/// Operator splits over the right-hand suffixes of one expression
///
/// Following a chain moves the start forward through the same text, so each
/// operator's next occurrence is remembered and only searched for again once
/// the start passes it. Every operator scans the text at most once per chain.
struct SplitScanner<'a> {
    text: &'a str,
    start: usize,
    /// Per operator in trial order: not searched yet, or the search result
    found: [Option<Option<usize>>; Operator::TRIAL_ORDER.len()],
}

impl<'a> SplitScanner<'a> {
    fn new(text: &'a str) -> Self {
        SplitScanner {
            text: text.trim(),
            start: 0,
            found: [None; Operator::TRIAL_ORDER.len()],
        }
    }

    fn current(&self) -> &'a str {
        &self.text[self.start..]
    }

    /// First operator in trial order that splits the current suffix
    fn split(&mut self) -> Option<(Operator, &'a str, &'a str)> {
        for (slot, &op) in Operator::TRIAL_ORDER.iter().enumerate() {
            let index = match self.found[slot] {
                Some(Some(index)) if index > self.start => Some(index),
                Some(None) => None,
                _ => {
                    let index = op.find(self.text, self.start);
                    self.found[slot] = Some(index);
                    index
                }
            };
            if let Some(index) = index {
                let (left, right) = op.halves(self.text, self.start, index);
                return Some((op, left, right));
            }
        }
        None
    }

    /// Continue with a right half returned by [`split`](Self::split)
    fn advance(&mut self, right: &'a str) {
        self.start = self.text.len() - right.len();
    }
}

/// Contents of a `"..."` literal with no quote inside it
fn string_literal(expr: &str) -> Option<&str> {
    let inner = expr.strip_prefix('"')?;
    let close = inner.find('"')?;
    (close + 1 == inner.len()).then(|| &inner[..close])
}

fn boolean_literal(expr: &str) -> Option<bool> {
    if expr.eq_ignore_ascii_case("TRUE") {
        Some(true)
    } else if expr.eq_ignore_ascii_case("FALSE") {
        Some(false)
    } else {
        None
    }
}

/// Literals that are recognised before any operator split
fn literal(expr: &str) -> Option<Value> {
    if let Some(text) = string_literal(expr) {
        return Some(Value::String(text.to_string()));
    }
    Value::parse_numeric(expr).or_else(|| boolean_literal(expr).map(Value::Boolean))
}

impl Interpreter {
    /// Evaluate an expression string to a value
    ///
    /// Right-hand halves of a split are followed in a loop rather than by
    /// recursion, so a long chain like `1 + 1 + ... + 1` uses constant stack
    /// and, through [`SplitScanner`], time linear in its length. Left halves
    /// still recurse, but a left half can only split on an operator later in
    /// [`Operator::TRIAL_ORDER`], which bounds the depth.
    ///
    /// The run's deadline is checked on every split.
    pub(crate) fn evaluate(&self, expr: &str, line: usize) -> Result<Value, RuntimeFault> {
        let mut pending: Vec<(Value, Operator)> = Vec::new();
        let mut scanner = SplitScanner::new(expr);

        let mut value = loop {
            self.check_deadline(line)?;

            let current = scanner.current();
            if let Some(value) = literal(current) {
                break value;
            }

            match scanner.split() {
                Some((op, left, right)) => {
                    let left_value = self.evaluate(left, line)?;
                    pending.push((left_value, op));
                    scanner.advance(right);
                }
                None => break self.evaluate_name(current, line)?,
            }
        };

        while let Some((left, op)) = pending.pop() {
            value = op.apply(left, value, line)?;
        }
        Ok(value)
    }

    /// Variables, undeclared names, and the literal-text fallback
    fn evaluate_name(&self, expr: &str, line: usize) -> Result<Value, RuntimeFault> {
        if let Some(value) = self.variables.get(expr) {
            return Ok(value.clone());
        }
        if !expr.is_empty() && expr.chars().all(is_word_char) {
            return Err(RuntimeFault::UndeclaredVariable {
                name: expr.to_string(),
                line,
            });
        }
        Ok(Value::String(expr.to_string()))
    }
}
