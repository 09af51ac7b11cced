//! Statement recognition and execution
//!
//! Each trimmed source line is matched against four statement shapes, in this
//! order, and the first match wins:
//!
//! - `OUTPUT <expr>`
//! - `DECLARE <name> : <type>` (the whole line, type is a single word)
//! - `CONSTANT <name> = <expr>`
//! - `<name> ← <expr>` or `<name> <- <expr>`
//!
//! Keywords match case-insensitively; names are runs of word characters.
//! Lines matching none of the shapes (control flow, procedures, arrays, ...)
//! are ignored.

use crate::events::ExecutionEvent;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeFault;
use crate::lexicon::{is_word_char, starts_with_ignore_case};
use crate::memory::value::DataType;

/// A recognised statement, borrowing from its source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    Output { expr: &'a str },
    Declare { name: &'a str, type_name: &'a str },
    Constant { name: &'a str, expr: &'a str },
    Assign { name: &'a str, expr: &'a str },
}

/// Byte cursor over one trimmed line
struct Cursor<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor { text, position: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    /// Consume `keyword` ignoring ASCII case
    fn keyword(&mut self, keyword: &str) -> bool {
        if starts_with_ignore_case(self.rest(), keyword) {
            self.position += keyword.len();
            true
        } else {
            false
        }
    }

    /// Consume `token` exactly
    fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.position += token.len();
            true
        } else {
            false
        }
    }

    /// Skip whitespace, returning how many characters were skipped
    fn skip_whitespace(&mut self) -> usize {
        let mut skipped = 0;
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.position += c.len_utf8();
            skipped += 1;
        }
        skipped
    }

    /// Consume a non-empty run of word characters
    fn word(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
        if len == 0 {
            return None;
        }
        self.position += len;
        Some(&rest[..len])
    }

    /// The non-empty remainder of the line, trimmed
    fn remainder(&mut self) -> Option<&'a str> {
        let rest = self.rest().trim();
        self.position = self.text.len();
        (!rest.is_empty()).then_some(rest)
    }
}

fn parse_output(line: &str) -> Option<Statement<'_>> {
    let mut cursor = Cursor::new(line);
    if !cursor.keyword("OUTPUT") || cursor.skip_whitespace() == 0 {
        return None;
    }
    let expr = cursor.remainder()?;
    Some(Statement::Output { expr })
}

fn parse_declare(line: &str) -> Option<Statement<'_>> {
    let mut cursor = Cursor::new(line);
    if !cursor.keyword("DECLARE") || cursor.skip_whitespace() == 0 {
        return None;
    }
    let name = cursor.word()?;
    cursor.skip_whitespace();
    if !cursor.eat(":") {
        return None;
    }
    cursor.skip_whitespace();
    let type_name = cursor.word()?;
    cursor.is_at_end().then_some(Statement::Declare { name, type_name })
}

fn parse_constant(line: &str) -> Option<Statement<'_>> {
    let mut cursor = Cursor::new(line);
    if !cursor.keyword("CONSTANT") || cursor.skip_whitespace() == 0 {
        return None;
    }
    let name = cursor.word()?;
    cursor.skip_whitespace();
    if !cursor.eat("=") {
        return None;
    }
    let expr = cursor.remainder()?;
    Some(Statement::Constant { name, expr })
}

fn parse_assign(line: &str) -> Option<Statement<'_>> {
    let mut cursor = Cursor::new(line);
    let name = cursor.word()?;
    cursor.skip_whitespace();
    if !(cursor.eat("←") || cursor.eat("<-")) {
        return None;
    }
    let expr = cursor.remainder()?;
    Some(Statement::Assign { name, expr })
}

/// Recognise the statement on a trimmed line
pub fn parse_statement(line: &str) -> Option<Statement<'_>> {
    parse_output(line)
        .or_else(|| parse_declare(line))
        .or_else(|| parse_constant(line))
        .or_else(|| parse_assign(line))
}

impl Interpreter {
    /// Execute one trimmed, non-comment line
    pub(crate) fn execute_line(&mut self, line: &str, line_number: usize) -> Result<(), RuntimeFault> {
        let Some(statement) = parse_statement(line) else {
            tracing::trace!(line = line_number, "ignoring unrecognised statement");
            return Ok(());
        };

        match statement {
            Statement::Output { expr } => {
                let value = self.evaluate(expr, line_number)?;
                self.log
                    .push(ExecutionEvent::output(value.to_string(), line_number));
            }

            Statement::Declare { name, type_name } => {
                self.variables
                    .ensure_unbound(name)
                    .map_err(|e| RuntimeFault::from_declare(e, line_number))?;
                let data_type =
                    DataType::from_name(type_name).ok_or_else(|| RuntimeFault::UnknownType {
                        type_name: type_name.to_uppercase(),
                        line: line_number,
                    })?;
                self.variables
                    .declare(name, data_type.default_value())
                    .map_err(|e| RuntimeFault::from_declare(e, line_number))?;
            }

            Statement::Constant { name, expr } => {
                self.variables
                    .ensure_unbound(name)
                    .map_err(|e| RuntimeFault::from_binding(e, line_number))?;
                let value = self.evaluate(expr, line_number)?;
                self.variables
                    .define_constant(name, value)
                    .map_err(|e| RuntimeFault::from_binding(e, line_number))?;
            }

            Statement::Assign { name, expr } => {
                self.variables
                    .ensure_assignable(name)
                    .map_err(|e| RuntimeFault::from_binding(e, line_number))?;
                let value = self.evaluate(expr, line_number)?;
                self.variables
                    .assign(name, value)
                    .map_err(|e| RuntimeFault::from_binding(e, line_number))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output() {
        assert_eq!(
            parse_statement("output  \"Hi\" + X"),
            Some(Statement::Output { expr: "\"Hi\" + X" })
        );
        assert_eq!(parse_statement("OUTPUTX"), None);
        assert_eq!(parse_statement("OUTPUT"), None);
    }

    #[test]
    fn test_declare_must_span_the_line() {
        assert_eq!(
            parse_statement("DECLARE Count:INTEGER"),
            Some(Statement::Declare {
                name: "Count",
                type_name: "INTEGER"
            })
        );
        assert_eq!(
            parse_statement("declare x : foo"),
            Some(Statement::Declare {
                name: "x",
                type_name: "foo"
            })
        );
        assert_eq!(parse_statement("DECLARE A : ARRAY[1:10] OF INTEGER"), None);
        assert_eq!(parse_statement("DECLARE X"), None);
    }

    #[test]
    fn test_constant() {
        assert_eq!(
            parse_statement("CONSTANT Max = 10 * 2"),
            Some(Statement::Constant {
                name: "Max",
                expr: "10 * 2"
            })
        );
        assert_eq!(parse_statement("CONSTANT Max ="), None);
    }

    #[test]
    fn test_assignment_arrows() {
        assert_eq!(
            parse_statement("X ← X + 1"),
            Some(Statement::Assign {
                name: "X",
                expr: "X + 1"
            })
        );
        assert_eq!(
            parse_statement("total<-5"),
            Some(Statement::Assign {
                name: "total",
                expr: "5"
            })
        );
        assert_eq!(parse_statement("X < -5"), None);
        assert_eq!(parse_statement("X ←"), None);
    }

    #[test]
    fn test_control_flow_is_ignored() {
        for line in ["IF X > 0 THEN", "ENDIF", "FOR I ← 1 TO 10", "CALL Go()", "X = 5"] {
            assert_eq!(parse_statement(line), None, "{}", line);
        }
    }
}
