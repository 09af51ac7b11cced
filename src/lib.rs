//! # Introduction
//!
//! cambridge-pseudo checks, formats and runs Cambridge-style pseudocode. The
//! three processors are independent and purely textual; a document pipeline
//! ties them to a store, and a terminal playground built with
//! [ratatui](https://docs.rs/ratatui) ties them to an editor buffer.
//!
//! ## Processing pipeline
//!
//! ```text
//! Text ─┬→ Validator → ValidationResult
//!       ├→ Formatter → formatted text
//!       └→ Evaluator → ExecutionEvents
//! ```
//!
//! 1. [`lexicon`]: the keyword set and word scanning shared by the validator
//!    and formatter.
//! 2. [`validator`]: per-line style warnings and delimiter errors.
//! 3. [`formatter`]: keyword uppercasing and block indentation.
//! 4. [`interpreter`]: a line-by-line evaluator for DECLARE, CONSTANT,
//!    assignment and OUTPUT, bounded by [`config::ExecutionLimits`].
//! 5. [`memory`]: tagged [`memory::value::Value`]s and the
//!    [`memory::variables::VariableTable`] they are bound in.
//! 6. [`events`]: the ordered trace a run produces.
//! 7. [`pipeline`]: documents stored in formatted form behind a
//!    [`pipeline::DocumentRepository`].
//! 8. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported evaluator subset
//!
//! Statements: `DECLARE name : TYPE`, `CONSTANT name = expr`, `name ← expr`,
//! `OUTPUT expr`. Types: `INTEGER`, `REAL`, `STRING`, `BOOLEAN`, `CHAR`.
//! Operators: `+ - * /`, `DIV`, `MOD`. Control flow is recognised by the
//! validator and formatter but not executed.

pub mod config;
pub mod events;
pub mod formatter;
pub mod interpreter;
pub mod lexicon;
pub mod memory;
pub mod pipeline;
pub mod ui;
pub mod validator;
