//! Pseudocode evaluator
//!
//! This module provides the line-by-line execution logic:
//! - [`engine`]: The [`engine::Interpreter`], run loop and safety caps
//! - [`statements`]: Recognition and execution of OUTPUT, DECLARE, CONSTANT
//!   and assignment lines
//! - [`expressions`]: Textual operator splitting and value arithmetic
//! - [`errors`]: Runtime fault types
//!
//! # Execution Model
//!
//! Every physical line is one step. Blank lines and `//` or `#` comments are
//! counted but not executed; unrecognised lines (control flow, procedures,
//! arrays) are counted and ignored. There is no jumping, so a program runs
//! top to bottom exactly once.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod expressions;
pub mod statements;

pub use engine::{execute, execute_with_limits, ExecuteResponse, Interpreter};
pub use errors::RuntimeFault;
