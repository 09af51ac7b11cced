//! Execution event log
//!
//! The evaluator reports everything observable through an ordered list of
//! [`ExecutionEvent`]s: program output, the terminal runtime error, and system
//! notices such as the completion message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of event was emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Output,
    Error,
    System,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Output => write!(f, "output"),
            EventKind::Error => write!(f, "error"),
            EventKind::System => write!(f, "system"),
        }
    }
}

/// One entry of the run trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionEvent {
    pub kind: EventKind,
    pub text: String,
    /// Source line that produced the event; `None` for system events
    pub line: Option<usize>,
}

impl ExecutionEvent {
    pub fn output(text: impl Into<String>, line: usize) -> Self {
        ExecutionEvent {
            kind: EventKind::Output,
            text: text.into(),
            line: Some(line),
        }
    }

    pub fn error(text: impl Into<String>, line: usize) -> Self {
        ExecutionEvent {
            kind: EventKind::Error,
            text: text.into(),
            line: Some(line),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        ExecutionEvent {
            kind: EventKind::System,
            text: text.into(),
            line: None,
        }
    }
}

/// Ordered event sink for a single run
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<ExecutionEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: ExecutionEvent) {
        self.events.push(event);
    }

    /// Text of every output event, in order
    pub fn output_lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter(|e| e.kind == EventKind::Output)
            .map(|e| e.text.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Move the recorded events out, leaving the log empty
    pub fn take(&mut self) -> Vec<ExecutionEvent> {
        std::mem::take(&mut self.events)
    }
}
