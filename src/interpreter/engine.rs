// Execution engine for the pseudocode evaluator

use crate::config::ExecutionLimits;
use crate::events::{EventKind, EventLog, ExecutionEvent};
use crate::interpreter::errors::RuntimeFault;
use crate::memory::variables::VariableTable;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Result of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResponse {
    pub success: bool,
    pub events: Vec<ExecutionEvent>,
    /// Wall-clock duration of the run in fractional milliseconds
    pub execution_time_ms: f64,
}

impl ExecuteResponse {
    /// Text of every output event, in order
    pub fn output_lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter(|e| e.kind == EventKind::Output)
            .map(|e| e.text.as_str())
            .collect()
    }

    /// The terminal error event, if the run faulted
    pub fn error(&self) -> Option<&ExecutionEvent> {
        self.events.iter().find(|e| e.kind == EventKind::Error)
    }
}

/// The line-by-line evaluator
///
/// All state is owned by the instance and cleared at the start of every
/// [`run`](Interpreter::run), so a reused instance never leaks bindings from
/// one run into the next. Runs take `&mut self`; sharing an instance across
/// threads requires external locking.
#[derive(Debug, Default)]
pub struct Interpreter {
    /// Safety caps for each run
    pub(super) limits: ExecutionLimits,

    /// Variables and constants bound so far
    pub(super) variables: VariableTable,

    /// Events emitted so far
    pub(super) log: EventLog,

    /// 1-based line being executed
    current_line: usize,

    /// Lines stepped through, including skipped ones
    steps: usize,

    /// Instant the running program must finish by
    pub(super) deadline: Option<Instant>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ExecutionLimits) -> Self {
        Interpreter {
            limits,
            ..Self::default()
        }
    }

    /// Bindings left behind by the most recent run
    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Number of lines stepped through by the most recent run
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Line the most recent run stopped on (0 before any run)
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    fn reset(&mut self) {
        self.variables.clear();
        self.log.clear();
        self.current_line = 0;
        self.steps = 0;
        self.deadline = None;
    }

    /// Fault once the run's wall-clock budget is spent
    ///
    /// Checked before every line and on every operator split within a line,
    /// so a single long expression cannot outlive the cap.
    pub(super) fn check_deadline(&self, line: usize) -> Result<(), RuntimeFault> {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                Err(RuntimeFault::TimeLimitExceeded { line })
            }
            _ => Ok(()),
        }
    }

    /// Run a whole program
    ///
    /// Never fails: a runtime fault halts the run and is reported as the final
    /// `error` event with `success = false`.
    pub fn run(&mut self, source: &str) -> ExecuteResponse {
        let started = Instant::now();
        self.reset();
        self.deadline = started.checked_add(self.limits.max_time);

        if source.trim().is_empty() {
            self.log.push(ExecutionEvent::system("No code to execute"));
            return self.finish(false, started);
        }

        tracing::debug!(
            max_steps = self.limits.max_steps,
            max_time_ms = self.limits.max_time.as_millis() as u64,
            "run started"
        );

        match self.run_lines(source) {
            Ok(()) => {
                let elapsed_ms = started.elapsed().as_millis();
                self.log.push(ExecutionEvent::system(format!(
                    "Program finished (execution time: {}ms)",
                    elapsed_ms
                )));
                tracing::debug!(steps = self.steps, "run finished");
                self.finish(true, started)
            }
            Err(fault) => {
                tracing::debug!(line = fault.line(), %fault, "run halted");
                self.log
                    .push(ExecutionEvent::error(fault.event_text(), fault.line()));
                self.finish(false, started)
            }
        }
    }

    fn run_lines(&mut self, source: &str) -> Result<(), RuntimeFault> {
        for (index, raw) in source.split('\n').enumerate() {
            let line_number = index + 1;
            self.current_line = line_number;
            self.steps += 1;

            if self.steps > self.limits.max_steps {
                return Err(RuntimeFault::StepLimitExceeded { line: line_number });
            }
            self.check_deadline(line_number)?;

            let line = raw.trim();
            if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
                continue;
            }

            self.execute_line(line, line_number)?;
        }
        Ok(())
    }

    fn finish(&mut self, success: bool, started: Instant) -> ExecuteResponse {
        ExecuteResponse {
            success,
            events: self.log.take(),
            execution_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        }
    }
}

/// Run `source` on a fresh interpreter with the default limits
pub fn execute(source: &str) -> ExecuteResponse {
    Interpreter::new().run(source)
}

/// Run `source` on a fresh interpreter with caller-chosen limits
pub fn execute_with_limits(source: &str, limits: ExecutionLimits) -> ExecuteResponse {
    Interpreter::with_limits(limits).run(source)
}
