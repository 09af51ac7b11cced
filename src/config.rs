//! Execution limits
//!
//! Source text cannot change these; only the embedding caller can, either by
//! building an [`ExecutionLimits`] directly or through the CLI flags.

use crate::interpreter::constants::{MAX_EXECUTION_STEPS, MAX_EXECUTION_TIME_MS};
use std::time::Duration;

/// Hard caps applied to a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionLimits {
    /// Maximum number of lines stepped through (blank and comment lines count)
    pub max_steps: usize,
    /// Maximum wall-clock time of a run
    pub max_time: Duration,
}

impl ExecutionLimits {
    pub fn new(max_steps: usize, max_time: Duration) -> Self {
        ExecutionLimits {
            max_steps,
            max_time,
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_max_time_ms(mut self, max_time_ms: u64) -> Self {
        self.max_time = Duration::from_millis(max_time_ms);
        self
    }
}

impl Default for ExecutionLimits {
    fn default() -> Self {
        ExecutionLimits {
            max_steps: MAX_EXECUTION_STEPS,
            max_time: Duration::from_millis(MAX_EXECUTION_TIME_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = ExecutionLimits::default();
        assert_eq!(limits.max_steps, 10_000);
        assert_eq!(limits.max_time, Duration::from_millis(5_000));
    }

    #[test]
    fn test_builders() {
        let limits = ExecutionLimits::default()
            .with_max_steps(3)
            .with_max_time_ms(250);
        assert_eq!(limits, ExecutionLimits::new(3, Duration::from_millis(250)));
    }
}
