// Constants for the pseudocode evaluator

/// Default step cap; every physical line is one step
pub const MAX_EXECUTION_STEPS: usize = 10_000;

/// Default wall-clock cap in milliseconds
pub const MAX_EXECUTION_TIME_MS: u64 = 5_000;

/// Divisors with a smaller magnitude than this count as zero for `/`
pub const DIVISION_EPSILON: f64 = 1e-7;
