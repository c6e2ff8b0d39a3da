//! Generator error types.

use thiserror::Error;

/// Contract violations surfaced by the generator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenError {
    /// Split count must be positive
    #[error("Split count must be at least 1")]
    InvalidSplitCount,

    /// Fraction range outside [0, 1) semantics
    #[error("Invalid fraction range [{lo}, {hi}): must satisfy 0.0 <= lo < hi <= 1.0")]
    InvalidFractionRange { lo: f64, hi: f64 },

    /// Completed count larger than the quantity being split
    #[error("Completed count {completed} exceeds total {total}")]
    CompletedExceedsTotal { completed: u64, total: u64 },

    /// Configuration rejected during validation
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}
