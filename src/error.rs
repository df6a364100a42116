//! Error types for matrix loading, search and benchmarking.

use thiserror::Error;

/// Why a search stopped before its frontier was exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interruption {
    /// The caller raised the cancellation flag.
    Cancelled,
    /// The configured time limit elapsed.
    TimeLimit,
    /// The configured limit on popped states was reached.
    NodeLimit,
}

impl std::fmt::Display for Interruption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interruption::Cancelled => f.write_str("cancelled"),
            Interruption::TimeLimit => f.write_str("time limit exceeded"),
            Interruption::NodeLimit => f.write_str("node limit exceeded"),
        }
    }
}

/// Errors produced by this crate.
#[derive(Error, Debug)]
pub enum TspError {
    /// A matrix row does not have exactly `expected` entries.
    #[error("cost matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A matrix entry is negative.
    #[error("negative cost {value} at ({row}, {col})")]
    NegativeCost { row: usize, col: usize, value: i64 },

    /// Costs are large enough that a tour sum could overflow.
    #[error("cost {max_cost} is too large for a {n}-location tour")]
    CostOverflow { n: usize, max_cost: u64 },

    /// The declared location count disagrees with the matrix.
    #[error("expected {expected} locations, cost matrix has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Malformed text input.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The search was aborted; no complete answer was produced.
    #[error("search interrupted ({reason}) after {states_popped} states")]
    Interrupted {
        reason: Interruption,
        states_popped: u64,
    },
}

/// Result type for fallible operations in this crate.
pub type TspResult<T> = Result<T, TspError>;
