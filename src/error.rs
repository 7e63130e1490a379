//! Error type shared by every solver and adapter in the crate.

use thiserror::Error;

/// Errors reported to callers of the solvers and their input adapters.
///
/// Internal invariant violations (for example an odd number of odd-degree
/// vertices) are not represented here: they panic, since they indicate a
/// defect rather than bad input.
#[derive(Debug, Error)]
pub enum TspError {
    /// Fewer than two points or cities were supplied.
    #[error("at least 2 points are required, got {0}")]
    TooFewPoints(usize),

    /// Two points share the same identifier.
    #[error("duplicate point id {0}")]
    DuplicateId(usize),

    /// A point has a NaN or infinite coordinate.
    #[error("point {id} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// Offending point identifier.
        id: usize,
        /// First coordinate.
        x: f64,
        /// Second coordinate.
        y: f64,
    },

    /// Explicit matrix data does not hold `size * size` entries.
    #[error("distance matrix data has {actual} entries, expected {expected}")]
    MatrixShape {
        /// Required entry count.
        expected: usize,
        /// Supplied entry count.
        actual: usize,
    },

    /// A matrix entry is negative or not finite.
    #[error("invalid distance {value} at ({from}, {to})")]
    InvalidDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// Offending value.
        value: f64,
    },

    /// An explicit matrix is not symmetric.
    #[error("distance matrix is not symmetric at ({from}, {to}): {forward} vs {backward}")]
    AsymmetricDistance {
        /// Row index of the first mismatch.
        from: usize,
        /// Column index of the first mismatch.
        to: usize,
        /// `d(from, to)`.
        forward: f64,
        /// `d(to, from)`.
        backward: f64,
    },

    /// The exact solver cannot represent (or was configured to refuse) this many cities.
    #[error("exact solver accepts at most {max} cities, got {n}")]
    TooManyCities {
        /// Number of cities requested.
        n: usize,
        /// Configured limit.
        max: usize,
    },

    /// A cancellation flag was raised while a solver was running.
    #[error("solver cancelled")]
    Cancelled,

    /// A solver or simulation configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading an input file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serializing a report failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A point file row could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
