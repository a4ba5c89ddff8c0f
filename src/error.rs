//! Crate-wide error type.
//!
//! Distinguishes recoverable per-request failures (`InvalidInput`,
//! `NoLineAvailable`) from fatal configuration errors detected at
//! registry load time (`DuplicateLineId`, `LineNotFound`).

use thiserror::Error;

/// Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors produced by the simulation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A request field is out of its valid domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration references a line id that does not exist.
    /// Fatal at load time, never surfaced per request.
    #[error("production line '{0}' not found")]
    LineNotFound(String),

    /// No eligible line exists for a product.
    #[error("no production line available for product '{0}'")]
    NoLineAvailable(String),

    /// Two catalog entries share the same line id. Fatal at load time.
    #[error("duplicate production line id '{0}'")]
    DuplicateLineId(String),
}

impl SimulationError {
    /// Whether this error is fatal at configuration load time
    /// rather than recoverable within a request.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SimulationError::DuplicateLineId(_) | SimulationError::LineNotFound(_)
        )
    }
}
