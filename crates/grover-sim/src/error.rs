//! Error types for the simulation crate.

use thiserror::Error;

/// Errors produced by the local simulation engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Sampling requested on a circuit without a terminal measurement.
    #[error("circuit has no measurement; sampling needs a measured circuit")]
    UnmeasuredCircuit,

    /// Unitary extraction requested on a circuit containing a measurement.
    #[error("circuit contains a measurement; unitary extraction needs the pre-measurement circuit")]
    NonUnitaryCircuit,

    /// Zero shots requested.
    #[error("shots must be at least 1, got 0")]
    ZeroShots,

    /// Circuit IR error.
    #[error("circuit IR error: {0}")]
    Ir(#[from] grover_ir::IrError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
