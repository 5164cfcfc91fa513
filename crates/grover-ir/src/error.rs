//! Error types for the IR crate.
//!
//! Two families of failure exist and callers need to tell them apart:
//!
//! - **Configuration errors** — the inputs can never produce a valid
//!   circuit (register too wide, bad control arity). Raised before any
//!   gate is emitted.
//! - **State errors** — the inputs are fine but the composer state
//!   machine was driven out of order (e.g. appending after measurement).

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Register width outside the supported 2..=5 range.
    #[error(
        "register width {0} is unsupported: the multi-controlled flip \
         primitive covers 2 to 5 qubits"
    )]
    UnsupportedWidth(usize),

    /// Multi-controlled flip with a control count outside 1..=4.
    #[error("multi-controlled flip requires 1 to 4 controls, got {0}")]
    ControlArity(usize),

    /// A qubit appears more than once in a single operation.
    #[error("duplicate qubit {qubit} in multi-controlled flip")]
    DuplicateQubit {
        /// The repeated qubit.
        qubit: QubitId,
    },

    /// Gate references a qubit the register does not contain.
    #[error("qubit {qubit} is out of range for a {width}-qubit register")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the register.
        width: usize,
    },

    /// Block or gate appended to a circuit that is already measured.
    #[error("circuit is already measured; no block may be appended")]
    AppendAfterMeasure,

    /// Block appended before the superposition prefix was laid down.
    #[error("circuit has no superposition prefix; call superpose() first")]
    NotSuperposed,

    /// Superposition prefix applied twice.
    #[error("superposition prefix was already applied")]
    AlreadySuperposed,
}

impl IrError {
    /// True for errors caused by invalid inputs (fail-fast validation).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            IrError::UnsupportedWidth(_)
                | IrError::ControlArity(_)
                | IrError::DuplicateQubit { .. }
                | IrError::QubitOutOfRange { .. }
        )
    }

    /// True for errors caused by misuse of the composer state machine.
    pub fn is_state(&self) -> bool {
        matches!(
            self,
            IrError::AppendAfterMeasure | IrError::NotSuperposed | IrError::AlreadySuperposed
        )
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
