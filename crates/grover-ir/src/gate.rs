//! The gate primitive library.
//!
//! Three reversible primitives are enough to synthesise a Grover circuit
//! for a single marked state: the bit-flip, the Hadamard, and one
//! parameterized multi-controlled flip. Every primitive is an involution,
//! which the diffusion builder exploits for its mirrored structure.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// Maximum number of control lines on a multi-controlled flip.
pub const MAX_CONTROLS: usize = 4;

/// An atomic reversible operation on one or more qubit slots.
///
/// Immutable once constructed. The multi-controlled variant is built
/// through [`GateOp::mcx`], which validates the control arity; the enum
/// therefore never holds an unsupported gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateOp {
    /// Pauli-X bit flip.
    X(QubitId),
    /// Hadamard.
    H(QubitId),
    /// Multi-controlled bit flip: flips `target` iff all `controls` are |1⟩.
    Mcx {
        /// Ordered control lines, 1 to 4 of them.
        controls: Vec<QubitId>,
        /// The flipped qubit.
        target: QubitId,
    },
}

impl GateOp {
    /// Build a multi-controlled flip.
    ///
    /// Fails with [`IrError::ControlArity`] unless there are 1..=4
    /// controls, and with [`IrError::DuplicateQubit`] if the target
    /// appears among the controls or a control repeats.
    pub fn mcx(controls: impl Into<Vec<QubitId>>, target: QubitId) -> IrResult<Self> {
        let controls = controls.into();
        if controls.is_empty() || controls.len() > MAX_CONTROLS {
            return Err(IrError::ControlArity(controls.len()));
        }
        for (i, &c) in controls.iter().enumerate() {
            if c == target || controls[..i].contains(&c) {
                return Err(IrError::DuplicateQubit { qubit: c });
            }
        }
        Ok(GateOp::Mcx { controls, target })
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateOp::X(_) => "x",
            GateOp::H(_) => "h",
            GateOp::Mcx { .. } => "mcx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        match self {
            GateOp::X(_) | GateOp::H(_) => 1,
            GateOp::Mcx { controls, .. } => controls.len() + 1,
        }
    }

    /// All qubits touched by this gate, controls first.
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            GateOp::X(q) | GateOp::H(q) => vec![*q],
            GateOp::Mcx { controls, target } => {
                let mut qs = controls.clone();
                qs.push(*target);
                qs
            }
        }
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateOp::X(q) => write!(f, "x {q}"),
            GateOp::H(q) => write!(f, "h {q}"),
            GateOp::Mcx { controls, target } => {
                write!(f, "mcx ")?;
                for c in controls {
                    write!(f, "{c} ")?;
                }
                write!(f, "-> {target}")
            }
        }
    }
}
