//! Reusable, named gate sequences.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::GateOp;
use crate::qubit::QubitRegister;

/// An ordered, immutable sequence of gates forming one logical phase of
/// the algorithm (the oracle or the diffusion operator).
///
/// Blocks are stateless templates: the same block may be appended to a
/// circuit any number of times. When appended, the circuit places a
/// barrier after the block's gates so external tooling can see where one
/// phase ends and the next begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitBlock {
    label: String,
    ops: Vec<GateOp>,
}

impl CircuitBlock {
    /// Create a block from a finished gate sequence.
    ///
    /// Every gate is checked against the register, so a block can never
    /// reference a qubit its circuit does not own.
    pub fn new(
        label: impl Into<String>,
        register: &QubitRegister,
        ops: Vec<GateOp>,
    ) -> IrResult<Self> {
        for op in &ops {
            for q in op.qubits() {
                if !register.contains(q) {
                    return Err(IrError::QubitOutOfRange {
                        qubit: q,
                        width: register.width(),
                    });
                }
            }
        }
        Ok(Self {
            label: label.into(),
            ops,
        })
    }

    /// The block's label ("oracle", "diffusion", ...).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of gates in the block.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True if the block holds no gates.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Read-only iteration over the gates.
    pub fn ops(&self) -> impl Iterator<Item = &GateOp> {
        self.ops.iter()
    }
}

impl fmt::Display for CircuitBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} gates)", self.label, self.ops.len())
    }
}
