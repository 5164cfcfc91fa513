//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::gate::GateOp;
use crate::qubit::{ClbitId, QubitId};

/// The kind of instruction in a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A quantum gate operation.
    Gate(GateOp),
    /// Barrier (synchronization marker, no computational effect).
    Barrier,
    /// Measurement of qubits into classical bits.
    Measure,
}

/// A complete instruction with operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The kind of instruction.
    pub kind: InstructionKind,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
    /// Classical bits this instruction operates on (for measure).
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(op: GateOp) -> Self {
        let qubits = op.qubits();
        Self {
            kind: InstructionKind::Gate(op),
            qubits,
            clbits: vec![],
        }
    }

    /// Create a barrier across the given qubits.
    pub fn barrier(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Barrier,
            qubits: qubits.into_iter().collect(),
            clbits: vec![],
        }
    }

    /// Create a measurement binding each qubit to the same-indexed clbit.
    pub fn measure(
        qubits: impl IntoIterator<Item = QubitId>,
        clbits: impl IntoIterator<Item = ClbitId>,
    ) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: qubits.into_iter().collect(),
            clbits: clbits.into_iter().collect(),
        }
    }

    /// Check if this is a gate instruction.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, InstructionKind::Gate(_))
    }

    /// Check if this is a barrier.
    pub fn is_barrier(&self) -> bool {
        matches!(self.kind, InstructionKind::Barrier)
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self.kind, InstructionKind::Measure)
    }

    /// Get the gate if this is a gate instruction.
    pub fn as_gate(&self) -> Option<&GateOp> {
        match &self.kind {
            InstructionKind::Gate(op) => Some(op),
            _ => None,
        }
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &'static str {
        match &self.kind {
            InstructionKind::Gate(op) => op.name(),
            InstructionKind::Barrier => "barrier",
            InstructionKind::Measure => "measure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_instruction() {
        let inst = Instruction::gate(GateOp::H(QubitId(0)));
        assert!(inst.is_gate());
        assert_eq!(inst.qubits, vec![QubitId(0)]);
        assert_eq!(inst.name(), "h");
    }

    #[test]
    fn test_mcx_instruction_operands() {
        let op = GateOp::mcx(vec![QubitId(0), QubitId(1), QubitId(2)], QubitId(3)).unwrap();
        let inst = Instruction::gate(op);
        assert_eq!(inst.qubits.len(), 4);
        assert_eq!(inst.name(), "mcx");
    }

    #[test]
    fn test_barrier_instruction() {
        let inst = Instruction::barrier([QubitId(0), QubitId(1)]);
        assert!(inst.is_barrier());
        assert_eq!(inst.qubits.len(), 2);
    }

    #[test]
    fn test_measure_instruction() {
        let inst = Instruction::measure([QubitId(0)], [ClbitId(0)]);
        assert!(inst.is_measure());
        assert_eq!(inst.clbits, vec![ClbitId(0)]);
    }
}
