//! The circuit composer.
//!
//! A [`Circuit`] is built through a small state machine:
//!
//! ```text
//!   Empty ──superpose()──→ Superposed ──append_round()──→ Amplifying(k)
//!                              │                │   ↺ append_round()
//!                              └────────────────┴──measure_all()──→ Measured
//! ```
//!
//! **Invariants:**
//! - Blocks may only land after the superposition prefix.
//! - `Measured` is terminal: every append afterwards fails with a state
//!   error, never silently.
//! - The instruction stream is exposed read-only; once measured the
//!   circuit is immutable.

use serde::{Deserialize, Serialize};

use crate::block::CircuitBlock;
use crate::error::{IrError, IrResult};
use crate::gate::GateOp;
use crate::instruction::Instruction;
use crate::qubit::{ClbitId, QubitRegister};

/// Composer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// No instructions yet.
    Empty,
    /// Uniform-superposition prefix laid down.
    Superposed,
    /// `k` complete oracle+diffusion rounds appended.
    Amplifying(u32),
    /// Measurement appended; terminal.
    Measured,
}

/// A quantum circuit owning its register for the lifetime of one search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    name: String,
    register: QubitRegister,
    clbits: Vec<ClbitId>,
    instructions: Vec<Instruction>,
    stage: Stage,
    rounds: u32,
}

impl Circuit {
    /// Create an empty circuit over `register`, with one classical bit
    /// per qubit for the terminal measurement.
    pub fn new(name: impl Into<String>, register: QubitRegister) -> Self {
        let clbits = (0..register.width() as u32).map(ClbitId).collect();
        Self {
            name: name.into(),
            register,
            clbits,
            instructions: vec![],
            stage: Stage::Empty,
            rounds: 0,
        }
    }

    /// Apply a Hadamard to every qubit and a barrier: Empty → Superposed.
    pub fn superpose(&mut self) -> IrResult<&mut Self> {
        match self.stage {
            Stage::Empty => {}
            Stage::Measured => return Err(IrError::AppendAfterMeasure),
            _ => return Err(IrError::AlreadySuperposed),
        }
        for q in self.register.iter() {
            self.instructions.push(Instruction::gate(GateOp::H(q)));
        }
        self.instructions
            .push(Instruction::barrier(self.register.iter()));
        self.stage = Stage::Superposed;
        Ok(self)
    }

    /// Append one block's gates followed by a barrier.
    ///
    /// Legal only in `Superposed` or `Amplifying`; the round counter is
    /// advanced by [`Circuit::append_round`], not here.
    pub fn append_block(&mut self, block: &CircuitBlock) -> IrResult<&mut Self> {
        match self.stage {
            Stage::Superposed | Stage::Amplifying(_) => {}
            Stage::Measured => return Err(IrError::AppendAfterMeasure),
            Stage::Empty => return Err(IrError::NotSuperposed),
        }
        for op in block.ops() {
            self.instructions.push(Instruction::gate(op.clone()));
        }
        self.instructions
            .push(Instruction::barrier(self.register.iter()));
        Ok(self)
    }

    /// Append one amplification round: oracle block then diffusion block.
    ///
    /// Superposed / Amplifying(k) → Amplifying(k+1).
    pub fn append_round(
        &mut self,
        oracle: &CircuitBlock,
        diffusion: &CircuitBlock,
    ) -> IrResult<&mut Self> {
        self.append_block(oracle)?;
        self.append_block(diffusion)?;
        self.rounds += 1;
        self.stage = Stage::Amplifying(self.rounds);
        Ok(self)
    }

    /// Bind every qubit to its same-indexed classical bit: → Measured.
    ///
    /// Legal only after the superposition prefix. Terminal transition;
    /// any later append fails.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        match self.stage {
            Stage::Superposed | Stage::Amplifying(_) => {}
            Stage::Measured => return Err(IrError::AppendAfterMeasure),
            Stage::Empty => return Err(IrError::NotSuperposed),
        }
        self.instructions.push(Instruction::measure(
            self.register.iter(),
            self.clbits.iter().copied(),
        ));
        self.stage = Stage::Measured;
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The register this circuit owns.
    pub fn register(&self) -> &QubitRegister {
        &self.register
    }

    /// Current composer stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Number of completed amplification rounds.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.register.width()
    }

    /// Number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// Read-only view of the instruction stream.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of gate instructions (barriers and measures excluded).
    pub fn gate_count(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_gate()).count()
    }

    /// True once the terminal measurement is appended.
    pub fn is_measured(&self) -> bool {
        self.stage == Stage::Measured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::QubitId;

    fn oracle_like(reg: &QubitRegister) -> CircuitBlock {
        CircuitBlock::new("oracle", reg, vec![GateOp::X(QubitId(0))]).unwrap()
    }

    fn diffusion_like(reg: &QubitRegister) -> CircuitBlock {
        CircuitBlock::new("diffusion", reg, vec![GateOp::H(QubitId(0))]).unwrap()
    }

    #[test]
    fn test_superpose_prefix() {
        let reg = QubitRegister::new(3).unwrap();
        let mut circuit = Circuit::new("test", reg);
        assert_eq!(circuit.stage(), Stage::Empty);

        circuit.superpose().unwrap();
        assert_eq!(circuit.stage(), Stage::Superposed);
        // 3 Hadamards + 1 barrier
        assert_eq!(circuit.instructions().len(), 4);
        assert_eq!(circuit.gate_count(), 3);
    }

    #[test]
    fn test_superpose_twice_fails() {
        let reg = QubitRegister::new(2).unwrap();
        let mut circuit = Circuit::new("test", reg);
        circuit.superpose().unwrap();
        assert!(matches!(
            circuit.superpose(),
            Err(IrError::AlreadySuperposed)
        ));
    }

    #[test]
    fn test_append_before_superpose_fails() {
        let reg = QubitRegister::new(2).unwrap();
        let block = oracle_like(&reg);
        let mut circuit = Circuit::new("test", reg);
        assert!(matches!(
            circuit.append_block(&block),
            Err(IrError::NotSuperposed)
        ));
        // Nothing was partially emitted.
        assert!(circuit.instructions().is_empty());
    }

    #[test]
    fn test_measure_before_superpose_fails() {
        let reg = QubitRegister::new(2).unwrap();
        let mut circuit = Circuit::new("test", reg);
        assert!(matches!(
            circuit.measure_all(),
            Err(IrError::NotSuperposed)
        ));
        // The circuit stays Empty and holds no instructions.
        assert_eq!(circuit.stage(), Stage::Empty);
        assert!(circuit.instructions().is_empty());
    }

    #[test]
    fn test_rounds_advance_stage() {
        let reg = QubitRegister::new(2).unwrap();
        let oracle = oracle_like(&reg);
        let diffusion = diffusion_like(&reg);
        let mut circuit = Circuit::new("test", reg);
        circuit.superpose().unwrap();

        circuit.append_round(&oracle, &diffusion).unwrap();
        assert_eq!(circuit.stage(), Stage::Amplifying(1));

        circuit.append_round(&oracle, &diffusion).unwrap();
        assert_eq!(circuit.stage(), Stage::Amplifying(2));
        assert_eq!(circuit.rounds(), 2);
    }

    #[test]
    fn test_measured_is_terminal() {
        let reg = QubitRegister::new(2).unwrap();
        let oracle = oracle_like(&reg);
        let diffusion = diffusion_like(&reg);
        let mut circuit = Circuit::new("test", reg);
        circuit.superpose().unwrap();
        circuit.append_round(&oracle, &diffusion).unwrap();
        circuit.measure_all().unwrap();
        assert!(circuit.is_measured());

        let before = circuit.instructions().len();
        for _ in 0..10 {
            assert!(matches!(
                circuit.append_block(&oracle),
                Err(IrError::AppendAfterMeasure)
            ));
            assert!(matches!(
                circuit.append_round(&oracle, &diffusion),
                Err(IrError::AppendAfterMeasure)
            ));
            assert!(matches!(
                circuit.measure_all(),
                Err(IrError::AppendAfterMeasure)
            ));
        }
        assert_eq!(circuit.instructions().len(), before);
    }

    #[test]
    fn test_serde_round_trip_preserves_stage() {
        let reg = QubitRegister::new(2).unwrap();
        let oracle = oracle_like(&reg);
        let diffusion = diffusion_like(&reg);
        let mut circuit = Circuit::new("roundtrip", reg);
        circuit.superpose().unwrap();
        circuit.append_round(&oracle, &diffusion).unwrap();
        circuit.measure_all().unwrap();

        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circuit);
        assert!(back.is_measured());
    }

    #[test]
    fn test_measure_binds_same_indexed_clbits() {
        let reg = QubitRegister::new(3).unwrap();
        let mut circuit = Circuit::new("test", reg);
        circuit.superpose().unwrap();
        circuit.measure_all().unwrap();

        let measure = circuit.instructions().last().unwrap();
        assert!(measure.is_measure());
        assert_eq!(measure.qubits.len(), 3);
        for (q, c) in measure.qubits.iter().zip(&measure.clbits) {
            assert_eq!(q.0, c.0);
        }
    }
}
