//! Grover Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing Grover
//! search circuits: an addressable qubit register, a three-primitive gate
//! library (bit-flip, Hadamard, multi-controlled flip), reusable circuit
//! blocks, and the circuit composer state machine.
//!
//! # Overview
//!
//! The synthesis crates build [`CircuitBlock`] values (the oracle and the
//! diffusion operator) and compose them into a [`Circuit`] through a
//! strict state machine: superposition prefix, then amplification rounds,
//! then a terminal measurement. Once measured, a circuit is immutable and
//! exposes its instruction stream read-only to simulators and renderers.
//!
//! # Core Components
//!
//! - **Register**: [`QubitRegister`] — ordered qubit slots, width 2..=5
//! - **Gates**: [`GateOp`] — X, H, and the parameterized MCX primitive
//! - **Blocks**: [`CircuitBlock`] — named, stateless gate-sequence templates
//! - **Instructions**: [`Instruction`] — gates, barriers, measurement
//! - **Circuit**: [`Circuit`] and its [`Stage`] state machine
//!
//! # Example
//!
//! ```rust
//! use grover_ir::{Circuit, CircuitBlock, GateOp, QubitId, QubitRegister, Stage};
//!
//! let register = QubitRegister::new(2)?;
//! let phase_mark = CircuitBlock::new(
//!     "oracle",
//!     &register,
//!     vec![
//!         GateOp::H(QubitId(1)),
//!         GateOp::mcx(vec![QubitId(0)], QubitId(1))?,
//!         GateOp::H(QubitId(1)),
//!     ],
//! )?;
//! let mirror = CircuitBlock::new("diffusion", &register, vec![])?;
//!
//! let mut circuit = Circuit::new("search", register);
//! circuit.superpose()?;
//! circuit.append_round(&phase_mark, &mirror)?;
//! circuit.measure_all()?;
//!
//! assert_eq!(circuit.stage(), Stage::Measured);
//! assert_eq!(circuit.rounds(), 1);
//! # Ok::<(), grover_ir::IrError>(())
//! ```

pub mod block;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use block::CircuitBlock;
pub use circuit::{Circuit, Stage};
pub use error::{IrError, IrResult};
pub use gate::{GateOp, MAX_CONTROLS};
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, MAX_WIDTH, MIN_WIDTH, QubitId, QubitRegister};
