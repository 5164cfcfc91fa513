//! `grover-sim` — Local simulation boundary for Grover circuits.
//!
//! Three result shapes, all produced by single blocking calls:
//!
//! - **Statevector** — exact amplitudes after evolving a circuit or block
//! - **Unitary** — the full 2^N × 2^N matrix of a block or pre-measurement
//!   circuit, built column-by-column from basis states
//! - **Counts** — sampled measurement outcomes over a number of shots
//!
//! The engine supports exactly the gate set the synthesis crates emit
//! (X, H, multi-controlled X); registers are at most 5 qubits wide, so
//! the dense representations stay trivial.
//!
//! # Example
//!
//! ```rust
//! use grover_ir::{Circuit, QubitRegister};
//! use grover_sim::run;
//!
//! let mut circuit = Circuit::new("uniform", QubitRegister::new(2)?);
//! circuit.superpose()?;
//! circuit.measure_all()?;
//!
//! let result = run(&circuit, 1000)?;
//! assert_eq!(result.counts.total(), 1000);
//! # Ok::<(), grover_sim::SimError>(())
//! ```

pub mod error;
pub mod result;
pub mod statevector;
pub mod unitary;

pub use error::{SimError, SimResult};
pub use result::{Counts, ExecutionResult, run};
pub use statevector::Statevector;
pub use unitary::{block_unitary, circuit_unitary};
