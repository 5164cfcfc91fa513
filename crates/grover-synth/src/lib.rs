//! `grover-synth` — Grover search circuit synthesis.
//!
//! Translates a marked bit-string into a `grover_ir::Circuit` that
//! amplifies the marked state's amplitude:
//!
//! - **Oracle builder** — phase-flips exactly the marked basis state
//! - **Diffusion builder** — reflection about the uniform superposition
//! - **Planner** — `floor(π/4·√(2ⁿ))` amplification rounds
//! - **Composer** — superposition prefix, rounds, terminal measurement
//!
//! The resulting circuits are pure data; rendering and matrix inspection
//! attach from outside through [`SearchObserver`] checkpoints.
//!
//! # Quick start
//!
//! ```rust
//! use grover_synth::GroverSearch;
//!
//! let circuit = GroverSearch::new(4, "0101")?.build()?;
//! assert_eq!(circuit.num_qubits(), 4);
//! assert_eq!(circuit.rounds(), 3);
//! # Ok::<(), grover_synth::SynthError>(())
//! ```

pub mod diffusion;
pub mod error;
pub mod observer;
pub mod oracle;
pub mod pattern;
pub mod planner;
pub mod search;

pub use diffusion::diffusion_block;
pub use error::{SynthError, SynthResult};
pub use observer::{NullObserver, SearchObserver};
pub use oracle::oracle_block;
pub use pattern::BitPattern;
pub use planner::optimal_iterations;
pub use search::GroverSearch;
