//! Build-time observation hooks.
//!
//! Rendering, matrix dumps, and progress narration live outside the
//! synthesis algorithm. The composer calls these hooks at defined
//! checkpoints; the default implementation does nothing, so the core
//! never pays for diagnostics it does not use.

use grover_ir::{Circuit, CircuitBlock};

/// Checkpoint hooks invoked while a search circuit is composed.
///
/// All methods default to no-ops. Implementors must not mutate the
/// circuit — they receive shared references only.
pub trait SearchObserver {
    /// The oracle template was synthesised.
    fn oracle_built(&mut self, _block: &CircuitBlock) {}

    /// The diffusion template was synthesised.
    fn diffusion_built(&mut self, _block: &CircuitBlock) {}

    /// One oracle+diffusion round landed in the circuit.
    fn round_completed(&mut self, _round: u32, _circuit: &Circuit) {}

    /// The terminal measurement was appended.
    fn measured(&mut self, _circuit: &Circuit) {}
}

/// Observer that ignores every checkpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}
