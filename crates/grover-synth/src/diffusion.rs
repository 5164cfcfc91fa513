//! Diffusion synthesis: inversion about the mean.
//!
//! The block implements `I − 2|s⟩⟨s|`, the reflection about the uniform
//! superposition |s⟩ up to a global phase of −1. The phase is
//! unobservable, so the amplification behaviour is identical to the
//! textbook `2|s⟩⟨s| − I` form. Structurally the block is a palindrome
//! around the central multi-controlled flip:
//!
//!   H⊗ⁿ · X⊗ⁿ · H[last] · MCX · H[last] · X⊗ⁿ · H⊗ⁿ
//!
//! Every primitive involved is an involution, so the mirrored halves undo
//! each other's basis changes and leave only the reflection behind.

use grover_ir::{CircuitBlock, GateOp, QubitRegister};
use tracing::debug;

use crate::error::SynthResult;

/// Block label used for every diffusion instance.
pub const DIFFUSION_LABEL: &str = "diffusion";

/// Synthesise the diffusion block over `register`.
///
/// The block's matrix is `I − 2|s⟩⟨s|` (the reflection about the mean,
/// carrying a global phase of −1).
pub fn diffusion_block(register: &QubitRegister) -> SynthResult<CircuitBlock> {
    let n = register.width();
    let target = register.target();
    let mut ops = Vec::with_capacity(4 * n + 3);

    for q in register.iter() {
        ops.push(GateOp::H(q));
    }
    for q in register.iter() {
        ops.push(GateOp::X(q));
    }

    ops.push(GateOp::H(target));
    ops.push(GateOp::mcx(register.controls().to_vec(), target)?);
    ops.push(GateOp::H(target));

    for q in register.iter() {
        ops.push(GateOp::X(q));
    }
    for q in register.iter() {
        ops.push(GateOp::H(q));
    }

    debug!(width = n, gates = ops.len(), "synthesised diffusion block");

    Ok(CircuitBlock::new(DIFFUSION_LABEL, register, ops)?)
}
