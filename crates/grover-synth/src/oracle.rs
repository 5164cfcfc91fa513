//! Oracle synthesis: phase-flip exactly one marked basis state.
//!
//! The oracle is built from the phase-kickback identity
//!
//!   MCZ = H[target] · MCX · H[target]
//!
//! sandwiched between two layers of X gates that temporarily map the
//! marked pattern onto the all-ones state:
//!
//! 1. X on every qubit whose pattern bit is '0'
//! 2. H on the last qubit
//! 3. one MCX, controls = qubits 0..N-2, target = qubit N-1
//! 4. H on the last qubit
//! 5. X on the same positions as step 1 (X is an involution)
//!
//! Applied to any basis state the block is the identity, except it
//! multiplies the marked state's amplitude by −1.

use grover_ir::{CircuitBlock, GateOp, QubitRegister};
use tracing::debug;

use crate::error::{SynthError, SynthResult};
use crate::pattern::BitPattern;

/// Block label used for every oracle instance.
pub const ORACLE_LABEL: &str = "oracle";

/// Synthesise the oracle block for `pattern` over `register`.
///
/// Fails with [`SynthError::PatternLength`] before any gate is emitted
/// if the pattern does not cover the register exactly.
pub fn oracle_block(register: &QubitRegister, pattern: &BitPattern) -> SynthResult<CircuitBlock> {
    let n = register.width();
    if pattern.len() != n {
        return Err(SynthError::PatternLength {
            expected: n,
            got: pattern.len(),
        });
    }

    let target = register.target();
    let mut ops = Vec::with_capacity(2 * n + 3);

    // Map the marked pattern onto |1...1⟩.
    for i in pattern.zero_positions() {
        ops.push(GateOp::X(register.qubit(i)));
    }

    // Phase-mark |1...1⟩ via kickback on the last qubit.
    ops.push(GateOp::H(target));
    ops.push(GateOp::mcx(register.controls().to_vec(), target)?);
    ops.push(GateOp::H(target));

    // Undo the mapping.
    for i in pattern.zero_positions() {
        ops.push(GateOp::X(register.qubit(i)));
    }

    debug!(
        width = n,
        marked = %pattern,
        gates = ops.len(),
        "synthesised oracle block"
    );

    Ok(CircuitBlock::new(ORACLE_LABEL, register, ops)?)
}
