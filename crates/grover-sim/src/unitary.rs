//! Unitary-matrix extraction.
//!
//! Builds the full 2^N × 2^N matrix of a block or circuit by evolving
//! each computational basis state through the statevector engine; column
//! j of the result is the image of |j⟩. Feasible because the supported
//! registers are at most 5 qubits wide.

use ndarray::Array2;
use num_complex::Complex64;

use grover_ir::{Circuit, CircuitBlock};

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// The unitary matrix of a single block over `num_qubits` qubits.
pub fn block_unitary(block: &CircuitBlock, num_qubits: usize) -> Array2<Complex64> {
    let dim = 1 << num_qubits;
    let mut matrix = Array2::zeros((dim, dim));
    for col in 0..dim {
        let mut sv = Statevector::from_basis(num_qubits, col);
        for op in block.ops() {
            sv.apply_op(op);
        }
        for row in 0..dim {
            matrix[(row, col)] = sv.amplitude(row);
        }
    }
    matrix
}

/// The unitary matrix of a full circuit.
///
/// Fails with [`SimError::NonUnitaryCircuit`] if the circuit contains a
/// measurement; unitary inspection is a pre-measurement diagnostic.
pub fn circuit_unitary(circuit: &Circuit) -> SimResult<Array2<Complex64>> {
    if circuit.instructions().iter().any(|i| i.is_measure()) {
        return Err(SimError::NonUnitaryCircuit);
    }

    let num_qubits = circuit.num_qubits();
    let dim = 1 << num_qubits;
    let mut matrix = Array2::zeros((dim, dim));
    for col in 0..dim {
        let mut sv = Statevector::from_basis(num_qubits, col);
        for inst in circuit.instructions() {
            sv.apply(inst);
        }
        for row in 0..dim {
            matrix[(row, col)] = sv.amplitude(row);
        }
    }
    Ok(matrix)
}
