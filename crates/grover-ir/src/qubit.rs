//! Qubit and classical bit types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// Smallest register the synthesis algorithm accepts.
pub const MIN_WIDTH: usize = 2;

/// Largest register the synthesis algorithm accepts.
///
/// The multi-controlled flip primitive takes at most 4 controls plus one
/// target; wider registers would need an ancilla-based decomposition.
pub const MAX_WIDTH: usize = 5;

/// Unique identifier for a qubit within a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// Unique identifier for a classical bit within a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClbitId(pub u32);

impl fmt::Display for ClbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl From<u32> for ClbitId {
    fn from(id: u32) -> Self {
        ClbitId(id)
    }
}

/// An ordered, fixed-size collection of qubit slots.
///
/// Index 0 is the least-significant qubit; the last slot is the target of
/// every multi-controlled flip emitted by the builders. The register is
/// immutable once created and is validated at construction, so every
/// downstream builder can assume a legal width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QubitRegister {
    qubits: Vec<QubitId>,
}

impl QubitRegister {
    /// Create a register of `width` qubits, ids 0..width.
    ///
    /// Fails with [`IrError::UnsupportedWidth`] outside 2..=5.
    pub fn new(width: usize) -> IrResult<Self> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
            return Err(IrError::UnsupportedWidth(width));
        }
        Ok(Self {
            qubits: (0..width as u32).map(QubitId).collect(),
        })
    }

    /// Number of qubit slots.
    pub fn width(&self) -> usize {
        self.qubits.len()
    }

    /// The qubit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= width()`; the register width is fixed at
    /// construction so callers index with loop bounds from `width()`.
    pub fn qubit(&self, index: usize) -> QubitId {
        self.qubits[index]
    }

    /// The last qubit, target of the multi-controlled flip.
    pub fn target(&self) -> QubitId {
        // width >= 2 is guaranteed by construction
        *self.qubits.last().expect("register is never empty")
    }

    /// All qubits except the last, in order: the control lines.
    pub fn controls(&self) -> &[QubitId] {
        &self.qubits[..self.qubits.len() - 1]
    }

    /// Iterate over all qubit slots in order.
    pub fn iter(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.qubits.iter().copied()
    }

    /// All qubit slots as a slice.
    pub fn as_slice(&self) -> &[QubitId] {
        &self.qubits
    }

    /// True if the register contains `qubit`.
    pub fn contains(&self, qubit: QubitId) -> bool {
        (qubit.0 as usize) < self.qubits.len()
    }
}

impl fmt::Display for QubitRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q[0..{}]", self.qubits.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_bounds() {
        assert!(QubitRegister::new(1).is_err());
        assert!(QubitRegister::new(6).is_err());
        for width in MIN_WIDTH..=MAX_WIDTH {
            assert!(QubitRegister::new(width).is_ok());
        }
    }

    #[test]
    fn test_register_width_error_is_configuration() {
        let err = QubitRegister::new(9).unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(err, IrError::UnsupportedWidth(9)));
    }

    #[test]
    fn test_register_ordering() {
        let reg = QubitRegister::new(4).unwrap();
        assert_eq!(reg.width(), 4);
        assert_eq!(reg.qubit(0), QubitId(0));
        assert_eq!(reg.target(), QubitId(3));
        assert_eq!(reg.controls(), &[QubitId(0), QubitId(1), QubitId(2)]);
    }

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", QubitId(0)), "q0");
        assert_eq!(format!("{}", ClbitId(3)), "c3");
    }
}
