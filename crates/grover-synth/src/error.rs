//! Error types for the synthesis crate.

use thiserror::Error;

/// Errors produced by oracle/diffusion synthesis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Pattern length does not match the register width.
    #[error("bit pattern has {got} characters but the register has {expected} qubits")]
    PatternLength {
        /// Register width.
        expected: usize,
        /// Pattern length supplied.
        got: usize,
    },

    /// Pattern contains a character outside {'0','1'}.
    #[error("bit pattern may only contain '0' and '1', found {found:?} at index {index}")]
    InvalidPatternChar {
        /// Position of the offending character (MSB-first, as supplied).
        index: usize,
        /// The character found.
        found: char,
    },

    /// Circuit IR error.
    #[error("circuit IR error: {0}")]
    Ir(#[from] grover_ir::IrError),
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
