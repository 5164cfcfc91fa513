//! The marked bit-string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SynthError, SynthResult};

/// The single marked basis state, as a bit-string.
///
/// The user supplies the pattern MSB-first ("0101" marks |0101⟩). It is
/// stored reversed so that `bit(i)` aligns with qubit *i* of the register:
/// index 0 of the register corresponds to the last character of the
/// pattern. `Display` renders it back MSB-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitPattern {
    /// bits[i] is the value of qubit i (LSB-first).
    bits: Vec<bool>,
}

impl BitPattern {
    /// Parse an MSB-first bit-string.
    ///
    /// Fails with [`SynthError::InvalidPatternChar`] on anything outside
    /// {'0','1'}. Length is checked later against a concrete register by
    /// the oracle builder, which knows the width.
    pub fn parse(s: &str) -> SynthResult<Self> {
        let mut bits = Vec::with_capacity(s.len());
        for (index, ch) in s.chars().enumerate() {
            match ch {
                '0' => bits.push(false),
                '1' => bits.push(true),
                found => return Err(SynthError::InvalidPatternChar { index, found }),
            }
        }
        bits.reverse();
        Ok(Self { bits })
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if the pattern is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Value of qubit `i` (LSB-first indexing).
    pub fn bit(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// Indices of qubits the pattern marks as '0'.
    ///
    /// These are the positions the oracle temporarily flips so the marked
    /// pattern maps onto the all-ones state.
    pub fn zero_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| !b)
            .map(|(i, _)| i)
    }

    /// The computational-basis index of the marked state.
    pub fn basis_index(&self) -> usize {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .fold(0, |acc, (i, _)| acc | (1 << i))
    }
}

impl FromStr for BitPattern {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.bits.iter().rev() {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reverses_for_register_alignment() {
        let p = BitPattern::parse("0101").unwrap();
        // MSB-first "0101": qubit 0 holds the last character.
        assert!(p.bit(0));
        assert!(!p.bit(1));
        assert!(p.bit(2));
        assert!(!p.bit(3));
    }

    #[test]
    fn test_basis_index() {
        assert_eq!(BitPattern::parse("0101").unwrap().basis_index(), 0b0101);
        assert_eq!(BitPattern::parse("11").unwrap().basis_index(), 3);
        assert_eq!(BitPattern::parse("00000").unwrap().basis_index(), 0);
    }

    #[test]
    fn test_zero_positions() {
        let p = BitPattern::parse("0101").unwrap();
        let zeros: Vec<_> = p.zero_positions().collect();
        // '0' characters sit at qubits 1 and 3 after reversal.
        assert_eq!(zeros, vec![1, 3]);
    }

    #[test]
    fn test_invalid_char_rejected() {
        let err = BitPattern::parse("01a1").unwrap_err();
        assert!(matches!(
            err,
            SynthError::InvalidPatternChar {
                index: 2,
                found: 'a'
            }
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for s in ["01", "110", "0101", "10011"] {
            assert_eq!(BitPattern::parse(s).unwrap().to_string(), s);
        }
    }
}
