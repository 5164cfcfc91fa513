//! Statevector simulation engine.
//!
//! Dense amplitude vector over 2^n basis states with in-place gate
//! kernels for the three primitives the synthesis crates emit. Barriers
//! and measurements have no effect on the vector; sampling reads the
//! squared amplitudes.

use num_complex::Complex64;

use grover_ir::{GateOp, Instruction, InstructionKind};

/// A statevector representing a quantum state.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        Self::from_basis(num_qubits, 0)
    }

    /// Create a statevector initialized to the given basis state.
    ///
    /// # Panics
    ///
    /// Panics if `basis_index >= 2^num_qubits`.
    pub fn from_basis(num_qubits: usize, basis_index: usize) -> Self {
        let size = 1 << num_qubits;
        assert!(basis_index < size, "basis index out of range");
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[basis_index] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The amplitude of a basis state.
    pub fn amplitude(&self, basis_index: usize) -> Complex64 {
        self.amplitudes[basis_index]
    }

    /// All amplitudes, basis-index order.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Measurement probability of a basis state.
    pub fn probability(&self, basis_index: usize) -> f64 {
        self.amplitudes[basis_index].norm_sqr()
    }

    /// Apply an instruction to the statevector.
    pub fn apply(&mut self, instruction: &Instruction) {
        match &instruction.kind {
            InstructionKind::Gate(op) => self.apply_op(op),
            // Neither touches the amplitudes in simulation.
            InstructionKind::Barrier | InstructionKind::Measure => {}
        }
    }

    /// Apply a single gate primitive.
    pub fn apply_op(&mut self, op: &GateOp) {
        match op {
            GateOp::X(q) => self.apply_x(q.0 as usize),
            GateOp::H(q) => self.apply_h(q.0 as usize),
            GateOp::Mcx { controls, target } => {
                let ctrl_mask = controls
                    .iter()
                    .fold(0usize, |mask, c| mask | (1 << c.0 as usize));
                self.apply_mcx(ctrl_mask, target.0 as usize);
            }
        }
    }

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_mcx(&mut self, ctrl_mask: usize, target: usize) {
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask == ctrl_mask) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Sample a measurement outcome (a basis-state index).
    pub fn sample(&self) -> usize {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }

        // Fallback (shouldn't happen with normalized states)
        self.amplitudes.len() - 1
    }

    /// Convert a measurement outcome to an MSB-first bitstring.
    ///
    /// Qubit N−1 is the leftmost character, so the string compares
    /// directly against the user-supplied pattern.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_qubits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grover_ir::QubitId;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitude(0), Complex64::new(1.0, 0.0)));
        for i in 1..4 {
            assert!(approx_eq(sv.amplitude(i), Complex64::new(0.0, 0.0)));
        }
    }

    #[test]
    fn test_x_gate() {
        let mut sv = Statevector::new(1);
        sv.apply_op(&GateOp::X(QubitId(0)));
        assert!(approx_eq(sv.amplitude(0), Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitude(1), Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply_op(&GateOp::H(QubitId(0)));

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitude(0), Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitude(1), Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_hadamard_is_involution() {
        let mut sv = Statevector::from_basis(3, 0b101);
        for q in 0..3 {
            sv.apply_op(&GateOp::H(QubitId(q)));
        }
        for q in 0..3 {
            sv.apply_op(&GateOp::H(QubitId(q)));
        }
        assert!(approx_eq(sv.amplitude(0b101), Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_mcx_fires_only_on_all_ones_controls() {
        let mcx = GateOp::mcx(vec![QubitId(0), QubitId(1)], QubitId(2)).unwrap();

        // Controls |11⟩: target flips.
        let mut sv = Statevector::from_basis(3, 0b011);
        sv.apply_op(&mcx);
        assert!(approx_eq(sv.amplitude(0b111), Complex64::new(1.0, 0.0)));

        // One control low: nothing happens.
        let mut sv = Statevector::from_basis(3, 0b001);
        sv.apply_op(&mcx);
        assert!(approx_eq(sv.amplitude(0b001), Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_barrier_and_measure_leave_state_alone() {
        let mut sv = Statevector::from_basis(2, 0b10);
        sv.apply(&Instruction::barrier([QubitId(0), QubitId(1)]));
        assert!(approx_eq(sv.amplitude(0b10), Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_sample_deterministic() {
        // |1⟩ state should always sample to 1.
        let mut sv = Statevector::new(1);
        sv.apply_op(&GateOp::X(QubitId(0)));
        for _ in 0..100 {
            assert_eq!(sv.sample(), 1);
        }
    }

    #[test]
    fn test_bitstring_is_msb_first() {
        let sv = Statevector::new(4);
        assert_eq!(sv.outcome_to_bitstring(0b0101), "0101");
        assert_eq!(sv.outcome_to_bitstring(1), "0001");
    }
}
