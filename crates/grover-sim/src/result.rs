//! Measurement sampling and outcome counts.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

use grover_ir::Circuit;

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Mapping from bit-string outcome to observation count.
///
/// Keys are MSB-first, so a key compares directly against the pattern
/// string the search was configured with.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty counts map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `n` observations of `outcome`.
    pub fn insert(&mut self, outcome: impl Into<String>, n: u64) {
        *self.counts.entry(outcome.into()).or_insert(0) += n;
    }

    /// Observations of one outcome (0 if never seen).
    pub fn get(&self, outcome: &str) -> u64 {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The modal outcome, ties broken by bit-string order.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(k, &v)| (k.as_str(), v))
    }

    /// Outcomes sorted by descending count, then bit-string order.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Iterate over (outcome, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// The outcome distribution of one sampled execution.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    /// Sampled outcome counts.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds.
    pub execution_time_ms: u64,
}

impl ExecutionResult {
    /// Observed frequency of one outcome in [0, 1].
    pub fn frequency(&self, outcome: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.counts.get(outcome) as f64 / f64::from(self.shots)
    }
}

/// Execute a measured circuit `shots` times and collect outcome counts.
///
/// A single blocking call: evolves the statevector once and samples the
/// terminal measurement per shot. Fails with
/// [`SimError::UnmeasuredCircuit`] unless the composer reached its
/// terminal state.
pub fn run(circuit: &Circuit, shots: u32) -> SimResult<ExecutionResult> {
    if !circuit.is_measured() {
        return Err(SimError::UnmeasuredCircuit);
    }
    if shots == 0 {
        return Err(SimError::ZeroShots);
    }

    let start = Instant::now();
    let num_qubits = circuit.num_qubits();
    debug!(num_qubits, shots, "starting sampled simulation");

    // The circuit is pure up to the terminal measurement, so one
    // statevector evolution serves every shot.
    let mut sv = Statevector::new(num_qubits);
    for inst in circuit.instructions() {
        sv.apply(inst);
    }

    let mut counts = Counts::new();
    for _ in 0..shots {
        let outcome = sv.sample();
        counts.insert(sv.outcome_to_bitstring(outcome), 1);
    }

    let elapsed = start.elapsed();
    debug!(?elapsed, outcomes = counts.len(), "simulation completed");

    Ok(ExecutionResult {
        counts,
        shots,
        execution_time_ms: elapsed.as_millis() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grover_ir::QubitRegister;

    #[test]
    fn test_counts_accumulate() {
        let mut counts = Counts::new();
        counts.insert("01", 1);
        counts.insert("01", 2);
        counts.insert("10", 1);

        assert_eq!(counts.get("01"), 3);
        assert_eq!(counts.get("00"), 0);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.most_frequent(), Some(("01", 3)));
    }

    #[test]
    fn test_sorted_is_descending() {
        let mut counts = Counts::new();
        counts.insert("00", 5);
        counts.insert("11", 20);
        counts.insert("01", 1);
        let sorted = counts.sorted();
        assert_eq!(sorted[0], ("11", 20));
        assert_eq!(sorted[2], ("01", 1));
    }

    #[test]
    fn test_run_rejects_unmeasured_circuit() {
        let reg = QubitRegister::new(2).unwrap();
        let mut circuit = Circuit::new("open", reg);
        circuit.superpose().unwrap();
        assert!(matches!(
            run(&circuit, 100),
            Err(SimError::UnmeasuredCircuit)
        ));
    }

    #[test]
    fn test_run_rejects_zero_shots() {
        let reg = QubitRegister::new(2).unwrap();
        let mut circuit = Circuit::new("m", reg);
        circuit.superpose().unwrap();
        circuit.measure_all().unwrap();
        assert!(matches!(run(&circuit, 0), Err(SimError::ZeroShots)));
    }

    #[test]
    fn test_run_superposition_covers_all_outcomes() {
        let reg = QubitRegister::new(2).unwrap();
        let mut circuit = Circuit::new("uniform", reg);
        circuit.superpose().unwrap();
        circuit.measure_all().unwrap();

        let result = run(&circuit, 4000).unwrap();
        assert_eq!(result.counts.total(), 4000);
        // Uniform over 4 outcomes; each should appear. The probability of
        // an outcome vanishing from 4000 uniform shots is negligible.
        for outcome in ["00", "01", "10", "11"] {
            assert!(result.counts.get(outcome) > 0);
        }
    }
}
