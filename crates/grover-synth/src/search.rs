//! End-to-end search-circuit composition.

use grover_ir::{Circuit, QubitRegister};
use tracing::debug;

use crate::diffusion::diffusion_block;
use crate::error::{SynthError, SynthResult};
use crate::observer::{NullObserver, SearchObserver};
use crate::oracle::oracle_block;
use crate::pattern::BitPattern;
use crate::planner::optimal_iterations;

/// Grover search circuit synthesiser.
///
/// Validates its configuration up front (register width, pattern alphabet
/// and length), then drives the composer state machine: superposition
/// prefix, `optimal_iterations(N)` oracle+diffusion rounds built from
/// freshly-instantiated stateless templates, and a terminal measurement.
///
/// # Example
///
/// ```rust
/// use grover_synth::GroverSearch;
///
/// let circuit = GroverSearch::new(4, "0101")?.build()?;
/// assert_eq!(circuit.rounds(), 3);
/// assert!(circuit.is_measured());
/// # Ok::<(), grover_synth::SynthError>(())
/// ```
pub struct GroverSearch {
    register: QubitRegister,
    pattern: BitPattern,
    /// Round override; if None, the planner decides.
    iterations: Option<u32>,
}

impl GroverSearch {
    /// Configure a search for `pattern` over `n_qubits` qubits.
    ///
    /// Both inputs are validated here, before any gate exists: width must
    /// be 2..=5, the pattern must be over {'0','1'} and exactly
    /// `n_qubits` long.
    pub fn new(n_qubits: usize, pattern: &str) -> SynthResult<Self> {
        let register = QubitRegister::new(n_qubits)?;
        let pattern = BitPattern::parse(pattern)?;
        if pattern.len() != register.width() {
            return Err(SynthError::PatternLength {
                expected: register.width(),
                got: pattern.len(),
            });
        }
        Ok(Self {
            register,
            pattern,
            iterations: None,
        })
    }

    /// Override the planned round count.
    ///
    /// Useful for demonstrating under- and over-rotation; the default is
    /// the planner's optimum.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// The register this search runs over.
    pub fn register(&self) -> &QubitRegister {
        &self.register
    }

    /// The marked bit-string.
    pub fn pattern(&self) -> &BitPattern {
        &self.pattern
    }

    /// The number of rounds `build` will append.
    pub fn iterations(&self) -> u32 {
        self.iterations
            .unwrap_or_else(|| optimal_iterations(self.register.width()))
    }

    /// Compose the full search circuit.
    pub fn build(&self) -> SynthResult<Circuit> {
        self.build_observed(&mut NullObserver)
    }

    /// Compose the full search circuit, reporting each checkpoint to
    /// `observer`.
    pub fn build_observed(&self, observer: &mut dyn SearchObserver) -> SynthResult<Circuit> {
        let oracle = oracle_block(&self.register, &self.pattern)?;
        observer.oracle_built(&oracle);

        let diffusion = diffusion_block(&self.register)?;
        observer.diffusion_built(&diffusion);

        let rounds = self.iterations();
        debug!(
            width = self.register.width(),
            marked = %self.pattern,
            rounds,
            "composing search circuit"
        );

        let mut circuit = Circuit::new("grover", self.register.clone());
        circuit.superpose()?;

        // The blocks are stateless templates; re-appending the same block
        // each round is equivalent to rebuilding it.
        for round in 1..=rounds {
            circuit.append_round(&oracle, &diffusion)?;
            observer.round_completed(round, &circuit);
        }

        circuit.measure_all()?;
        observer.measured(&circuit);

        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grover_ir::Stage;

    #[test]
    fn test_configuration_validated_at_construction() {
        assert!(matches!(
            GroverSearch::new(4, "010"),
            Err(SynthError::PatternLength {
                expected: 4,
                got: 3
            })
        ));
        assert!(matches!(
            GroverSearch::new(6, "010101"),
            Err(SynthError::Ir(grover_ir::IrError::UnsupportedWidth(6)))
        ));
        assert!(matches!(
            GroverSearch::new(2, "2x"),
            Err(SynthError::InvalidPatternChar { index: 0, .. })
        ));
    }

    #[test]
    fn test_planned_rounds() {
        assert_eq!(GroverSearch::new(2, "01").unwrap().iterations(), 1);
        assert_eq!(GroverSearch::new(3, "010").unwrap().iterations(), 2);
        assert_eq!(GroverSearch::new(4, "0101").unwrap().iterations(), 3);
    }

    #[test]
    fn test_iteration_override() {
        let search = GroverSearch::new(4, "0101").unwrap().with_iterations(1);
        let circuit = search.build().unwrap();
        assert_eq!(circuit.rounds(), 1);
    }

    #[test]
    fn test_build_reaches_measured() {
        let circuit = GroverSearch::new(3, "101").unwrap().build().unwrap();
        assert_eq!(circuit.stage(), Stage::Measured);
        assert_eq!(circuit.rounds(), 2);
        assert_eq!(circuit.num_qubits(), 3);
    }

    #[test]
    fn test_observer_checkpoints_fire_in_order() {
        #[derive(Default)]
        struct Log(Vec<String>);

        impl SearchObserver for Log {
            fn oracle_built(&mut self, _b: &grover_ir::CircuitBlock) {
                self.0.push("oracle".into());
            }
            fn diffusion_built(&mut self, _b: &grover_ir::CircuitBlock) {
                self.0.push("diffusion".into());
            }
            fn round_completed(&mut self, round: u32, _c: &Circuit) {
                self.0.push(format!("round{round}"));
            }
            fn measured(&mut self, _c: &Circuit) {
                self.0.push("measured".into());
            }
        }

        let mut log = Log::default();
        GroverSearch::new(2, "01")
            .unwrap()
            .build_observed(&mut log)
            .unwrap();
        assert_eq!(log.0, vec!["oracle", "diffusion", "round1", "measured"]);
    }
}
