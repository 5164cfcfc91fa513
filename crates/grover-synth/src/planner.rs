//! Amplification round planning.

use std::f64::consts::PI;

/// Optimal number of oracle+diffusion rounds for a single marked state
/// in a search space of 2^n items:
///
///   iterations(n) = floor(π/4 · √(2ⁿ))
///
/// Pure function of the register width. Running more rounds than this
/// over-rotates the state and the success probability falls again.
pub fn optimal_iterations(n_qubits: usize) -> u32 {
    let search_space = (1u64 << n_qubits) as f64;
    (PI / 4.0 * search_space.sqrt()).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_points() {
        assert_eq!(optimal_iterations(2), 1); // π/4·2 ≈ 1.57
        assert_eq!(optimal_iterations(3), 2); // π/4·2.83 ≈ 2.22
        assert_eq!(optimal_iterations(4), 3); // π/4·4 ≈ 3.14
        assert_eq!(optimal_iterations(5), 4); // π/4·5.66 ≈ 4.44
    }

    #[test]
    fn test_pure_and_idempotent() {
        for n in 2..=5 {
            assert_eq!(optimal_iterations(n), optimal_iterations(n));
        }
    }

    #[test]
    fn test_monotonic_in_width() {
        for n in 2..5 {
            assert!(optimal_iterations(n + 1) > optimal_iterations(n));
        }
    }
}
