use crate::bits::Bit;
use crate::synthesis::{synthesize, Synthesis};
use thiserror::Error;

/// Unexpected failure while computing a window's complexity
///
/// The monitor converts these into a fail-open `Normal` verdict plus an
/// ERROR record. Panics are not faults and are never caught.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputationFault {
    #[error("estimator failed: {0}")]
    Estimator(String),

    #[error("synthesis invariant violated: {0}")]
    InvariantViolated(String),
}

/// Computes linear complexity for a full window
pub trait ComplexityEstimator {
    fn estimate(&mut self, window: &[Bit]) -> Result<Synthesis, ComputationFault>;
}

/// Production estimator: Berlekamp-Massey synthesis, never fails
#[derive(Debug, Clone, Copy, Default)]
pub struct BerlekampMassey;

impl ComplexityEstimator for BerlekampMassey {
    fn estimate(&mut self, window: &[Bit]) -> Result<Synthesis, ComputationFault> {
        Ok(synthesize(window))
    }
}

/// Reject syntheses that break 0 <= L <= n or deg C = L
pub(crate) fn check_invariants(
    window_len: usize,
    synthesis: &Synthesis,
) -> Result<(), ComputationFault> {
    let l = synthesis.linear_complexity;

    if synthesis.sequence_len != window_len {
        return Err(ComputationFault::InvariantViolated(format!(
            "synthesized {} bits, window holds {}",
            synthesis.sequence_len, window_len
        )));
    }

    if l > window_len {
        return Err(ComputationFault::InvariantViolated(format!(
            "linear complexity {} exceeds window length {}",
            l, window_len
        )));
    }

    if synthesis.polynomial.degree() != l {
        return Err(ComputationFault::InvariantViolated(format!(
            "polynomial degree {} does not match linear complexity {}",
            synthesis.polynomial.degree(),
            l
        )));
    }

    Ok(())
}
