// ============================================================================
// Probability Distribution Validation
// ============================================================================
//
// Contract: configured outcome probabilities sum to 1.0 (within tolerance),
// and sampled frequencies converge on them.
//
// Integration Points:
// - calibration::calibrate() - checks the weight table and the sampled run

use serde::{Deserialize, Serialize};

use crate::error::ProbabilityError;

/// Checks a probability table and the frequencies sampled from it.
///
/// One tolerance covers both checks: the deviation of the table's sum from
/// 1.0, and the per-outcome deviation of observed from expected frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityValidator {
    tolerance: f64,
}

impl Default for ProbabilityValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbabilityValidator {
    /// Tolerance used by [`ProbabilityValidator::new`].
    pub const DEFAULT_TOLERANCE: f64 = 0.001;

    pub fn new() -> Self {
        Self::with_tolerance(Self::DEFAULT_TOLERANCE)
    }

    /// ```
    /// use cricket_core::engine::probability_validator::ProbabilityValidator;
    ///
    /// let sampling = ProbabilityValidator::with_tolerance(0.01);
    /// assert_eq!(sampling.tolerance(), 0.01);
    /// ```
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Non-empty, no negative entries, sum within tolerance of 1.0.
    ///
    /// ```
    /// use cricket_core::engine::probability_validator::ProbabilityValidator;
    ///
    /// let validator = ProbabilityValidator::new();
    /// assert!(validator.validate_distribution(&[0.25, 0.50, 0.25]).is_ok());
    /// assert!(validator.validate_distribution(&[0.25, 0.50, 0.30]).is_err());
    /// ```
    pub fn validate_distribution(&self, probabilities: &[f64]) -> Result<(), ProbabilityError> {
        if probabilities.is_empty() {
            return Err(ProbabilityError::Empty);
        }

        if let Some((index, &value)) = probabilities.iter().enumerate().find(|(_, &p)| p < 0.0) {
            return Err(ProbabilityError::Negative { index, value });
        }

        let sum: f64 = probabilities.iter().sum();
        let deviation = (sum - 1.0).abs();
        if deviation > self.tolerance {
            return Err(ProbabilityError::SumOutOfTolerance { sum, deviation, tolerance: self.tolerance });
        }

        Ok(())
    }

    /// Compare observed counts against expected probabilities.
    ///
    /// Returns the largest absolute deviation, or the first outcome whose
    /// deviation exceeds the tolerance.
    pub fn validate_frequencies(&self, observed: &[u64], expected: &[f64]) -> Result<f64, ProbabilityError> {
        if observed.len() != expected.len() {
            return Err(ProbabilityError::LengthMismatch {
                observed: observed.len(),
                expected: expected.len(),
            });
        }

        let total: u64 = observed.iter().sum();
        if total == 0 {
            return Err(ProbabilityError::NoObservations);
        }

        let mut max_deviation = 0.0f64;
        for (index, (&count, &p)) in observed.iter().zip(expected).enumerate() {
            let frequency = count as f64 / total as f64;
            let deviation = (frequency - p).abs();
            if deviation > self.tolerance {
                return Err(ProbabilityError::FrequencyOutOfTolerance {
                    index,
                    frequency,
                    expected: p,
                    deviation,
                    tolerance: self.tolerance,
                });
            }
            max_deviation = max_deviation.max(deviation);
        }

        Ok(max_deviation)
    }
}
