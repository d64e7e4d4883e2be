//! Outcome calibration: sample the weight table and compare against the
//! configured probabilities.

use log::warn;
use serde::{Deserialize, Serialize};

use super::outcome::{outcome_probabilities, BallOutcome, OutcomeSource, WeightedOutcomes};
use super::probability_validator::ProbabilityValidator;

/// Tolerance used when judging a sampled run.
pub const DEFAULT_SAMPLING_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeFrequency {
    pub outcome: BallOutcome,
    pub label: String,
    pub count: u64,
    pub expected: f64,
    pub observed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationReport {
    pub seed: u64,
    pub trials: u64,
    pub rows: Vec<OutcomeFrequency>,
    pub max_deviation: f64,
    /// `None` when every row is within tolerance.
    pub violation: Option<String>,
}

impl CalibrationReport {
    pub fn within_tolerance(&self) -> bool {
        self.violation.is_none()
    }
}

/// Draw `trials` outcomes from `source` and tabulate them in table order.
///
/// Outcomes outside the table are not counted; they are logged, and the
/// counts then sum to less than `trials`.
pub fn sample_counts<S: OutcomeSource>(source: &mut S, trials: u64) -> Vec<u64> {
    let mut counts = vec![0u64; BallOutcome::ALL.len()];
    let mut skipped = 0u64;
    for _ in 0..trials {
        let outcome = source.next_outcome();
        match BallOutcome::ALL.iter().position(|o| *o == outcome) {
            Some(idx) => counts[idx] += 1,
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("{skipped} of {trials} sampled outcomes are not in the outcome table");
    }
    counts
}

/// Sample the canonical table with a seeded RNG and report how close the
/// observed frequencies land.
pub fn calibrate(seed: u64, trials: u64) -> CalibrationReport {
    let expected = outcome_probabilities();
    let probabilities: Vec<f64> = expected.iter().map(|(_, p)| *p).collect();

    let validator = ProbabilityValidator::new();
    let table_violation = validator.validate_distribution(&probabilities).err().map(|e| e.to_string());

    let counts = sample_counts(&mut WeightedOutcomes::seeded(seed), trials);

    let rows: Vec<OutcomeFrequency> = expected
        .iter()
        .zip(&counts)
        .map(|(&(outcome, p), &count)| OutcomeFrequency {
            outcome,
            label: outcome.label(),
            count,
            expected: p,
            observed: if trials == 0 { 0.0 } else { count as f64 / trials as f64 },
        })
        .collect();

    let max_deviation =
        rows.iter().map(|r| (r.observed - r.expected).abs()).fold(0.0f64, f64::max);

    let sampling_violation = ProbabilityValidator::with_tolerance(DEFAULT_SAMPLING_TOLERANCE)
        .validate_frequencies(&counts, &probabilities)
        .err()
        .map(|e| e.to_string());

    CalibrationReport {
        seed,
        trials,
        rows,
        max_deviation,
        violation: table_violation.or(sampling_violation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::outcome::ScriptedOutcomes;

    #[test]
    fn configured_table_is_a_distribution() {
        let probabilities: Vec<f64> = outcome_probabilities().iter().map(|(_, p)| *p).collect();
        assert!(ProbabilityValidator::new().validate_distribution(&probabilities).is_ok());
    }

    #[test]
    fn sample_counts_tabulates_in_table_order() {
        let mut source =
            ScriptedOutcomes::new([BallOutcome::Out, BallOutcome::Runs(6), BallOutcome::Out]);
        let counts = sample_counts(&mut source, 3);
        assert_eq!(counts[5], 1);
        assert_eq!(counts[6], 2);
        assert_eq!(counts.iter().sum::<u64>(), 3);
    }

    #[test]
    fn off_table_outcomes_are_not_counted() {
        let mut source = ScriptedOutcomes::new([BallOutcome::Runs(5), BallOutcome::Runs(4)]);
        let counts = sample_counts(&mut source, 2);
        assert_eq!(counts[4], 1);
        assert_eq!(counts.iter().sum::<u64>(), 1);
    }

    #[test]
    fn hundred_thousand_draws_converge() {
        let report = calibrate(7, 100_000);
        assert_eq!(report.rows.len(), 9);
        assert!(report.within_tolerance(), "{:?}", report.violation);
        assert!(report.max_deviation < DEFAULT_SAMPLING_TOLERANCE);

        let dot = &report.rows[0];
        assert_eq!(dot.label, "0");
        assert!((dot.expected - 35.0 / 106.0).abs() < 1e-12);
    }

    #[test]
    fn zero_trials_reports_a_violation() {
        let report = calibrate(1, 0);
        assert!(!report.within_tolerance());
        assert_eq!(report.max_deviation, report.rows.iter().map(|r| r.expected).fold(0.0, f64::max));
    }
}
