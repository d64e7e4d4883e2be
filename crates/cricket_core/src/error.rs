use std::path::PathBuf;
use thiserror::Error;

use crate::engine::BallOutcome;

/// Errors raised while setting up a match or decoding a match request.
///
/// The simulator itself never fails once constructed; these only cover the
/// glue around it.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Duplicate team name: {0}")]
    DuplicateTeam(String),

    #[error("Team selection incomplete: expected 2 teams, found {found}")]
    IncompleteSelection { found: usize },

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(u8),

    /// A scripted delivery that the outcome table cannot produce.
    #[error("Invalid outcome at delivery {index}: {outcome:?}")]
    InvalidOutcome { index: usize, outcome: BallOutcome },

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// A probability table or a sampled run that fails validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbabilityError {
    #[error("Empty probability distribution")]
    Empty,

    #[error("Negative probability at outcome {index}: {value}")]
    Negative { index: usize, value: f64 },

    #[error("Probability sum {sum:.6} deviates from 1.0 by {deviation:.6} (tolerance: {tolerance:.6})")]
    SumOutOfTolerance { sum: f64, deviation: f64, tolerance: f64 },

    #[error("Length mismatch: {observed} observed counts vs {expected} probabilities")]
    LengthMismatch { observed: usize, expected: usize },

    #[error("No observations")]
    NoObservations,

    #[error(
        "Outcome {index} frequency {frequency:.4} deviates from {expected:.4} by {deviation:.4} (tolerance: {tolerance:.4})"
    )]
    FrequencyOutOfTolerance {
        index: usize,
        frequency: f64,
        expected: f64,
        deviation: f64,
        tolerance: f64,
    },
}

/// Errors raised while loading the team list.
#[derive(Error, Debug)]
pub enum TeamListError {
    #[error("Failed to read team list at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse team list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Team list is empty")]
    Empty,
}

impl TeamListError {
    /// I/O failures are recovered by falling back to the bundled list.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TeamListError::Io { .. })
    }

    /// Message suitable for showing in place of the team list.
    pub fn user_message(&self) -> &'static str {
        match self {
            TeamListError::Io { .. } => "Error reading teams file.",
            TeamListError::Parse(_) | TeamListError::Empty => "Error parsing teams data.",
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_recoverable_parse_errors_are_not() {
        let io = TeamListError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(io.is_recoverable());
        assert!(io.to_string().contains("missing.json"));

        let parse = TeamListError::Parse(serde_json::from_str::<u8>("nope").unwrap_err());
        assert!(!parse.is_recoverable());
        assert_eq!(parse.user_message(), "Error parsing teams data.");
        assert!(!TeamListError::Empty.is_recoverable());
    }

    #[test]
    fn match_error_messages() {
        assert_eq!(MatchError::DuplicateTeam("India".into()).to_string(), "Duplicate team name: India");
        assert_eq!(
            MatchError::IncompleteSelection { found: 1 }.to_string(),
            "Team selection incomplete: expected 2 teams, found 1"
        );
        assert_eq!(MatchError::UnsupportedSchemaVersion(9).to_string(), "Unsupported schema version: 9");
        assert_eq!(
            MatchError::InvalidOutcome { index: 3, outcome: BallOutcome::Runs(5) }.to_string(),
            "Invalid outcome at delivery 3: Runs(5)"
        );
    }

    #[test]
    fn serde_errors_convert_into_match_errors() {
        let err: MatchError = serde_json::from_str::<u8>("{").unwrap_err().into();
        assert!(matches!(err, MatchError::Deserialization(_)));
        assert!(err.to_string().starts_with("Deserialization error:"));
    }
}
