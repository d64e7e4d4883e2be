use serde::{Deserialize, Serialize};

use super::outcome::BallOutcome;

/// One processed delivery, as recorded in the match log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub innings: u8,
    /// Index of the side that faced this ball.
    pub batting_team: usize,
    /// Overs of the innings after this ball, e.g. "1.3". Extras leave it
    /// unchanged.
    pub over: String,
    pub outcome: BallOutcome,
    pub label: String,
    /// Batting side's total after this ball.
    pub score: u32,
    pub wickets: u32,
}

impl DeliveryRecord {
    /// Compact commentary line, e.g. `1.3  4  (23/1)`.
    pub fn commentary(&self) -> String {
        format!("{:>4}  {}  ({}/{})", self.over, self.label, self.score, self.wickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commentary_line() {
        let record = DeliveryRecord {
            innings: 1,
            batting_team: 0,
            over: "1.3".into(),
            outcome: BallOutcome::Runs(4),
            label: "4".into(),
            score: 23,
            wickets: 1,
        };
        assert_eq!(record.commentary(), " 1.3  4  (23/1)");
    }
}
