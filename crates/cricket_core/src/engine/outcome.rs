//! Ball outcomes and the sources that produce them.
//!
//! The canonical distribution is a fixed weight table (total 106). Sampling
//! draws a uniform integer below the total and walks the cumulative weights,
//! which is equivalent to picking from the table expanded `weight` times.

use std::collections::VecDeque;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Result of a single delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "runs")]
pub enum BallOutcome {
    /// Runs off the bat: 0, 1, 2, 3, 4 or 6.
    Runs(u32),
    Out,
    Wide,
    NoBall,
}

impl BallOutcome {
    /// Every outcome the weight table can produce, in table order.
    pub const ALL: [BallOutcome; 9] = [
        BallOutcome::Runs(0),
        BallOutcome::Runs(1),
        BallOutcome::Runs(2),
        BallOutcome::Runs(3),
        BallOutcome::Runs(4),
        BallOutcome::Runs(6),
        BallOutcome::Out,
        BallOutcome::Wide,
        BallOutcome::NoBall,
    ];

    /// Whether the weight table can produce this outcome. Run counts outside
    /// 0, 1, 2, 3, 4 and 6 are not.
    pub fn is_canonical(self) -> bool {
        BallOutcome::ALL.contains(&self)
    }

    /// Legal deliveries count towards the over; extras are re-bowled.
    pub fn is_legal(self) -> bool {
        !matches!(self, BallOutcome::Wide | BallOutcome::NoBall)
    }

    /// Runs credited to the batting side.
    pub fn runs(self) -> u32 {
        match self {
            BallOutcome::Runs(runs) => runs,
            BallOutcome::Out => 0,
            BallOutcome::Wide | BallOutcome::NoBall => 1,
        }
    }

    /// Display label. A no ball carries the cosmetic free-hit annotation.
    pub fn label(self) -> String {
        match self {
            BallOutcome::Runs(runs) => runs.to_string(),
            BallOutcome::Out => "Out".to_string(),
            BallOutcome::Wide => "Wide".to_string(),
            BallOutcome::NoBall => "No Ball (Free Hit)".to_string(),
        }
    }
}

impl fmt::Display for BallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Canonical weight table.
pub const OUTCOME_WEIGHTS: [(BallOutcome, u32); 9] = [
    (BallOutcome::Runs(0), 35),
    (BallOutcome::Runs(1), 30),
    (BallOutcome::Runs(2), 15),
    (BallOutcome::Runs(3), 5),
    (BallOutcome::Runs(4), 8),
    (BallOutcome::Runs(6), 2),
    (BallOutcome::Out, 5),
    (BallOutcome::Wide, 3),
    (BallOutcome::NoBall, 3),
];

pub fn total_weight() -> u32 {
    OUTCOME_WEIGHTS.iter().map(|(_, w)| w).sum()
}

/// Configured selection probability of each outcome, in table order.
pub fn outcome_probabilities() -> Vec<(BallOutcome, f64)> {
    let total = total_weight() as f64;
    OUTCOME_WEIGHTS.iter().map(|&(outcome, w)| (outcome, w as f64 / total)).collect()
}

/// Map a roll in `0..total_weight()` onto the table.
fn outcome_for_roll(roll: u32) -> BallOutcome {
    let mut acc = 0;
    for &(outcome, weight) in OUTCOME_WEIGHTS.iter() {
        acc += weight;
        if roll < acc {
            return outcome;
        }
    }
    // Unreachable for rolls below the total; a dot ball keeps this total.
    BallOutcome::Runs(0)
}

/// Anything that can decide what happens on the next delivery.
pub trait OutcomeSource {
    fn next_outcome(&mut self) -> BallOutcome;
}

impl<S: OutcomeSource + ?Sized> OutcomeSource for Box<S> {
    fn next_outcome(&mut self) -> BallOutcome {
        (**self).next_outcome()
    }
}

/// Weighted draws from the canonical table over any RNG.
#[derive(Debug, Clone)]
pub struct WeightedOutcomes<R = ChaCha8Rng> {
    rng: R,
    total: u32,
}

impl WeightedOutcomes<ChaCha8Rng> {
    /// Seeded source: the same seed always yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> WeightedOutcomes<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, total: total_weight() }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> OutcomeSource for WeightedOutcomes<R> {
    fn next_outcome(&mut self) -> BallOutcome {
        outcome_for_roll(self.rng.gen_range(0..self.total))
    }
}

/// Fixed sequence of outcomes, for replays and scripted scenarios.
///
/// Once the script runs out every further delivery is a dot ball, so a
/// match driven by a short script still terminates.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOutcomes {
    script: VecDeque<BallOutcome>,
}

impl ScriptedOutcomes {
    pub fn new(script: impl IntoIterator<Item = BallOutcome>) -> Self {
        Self { script: script.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl OutcomeSource for ScriptedOutcomes {
    fn next_outcome(&mut self) -> BallOutcome {
        self.script.pop_front().unwrap_or(BallOutcome::Runs(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_106() {
        assert_eq!(total_weight(), 106);
    }

    #[test]
    fn roll_boundaries_follow_cumulative_weights() {
        assert_eq!(outcome_for_roll(0), BallOutcome::Runs(0));
        assert_eq!(outcome_for_roll(34), BallOutcome::Runs(0));
        assert_eq!(outcome_for_roll(35), BallOutcome::Runs(1));
        assert_eq!(outcome_for_roll(64), BallOutcome::Runs(1));
        assert_eq!(outcome_for_roll(65), BallOutcome::Runs(2));
        assert_eq!(outcome_for_roll(80), BallOutcome::Runs(3));
        assert_eq!(outcome_for_roll(85), BallOutcome::Runs(4));
        assert_eq!(outcome_for_roll(93), BallOutcome::Runs(6));
        assert_eq!(outcome_for_roll(95), BallOutcome::Out);
        assert_eq!(outcome_for_roll(100), BallOutcome::Wide);
        assert_eq!(outcome_for_roll(103), BallOutcome::NoBall);
        assert_eq!(outcome_for_roll(105), BallOutcome::NoBall);
    }

    #[test]
    fn every_roll_maps_to_a_table_entry() {
        let mut counts = [0u32; 9];
        for roll in 0..total_weight() {
            let outcome = outcome_for_roll(roll);
            let idx = BallOutcome::ALL.iter().position(|o| *o == outcome).unwrap();
            counts[idx] += 1;
        }
        let expected: Vec<u32> = OUTCOME_WEIGHTS.iter().map(|(_, w)| *w).collect();
        assert_eq!(counts.to_vec(), expected);
    }

    #[test]
    fn labels() {
        assert_eq!(BallOutcome::Runs(4).label(), "4");
        assert_eq!(BallOutcome::Out.label(), "Out");
        assert_eq!(BallOutcome::Wide.label(), "Wide");
        assert_eq!(BallOutcome::NoBall.label(), "No Ball (Free Hit)");
    }

    #[test]
    fn only_table_outcomes_are_canonical() {
        assert!(BallOutcome::ALL.iter().all(|o| o.is_canonical()));
        for runs in [5, 7, u32::MAX] {
            assert!(!BallOutcome::Runs(runs).is_canonical());
        }
    }

    #[test]
    fn extras_score_one_and_are_not_legal() {
        for extra in [BallOutcome::Wide, BallOutcome::NoBall] {
            assert_eq!(extra.runs(), 1);
            assert!(!extra.is_legal());
        }
        assert!(BallOutcome::Out.is_legal());
        assert_eq!(BallOutcome::Out.runs(), 0);
        assert!(BallOutcome::Runs(6).is_legal());
    }

    #[test]
    fn seeded_source_is_deterministic() {
        let mut a = WeightedOutcomes::seeded(42);
        let mut b = WeightedOutcomes::seeded(42);
        let seq_a: Vec<_> = (0..200).map(|_| a.next_outcome()).collect();
        let seq_b: Vec<_> = (0..200).map(|_| b.next_outcome()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn scripted_source_falls_back_to_dot_balls() {
        let mut source = ScriptedOutcomes::new([BallOutcome::Runs(4), BallOutcome::Out]);
        assert_eq!(source.next_outcome(), BallOutcome::Runs(4));
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.next_outcome(), BallOutcome::Out);
        assert_eq!(source.next_outcome(), BallOutcome::Runs(0));
        assert_eq!(source.next_outcome(), BallOutcome::Runs(0));
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&BallOutcome::Runs(6)).unwrap();
        assert_eq!(json, r#"{"kind":"Runs","runs":6}"#);
        let json = serde_json::to_string(&BallOutcome::Out).unwrap();
        assert_eq!(json, r#"{"kind":"Out"}"#);
    }
}
