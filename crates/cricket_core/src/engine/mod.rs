//! Match Simulation Engine
//!
//! ## Sub-modules
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `rules` | Fixed match constants (overs, wickets) |
//! | `outcome` | Ball outcomes, weight table, outcome sources |
//! | `match_state` | Mutable per-team figures and innings bookkeeping |
//! | `simulator` | **`MatchSimulator`** - the delivery state machine |
//! | `snapshot` | Render-ready state returned after every delivery |
//! | `events` | Delivery log records |
//! | `result` | Win/tie determination and result text |
//! | `scoreboard` | Match-screen view model |
//! | `probability_validator` | Distribution / frequency checks |
//! | `calibration` | Large-sample check of the weight table |

pub mod calibration;
pub mod events;
pub mod match_state;
pub mod outcome;
pub mod probability_validator;
pub mod result;
pub mod rules;
pub mod scoreboard;
pub mod simulator;
pub mod snapshot;


pub use calibration::{calibrate, CalibrationReport, OutcomeFrequency};
pub use events::DeliveryRecord;
pub use match_state::MatchState;
pub use outcome::{BallOutcome, OutcomeSource, ScriptedOutcomes, WeightedOutcomes, OUTCOME_WEIGHTS};
pub use result::{MatchResult, WinMargin};
pub use scoreboard::{Scoreboard, TeamCard, TeamRole};
pub use simulator::{BallReport, MatchSimulator, MATCH_OVER_LABEL};
pub use snapshot::MatchSnapshot;
