//! Game session state machine and statistics

mod state;
mod stats;

pub use state::{
    Game, GameSnapshot, GameSummary, MAX_ATTEMPTS, Phase, SubmitOutcome, Submission,
};
pub use stats::Statistics;
