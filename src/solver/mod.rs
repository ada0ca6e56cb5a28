//! Candidate-elimination bot
//!
//! The bot enumerates every possible target, prunes it with each round of
//! feedback, and ranks survivors by how many strikes they have agreed with.

mod clock;
mod engine;
mod level;
mod permutations;
pub mod pool;

pub use clock::{Clock, ClockType, InstantClock, SystemClock};
pub use engine::{Bot, BotError, FALLBACK_THINK_TIME};
pub use level::{Level, LevelError};
pub use permutations::Permutations;
pub use pool::{Candidate, CandidatePool, UNSCORED};
