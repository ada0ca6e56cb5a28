//! Bot guessing engine
//!
//! Wraps a candidate pool with guess selection, think-time simulation and an
//! optional skill level that makes the bot play imperfectly.

use super::clock::{Clock, SystemClock};
use super::{CandidatePool, Level};
use crate::core::{Digits, MAX_LENGTH, Score};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::time::Duration;

/// Pause used when the think-time logarithm would be undefined
pub const FALLBACK_THINK_TIME: Duration = Duration::from_millis(100);

/// Smallest logarithm base accepted before falling back to a fixed pause
const MIN_LOG_BASE: f64 = 1.0 + 1e-6;

/// Errors reported by the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    /// Sequence length outside 1..=10
    InvalidLength(usize),
    /// A guess of the wrong length was fed back
    LengthMismatch { expected: usize, got: usize },
    /// No candidate is consistent with the feedback seen so far
    Exhausted,
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Bot length must be between 1 and {MAX_LENGTH}, got {len}")
            }
            Self::LengthMismatch { expected, got } => {
                write!(f, "Expected a {expected}-digit guess, got {got} digits")
            }
            Self::Exhausted => write!(f, "Exhausted search space: no candidates remain"),
        }
    }
}

impl std::error::Error for BotError {}

/// Candidate-elimination bot
///
/// Without a level the bot plays strictly: it always guesses its best candidate and
/// discards anything that contradicts feedback. With a level it sometimes guesses a
/// random candidate and sometimes keeps contradicted candidates.
///
/// Randomness and the thinking delay are injected, so games can be replayed.
///
/// # Examples
/// ```
/// use number_baseball::core::{Digits, Score};
/// use number_baseball::solver::{Bot, InstantClock};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let target = Digits::new(&[4, 1, 2]).unwrap();
/// let mut bot = Bot::with_parts(3, None, StdRng::seed_from_u64(0), InstantClock).unwrap();
///
/// loop {
///     let (guess, _elapsed) = bot.guess().unwrap();
///     let score = Score::calculate(&target, &guess);
///     if score.is_home_run(3) {
///         assert_eq!(guess, target);
///         break;
///     }
///     bot.update(&guess, score).unwrap();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Bot<R = StdRng, C = SystemClock> {
    length: usize,
    level: Option<Level>,
    pool: CandidatePool,
    rng: R,
    clock: C,
}

impl Bot {
    /// Create a bot with an OS-seeded RNG and a real sleeping clock
    ///
    /// # Errors
    /// Returns `BotError::InvalidLength` if `length` is not within 1..=10.
    pub fn new(length: usize, level: Option<Level>) -> Result<Self, BotError> {
        Self::with_parts(length, level, StdRng::from_os_rng(), SystemClock)
    }
}

impl<R: Rng, C: Clock> Bot<R, C> {
    /// Create a bot with explicit randomness and clock
    ///
    /// # Errors
    /// Returns `BotError::InvalidLength` if `length` is not within 1..=10.
    pub fn with_parts(
        length: usize,
        level: Option<Level>,
        rng: R,
        clock: C,
    ) -> Result<Self, BotError> {
        if !(1..=MAX_LENGTH).contains(&length) {
            return Err(BotError::InvalidLength(length));
        }
        Ok(Self {
            length,
            level,
            pool: CandidatePool::new(length),
            rng,
            clock,
        })
    }

    /// Length of the sequences this bot plays
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Configured skill level; `None` for the strict bot
    #[must_use]
    pub const fn level(&self) -> Option<Level> {
        self.level
    }

    /// Number of candidates still in the pool
    #[must_use]
    pub fn size(&self) -> usize {
        self.pool.len()
    }

    /// Read-only view of the candidate pool
    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    /// Pick the next guess and report how long the bot "thought" about it
    ///
    /// # Errors
    /// Returns `BotError::Exhausted` if the pool is empty.
    pub fn guess(&mut self) -> Result<(Digits, Duration), BotError> {
        let best = *self.pool.best().ok_or(BotError::Exhausted)?;

        let think_time = self.think_time(best.weight);
        let elapsed = self.clock.pause(think_time);

        let guess = match self.level {
            Some(level) if self.rng.random_bool(level.mistake_probability()) => self
                .pool
                .choose(&mut self.rng)
                .map_or(best.digits, |candidate| candidate.digits),
            _ => best.digits,
        };

        Ok((guess, elapsed))
    }

    /// Reconcile the pool with the `score` received for `guess`
    ///
    /// # Errors
    /// Returns `BotError::LengthMismatch` for a guess of the wrong length (the pool is
    /// left untouched) and `BotError::Exhausted` if no candidate survives.
    pub fn update(&mut self, guess: &Digits, score: Score) -> Result<(), BotError> {
        if guess.len() != self.length {
            return Err(BotError::LengthMismatch {
                expected: self.length,
                got: guess.len(),
            });
        }

        match self.level {
            None => self.pool.update(guess, score, |_| false),
            Some(level) => {
                let keep = level.mistake_probability();
                let rng = &mut self.rng;
                self.pool.update(guess, score, |_| rng.random_bool(keep));
            }
        }

        if self.pool.is_empty() {
            Err(BotError::Exhausted)
        } else {
            Ok(())
        }
    }

    /// Simulated thinking delay for the current pool
    ///
    /// The strict bot waits a uniform fraction of a second. A leveled bot scales that
    /// fraction by `log(pool_size + 1)` in base `top_weight / 10 + 1.1`, so a large
    /// pool with no strong favourite takes longer.
    fn think_time(&mut self, top_weight: u32) -> Duration {
        let fraction: f64 = self.rng.random();
        if self.level.is_none() {
            return Duration::from_secs_f64(fraction);
        }

        let base = f64::from(top_weight) / 10.0 + 1.1;
        let seconds = fraction * think_scale(self.pool.len(), base);
        if seconds.is_finite() && seconds >= 0.0 {
            Duration::from_secs_f64(seconds)
        } else {
            FALLBACK_THINK_TIME.mul_f64(fraction)
        }
    }
}

/// `log_base(pool_size + 1)`, or NaN when the base is too close to 1 to be meaningful
fn think_scale(pool_size: usize, base: f64) -> f64 {
    if base.is_nan() || base < MIN_LOG_BASE {
        return f64::NAN;
    }
    (pool_size as f64 + 1.0).log(base)
}
