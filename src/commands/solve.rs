//! Target solving command
//!
//! Lets the bot solve a given target and returns the solution path.

use crate::core::{Digits, Score};
use crate::game::DEFAULT_ROUNDS;
use crate::solver::{Bot, BotError, Clock, InstantClock, Level};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Configuration for solving a target
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    pub level: Option<Level>,
    /// Fixed RNG seed for reproducible leveled runs
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_ROUNDS,
            level: None,
            seed: None,
        }
    }
}

/// Result of solving a target
pub struct SolveResult {
    pub success: bool,
    /// The bot ran out of candidates before finding the target
    pub exhausted: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Digits,
    pub level: Option<Level>,
    /// Size of the full search space
    pub initial_candidates: usize,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Digits,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub elapsed: Duration,
}

/// Solve a specific target with a fresh bot
///
/// # Errors
///
/// Returns an error if the target is not a valid sequence of distinct digits.
pub fn solve_target(config: &SolveConfig) -> Result<SolveResult, String> {
    let target: Digits = config
        .target
        .parse()
        .map_err(|e| format!("Invalid target: {e}"))?;

    let rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let bot = Bot::with_parts(target.len(), config.level, rng, InstantClock)
        .map_err(|e| e.to_string())?;

    Ok(solve_with(bot, target, config.max_guesses))
}

/// Drive `bot` against `target` for at most `max_guesses` rounds
pub fn solve_with<R: Rng, C: Clock>(
    mut bot: Bot<R, C>,
    target: Digits,
    max_guesses: usize,
) -> SolveResult {
    let initial_candidates = bot.size();
    let level = bot.level();
    let mut guesses = Vec::new();
    let mut success = false;
    let mut exhausted = false;

    for _ in 0..max_guesses {
        let candidates_before = bot.size();

        let Ok((guess, elapsed)) = bot.guess() else {
            exhausted = true;
            break;
        };

        let score = Score::calculate(&target, &guess);
        let update = bot.update(&guess, score);

        guesses.push(GuessStep {
            guess,
            score,
            candidates_before,
            candidates_after: bot.size(),
            elapsed,
        });

        if score.is_home_run(target.len()) {
            success = true;
            break;
        }
        if let Err(BotError::Exhausted) = update {
            exhausted = true;
            break;
        }
    }

    SolveResult {
        success,
        exhausted,
        guesses,
        target,
        level,
        initial_candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_known_target() {
        let result = solve_target(&SolveConfig::new("412".to_string())).unwrap();

        assert!(result.success);
        assert!(!result.exhausted);
        assert_eq!(result.initial_candidates, 720);
        assert_eq!(result.guesses.len(), 4);
        assert_eq!(result.guesses[0].candidates_before, 720);
        assert_eq!(result.guesses[0].candidates_after, 21);
        assert_eq!(result.guesses.last().unwrap().guess, result.target);
    }

    #[test]
    fn solve_reports_failure_when_out_of_guesses() {
        let config = SolveConfig {
            max_guesses: 2,
            ..SolveConfig::new("412".to_string())
        };
        let result = solve_target(&config).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), 2);
    }

    #[test]
    fn solve_rejects_invalid_targets() {
        assert!(solve_target(&SolveConfig::new("112".to_string())).is_err());
        assert!(solve_target(&SolveConfig::new("4a2".to_string())).is_err());
        assert!(solve_target(&SolveConfig::new(String::new())).is_err());
    }

    #[test]
    fn solve_accepts_separated_targets() {
        for target in ["4 1 2", "4,1,2", "4, 1, 2"] {
            let result = solve_target(&SolveConfig::new(target.to_string())).unwrap();
            assert_eq!(result.target, Digits::new(&[4, 1, 2]).unwrap());
            assert!(result.success);
        }
    }

    #[test]
    fn candidate_counts_never_increase() {
        let config = SolveConfig {
            level: Some(Level::new(3).unwrap()),
            seed: Some(17),
            max_guesses: 30,
            ..SolveConfig::new("5093".to_string())
        };
        let result = solve_target(&config).unwrap();

        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert!(result.success || result.exhausted || result.guesses.len() == 30);
    }

    #[test]
    fn seeded_leveled_runs_repeat() {
        let config = SolveConfig {
            level: Some(Level::new(5).unwrap()),
            seed: Some(3),
            ..SolveConfig::new("8156".to_string())
        };
        let a = solve_target(&config).unwrap();
        let b = solve_target(&config).unwrap();

        let guesses_a: Vec<Digits> = a.guesses.iter().map(|s| s.guess).collect();
        let guesses_b: Vec<Digits> = b.guesses.iter().map(|s| s.guess).collect();
        assert_eq!(guesses_a, guesses_b);
    }
}
