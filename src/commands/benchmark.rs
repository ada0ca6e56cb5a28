//! Benchmark command
//!
//! Plays many bot-only games against random targets and collects statistics.

use crate::core::Digits;
use crate::game::{DEFAULT_LENGTH, DEFAULT_ROUNDS, Game, GameConfig, GameError, Mode, Outcome};
use crate::solver::{Bot, InstantClock, Level};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Settings for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub games: usize,
    pub length: usize,
    pub rounds: usize,
    pub level: Option<Level>,
    /// Base seed; game `i` uses `seed + i` for both target and bot
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            games: 100,
            length: DEFAULT_LENGTH,
            rounds: DEFAULT_ROUNDS,
            level: None,
            seed: 0,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    /// Games the bot forfeited with an empty pool
    pub exhausted: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Number of solved games per guess count
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
    pub config: BenchmarkConfig,
}

/// Summary of a single simulated game
struct GameRecord {
    outcome: Outcome,
    guesses: usize,
}

/// Run `config.games` independent games in parallel
///
/// # Errors
///
/// Returns an error if the configured length is not within 1..=10.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkResult, GameError> {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let records = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let record = play_one(config, config.seed.wrapping_add(i as u64));
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<GameRecord>, GameError>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(&records, *config, start.elapsed()))
}

fn play_one(config: &BenchmarkConfig, seed: u64) -> Result<GameRecord, GameError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let target = Digits::random(config.length, &mut rng)?;
    let game_config = GameConfig {
        rounds: config.rounds,
        length: config.length,
        mode: Mode::Auto,
        level: config.level,
        rival_level: None,
        delay: false,
    };

    let mut game = Game::with_bots(game_config, target, |_, level| {
        Bot::with_parts(config.length, level, rng.clone(), InstantClock)
    })?;

    while !game.is_over() {
        match game.play_bot_turn() {
            Ok(_) | Err(GameError::Bot(_)) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(GameRecord {
        // Loop exits only once an outcome is set
        outcome: game.outcome().unwrap_or(Outcome::Lost),
        guesses: game.round(),
    })
}

fn summarize(
    records: &[GameRecord],
    config: BenchmarkConfig,
    duration: Duration,
) -> BenchmarkResult {
    let mut solved = 0;
    let mut failed = 0;
    let mut exhausted = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for record in records {
        match record.outcome {
            Outcome::Won(_) => {
                solved += 1;
                total_guesses += record.guesses;
                min_guesses = min_guesses.min(record.guesses);
                max_guesses = max_guesses.max(record.guesses);
                *distribution.entry(record.guesses).or_insert(0) += 1;
            }
            Outcome::Forfeit { .. } => exhausted += 1,
            Outcome::Lost | Outcome::Draw => failed += 1,
        }
    }

    let total_games = records.len();
    BenchmarkResult {
        total_games,
        solved,
        failed,
        exhausted,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        config,
    }
}
