//! Number Baseball - CLI
//!
//! Play number baseball against (or alongside) a candidate-elimination bot, let
//! the bot solve a given target, or benchmark it over many random games.

use anyhow::Result;
use clap::{Parser, Subcommand};
use number_baseball::{
    commands::{BenchmarkConfig, PlayOptions, SolveConfig, run_benchmark, run_play, solve_target},
    game::{DEFAULT_LENGTH, DEFAULT_ROUNDS, Mode},
    output::{print_benchmark_result, print_solve_result},
    solver::Level,
};

#[derive(Parser)]
#[command(
    name = "number_baseball",
    about = "Number baseball with a candidate-elimination bot",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default); anything not given is asked for
    Play {
        /// Round budget
        #[arg(short = 'n', long)]
        rounds: Option<usize>,

        /// Number of digits (1-10)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=10))]
        length: Option<u8>,

        /// Who plays
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        /// Bot level 1-10; omit for a strict bot
        #[arg(long)]
        level: Option<Level>,

        /// Level of the second bot in dual mode
        #[arg(long)]
        rival_level: Option<Level>,

        /// Play strict bots without asking for levels
        #[arg(long)]
        strict: bool,

        /// Answer instantly instead of pausing to think
        #[arg(long)]
        no_delay: bool,

        /// Show the rules without asking
        #[arg(long)]
        rules: bool,
    },

    /// Let the bot solve a specific target
    Solve {
        /// The target, e.g. 412, "4 1 2" or 4,1,2
        target: String,

        /// Bot level 1-10; omit for a strict bot
        #[arg(long)]
        level: Option<Level>,

        /// Maximum number of guesses
        #[arg(short = 'n', long, default_value_t = DEFAULT_ROUNDS)]
        rounds: usize,

        /// Seed for reproducible leveled runs
        #[arg(long)]
        seed: Option<u64>,

        /// Show candidate counts and thinking time per guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the bot over random targets
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Number of digits (1-10)
        #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
        length: usize,

        /// Bot level 1-10; omit for a strict bot
        #[arg(long)]
        level: Option<Level>,

        /// Round budget per game
        #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
        rounds: usize,

        /// Base seed for targets and bots
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        rounds: None,
        length: None,
        mode: None,
        level: None,
        rival_level: None,
        strict: false,
        no_delay: false,
        rules: false,
    });

    match command {
        Commands::Play {
            rounds,
            length,
            mode,
            level,
            rival_level,
            strict,
            no_delay,
            rules,
        } => {
            let options = PlayOptions {
                rounds,
                length: length.map(usize::from),
                mode,
                level,
                rival_level,
                strict,
                no_delay,
                rules: rules.then_some(true),
            };
            run_play(&options)
        }
        Commands::Solve {
            target,
            level,
            rounds,
            seed,
            verbose,
        } => run_solve_command(target, level, rounds, seed, verbose),
        Commands::Benchmark {
            count,
            length,
            level,
            rounds,
            seed,
        } => {
            let config = BenchmarkConfig {
                games: count,
                length,
                rounds,
                level,
                seed,
                show_progress: true,
            };
            run_benchmark_command(&config)
        }
    }
}

fn run_solve_command(
    target: String,
    level: Option<Level>,
    rounds: usize,
    seed: Option<u64>,
    verbose: bool,
) -> Result<()> {
    let config = SolveConfig {
        max_guesses: rounds,
        level,
        seed,
        ..SolveConfig::new(target)
    };
    let result = solve_target(&config).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(config: &BenchmarkConfig) -> Result<()> {
    println!(
        "Running benchmark on {} random {}-digit targets...",
        config.games, config.length
    );

    let result = run_benchmark(config)?;
    print_benchmark_result(&result);
    Ok(())
}
