//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{PlayOptions, Prompter, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_target, solve_with};
