//! Terminal output formatting
//!
//! Display utilities for games, CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_history, print_outcome, print_rules, print_solve_result,
    print_turn,
};
