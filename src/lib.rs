//! Number Baseball
//!
//! The digit-guessing game "number baseball" (Bulls and Cows) with a
//! candidate-elimination bot that can play perfectly or at a chosen skill level.
//!
//! # Quick Start
//!
//! ```rust
//! use number_baseball::core::{Digits, Score};
//!
//! let target = Digits::new(&[4, 1, 2]).unwrap();
//! let guess: Digits = "421".parse().unwrap();
//!
//! let score = Score::calculate(&target, &guess);
//! assert_eq!(score, Score::new(1, 2));
//! println!("{guess} : {}", score.verdict(3));
//! ```

// Core domain types
pub mod core;

// Candidate-elimination bot
pub mod solver;

// Game orchestration and history
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
