//! Core domain types for number baseball
//!
//! Pure value types with no I/O: digit sequences and their strike/ball scores.

mod digits;
mod score;

pub use digits::{ALPHABET, Digits, DigitsError, MAX_LENGTH};
pub use score::Score;
