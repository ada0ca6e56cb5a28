//! Strike/ball scoring
//!
//! A score counts, for each guess position:
//! - a strike when the guess digit sits at the same index in the target
//! - a ball when the digit is in the target but somewhere else

use super::Digits;
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub strikes: u8,
    pub balls: u8,
}

impl Score {
    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(strikes: u8, balls: u8) -> Self {
        Self { strikes, balls }
    }

    /// Calculate the score when `guess` is played against `target`
    ///
    /// Both sequences must have the same length; this is checked in debug builds only.
    ///
    /// # Examples
    /// ```
    /// use number_baseball::core::{Digits, Score};
    ///
    /// let target = Digits::new(&[4, 1, 2]).unwrap();
    /// let guess = Digits::new(&[4, 2, 1]).unwrap();
    ///
    /// // 4 is a strike, 2 and 1 are swapped
    /// assert_eq!(Score::calculate(&target, &guess), Score::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(target: &Digits, guess: &Digits) -> Self {
        debug_assert_eq!(
            target.len(),
            guess.len(),
            "target and guess must have the same length"
        );

        let mut score = Self::default();
        for (position, &digit) in guess.as_slice().iter().enumerate() {
            if target.digit_at(position) == digit {
                score.strikes += 1;
            } else if target.contains(digit) {
                score.balls += 1;
            }
        }
        score
    }

    /// Check whether every position of a `len`-digit sequence was a strike
    #[inline]
    #[must_use]
    pub const fn is_home_run(self, len: usize) -> bool {
        self.strikes as usize == len
    }

    /// Check if nothing matched at all
    #[inline]
    #[must_use]
    pub const fn is_out(self) -> bool {
        self.strikes == 0 && self.balls == 0
    }

    /// Weight bonus a candidate earns when it agrees with this score
    #[inline]
    #[must_use]
    pub const fn reward(self) -> u32 {
        self.strikes as u32 * 10 + self.balls as u32
    }

    /// Human readable verdict for a `len`-digit game: "OUT", "Home run!" or "1S 2B"
    #[must_use]
    pub fn verdict(self, len: usize) -> String {
        if self.is_out() {
            "OUT".to_string()
        } else if self.is_home_run(len) {
            "Home run!".to_string()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}S {}B", self.strikes, self.balls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(values: &[u8]) -> Digits {
        Digits::new(values).unwrap()
    }

    #[test]
    fn score_against_itself_is_home_run() {
        for values in [&[4u8, 1, 2][..], &[0][..], &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0][..]] {
            let t = digits(values);
            let score = Score::calculate(&t, &t);
            assert_eq!(score, Score::new(values.len() as u8, 0));
            assert!(score.is_home_run(values.len()));
        }
    }

    #[test]
    fn score_examples() {
        let target = digits(&[4, 1, 2]);
        assert_eq!(Score::calculate(&target, &digits(&[1, 8, 0])), Score::new(0, 1));
        assert_eq!(Score::calculate(&target, &digits(&[4, 5, 6])), Score::new(1, 0));
        assert_eq!(Score::calculate(&target, &digits(&[4, 2, 1])), Score::new(1, 2));
        assert_eq!(Score::calculate(&target, &digits(&[3, 5, 6])), Score::new(0, 0));
    }

    #[test]
    fn score_never_exceeds_length() {
        let target = digits(&[0, 1, 2, 3]);
        for guess in [[3, 2, 1, 0], [0, 1, 2, 3], [9, 8, 7, 6], [1, 0, 9, 3]] {
            let score = Score::calculate(&target, &digits(&guess));
            assert!(score.strikes as usize + score.balls as usize <= 4);
        }
    }

    #[test]
    fn reward_weights_strikes() {
        assert_eq!(Score::new(1, 1).reward(), 11);
        assert_eq!(Score::new(2, 0).reward(), 20);
        assert_eq!(Score::new(0, 3).reward(), 3);
    }

    #[test]
    fn verdict_formats() {
        assert_eq!(Score::new(0, 0).verdict(3), "OUT");
        assert_eq!(Score::new(3, 0).verdict(3), "Home run!");
        assert_eq!(Score::new(1, 2).verdict(3), "1S 2B");
        assert_eq!(Score::new(2, 0).verdict(4), "2S 0B");
    }
}
