//! Bot skill level
//!
//! Level 1 is the weakest and 10 the strongest. A level controls how often the
//! bot plays a random candidate instead of its best one, and how often it keeps
//! a candidate that contradicts the feedback.

use std::fmt;
use std::str::FromStr;

/// Skill level in 1..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

/// Error type for out-of-range levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    OutOfRange(i64),
    NotANumber(String),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(value) => write!(
                f,
                "Level must be between {} and {}, got {value}",
                Level::MIN.0,
                Level::MAX.0
            ),
            Self::NotANumber(input) => write!(f, "Level must be a number, got '{input}'"),
        }
    }
}

impl std::error::Error for LevelError {}

impl Level {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(10);

    /// Create a level, rejecting values outside 1..=10
    ///
    /// # Errors
    /// Returns `LevelError::OutOfRange` for values outside 1..=10.
    pub fn new(value: u8) -> Result<Self, LevelError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(LevelError::OutOfRange(i64::from(value)))
        }
    }

    /// Get the raw level value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Chance of deviating from the best play: `1 - level/10`
    ///
    /// ```
    /// use number_baseball::solver::Level;
    ///
    /// assert_eq!(Level::MAX.mistake_probability(), 0.0);
    /// assert!((Level::new(3).unwrap().mistake_probability() - 0.7).abs() < 1e-9);
    /// ```
    #[inline]
    #[must_use]
    pub fn mistake_probability(self) -> f64 {
        1.0 - f64::from(self.0) / 10.0
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| LevelError::NotANumber(trimmed.to_string()))?;
        u8::try_from(value)
            .map_err(|_| LevelError::OutOfRange(value))
            .and_then(Self::new)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_bounds() {
        assert!(Level::new(0).is_err());
        assert!(Level::new(11).is_err());
        assert_eq!(Level::new(1).unwrap(), Level::MIN);
        assert_eq!(Level::new(10).unwrap(), Level::MAX);
    }

    #[test]
    fn mistake_probability_scales_with_weakness() {
        assert!((Level::MIN.mistake_probability() - 0.9).abs() < 1e-9);
        assert!((Level::new(5).unwrap().mistake_probability() - 0.5).abs() < 1e-9);
        assert!(Level::MAX.mistake_probability().abs() < 1e-9);
    }

    #[test]
    fn level_from_str() {
        assert_eq!("7".parse::<Level>().unwrap().value(), 7);
        assert_eq!(" 10 ".parse::<Level>().unwrap(), Level::MAX);
        assert_eq!("-3".parse::<Level>(), Err(LevelError::OutOfRange(-3)));
        assert_eq!("300".parse::<Level>(), Err(LevelError::OutOfRange(300)));
        assert!(matches!("dum".parse::<Level>(), Err(LevelError::NotANumber(_))));
    }
}
