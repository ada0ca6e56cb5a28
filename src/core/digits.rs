//! Digit sequence representation
//!
//! A `Digits` value stores up to ten distinct decimal digits along with a presence
//! mask, so membership checks during scoring are a single bit test.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Longest possible sequence: every digit of the alphabet once
pub const MAX_LENGTH: usize = 10;

/// Size of the digit alphabet (0-9)
pub const ALPHABET: u8 = 10;

/// An ordered sequence of distinct digits, used for both targets and guesses
///
/// Stored inline as a fixed array, so the type is `Copy` and a candidate pool of
/// millions of entries needs no per-entry allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digits {
    digits: [u8; MAX_LENGTH],
    len: u8,
    mask: u16,
}

/// Error type for invalid digit sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitsError {
    /// Length outside 1..=10
    InvalidLength(usize),
    /// Input had a different number of digits than required
    WrongCount { expected: usize, got: usize },
    /// Input contained something other than a decimal digit
    NotADigit(String),
    /// The same digit appeared twice
    Duplicate(u8),
}

impl fmt::Display for DigitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Length must be between 1 and {MAX_LENGTH}, got {len}")
            }
            Self::WrongCount { expected, .. } => {
                write!(f, "Invalid input! Please input {expected}-digit number.")
            }
            Self::NotADigit(token) => {
                write!(f, "Invalid input! Please input number ('{token}' is not a digit).")
            }
            Self::Duplicate(digit) => {
                write!(f, "Invalid input! Please input distinct number ({digit} repeats).")
            }
        }
    }
}

impl std::error::Error for DigitsError {}

impl Digits {
    /// Create a digit sequence from a slice of digits
    ///
    /// # Errors
    /// Returns `DigitsError` if:
    /// - Length is not within 1..=10
    /// - A value is not a decimal digit
    /// - A digit repeats
    ///
    /// # Examples
    /// ```
    /// use number_baseball::core::Digits;
    ///
    /// let digits = Digits::new(&[4, 1, 2]).unwrap();
    /// assert_eq!(digits.to_string(), "4 1 2");
    ///
    /// assert!(Digits::new(&[1, 1, 2]).is_err());
    /// assert!(Digits::new(&[]).is_err());
    /// ```
    pub fn new(values: &[u8]) -> Result<Self, DigitsError> {
        check_length(values.len())?;

        let mut digits = [0u8; MAX_LENGTH];
        let mut mask = 0u16;
        for (slot, &value) in digits.iter_mut().zip(values) {
            if value >= ALPHABET {
                return Err(DigitsError::NotADigit(value.to_string()));
            }
            if mask & (1 << value) != 0 {
                return Err(DigitsError::Duplicate(value));
            }
            mask |= 1 << value;
            *slot = value;
        }

        Ok(Self {
            digits,
            len: values.len() as u8,
            mask,
        })
    }

    /// Build from an array already known to hold `len` distinct digits
    pub(crate) fn from_slots(slots: &[u8; MAX_LENGTH], len: usize) -> Self {
        debug_assert!((1..=MAX_LENGTH).contains(&len));
        let mut digits = [0u8; MAX_LENGTH];
        digits[..len].copy_from_slice(&slots[..len]);
        let mask = digits[..len].iter().fold(0u16, |mask, &d| mask | 1 << d);
        Self {
            digits,
            len: len as u8,
            mask,
        }
    }

    /// Parse a human-entered guess of exactly `len` digits
    ///
    /// Digits may be separated by spaces, by commas, or not separated at all.
    ///
    /// # Errors
    /// Returns `DigitsError` for a wrong digit count, a non-digit token or a
    /// repeated digit.
    ///
    /// # Examples
    /// ```
    /// use number_baseball::core::Digits;
    ///
    /// let a = Digits::parse_input("412", 3).unwrap();
    /// let b = Digits::parse_input("4 1 2", 3).unwrap();
    /// let c = Digits::parse_input("4,1,2", 3).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(b, c);
    /// ```
    pub fn parse_input(input: &str, len: usize) -> Result<Self, DigitsError> {
        check_length(len)?;
        let tokens = tokenize(input);

        if tokens.len() != len {
            return Err(DigitsError::WrongCount {
                expected: len,
                got: tokens.len(),
            });
        }

        Self::from_tokens(&tokens)
    }

    fn from_tokens(tokens: &[&str]) -> Result<Self, DigitsError> {
        let values = tokens
            .iter()
            .map(|token| match token.parse::<u8>() {
                Ok(value) if value < ALPHABET && token.len() == 1 => Ok(value),
                _ => Err(DigitsError::NotADigit((*token).to_string())),
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Self::new(&values)
    }

    /// Draw `len` distinct digits uniformly at random
    ///
    /// # Errors
    /// Returns `DigitsError::InvalidLength` if `len` is not within 1..=10.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self, DigitsError> {
        check_length(len)?;
        let mut alphabet: [u8; MAX_LENGTH] = std::array::from_fn(|d| d as u8);
        alphabet.shuffle(rng);
        Ok(Self::from_slots(&alphabet, len))
    }

    /// Number of digits in the sequence
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false: sequences hold at least one digit
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the digits as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.digits[..self.len()]
    }

    /// Get the digit at a specific position
    ///
    /// # Panics
    /// Panics if position >= 10
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Check if the sequence contains a specific digit
    #[inline]
    #[must_use]
    pub const fn contains(&self, digit: u8) -> bool {
        digit < ALPHABET && self.mask & (1 << digit) != 0
    }
}

/// Split on commas if present, else on whitespace, else into single characters
fn tokenize(input: &str) -> Vec<&str> {
    let input = input.trim();
    if input.contains(',') {
        input.split(',').map(str::trim).collect()
    } else if input.contains(char::is_whitespace) {
        input.split_whitespace().collect()
    } else {
        input
            .char_indices()
            .map(|(i, c)| &input[i..i + c.len_utf8()])
            .collect()
    }
}

fn check_length(len: usize) -> Result<(), DigitsError> {
    if (1..=MAX_LENGTH).contains(&len) {
        Ok(())
    } else {
        Err(DigitsError::InvalidLength(len))
    }
}

impl FromStr for Digits {
    type Err = DigitsError;

    /// Parse `"412"`, `"4 1 2"` or `"4,1,2"`; the length is the number of digits given
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tokens(&tokenize(s))
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn digits_creation_valid() {
        let digits = Digits::new(&[4, 1, 2]).unwrap();
        assert_eq!(digits.as_slice(), &[4, 1, 2]);
        assert_eq!(digits.len(), 3);
        assert!(!digits.is_empty());
    }

    #[test]
    fn digits_creation_full_alphabet() {
        let all: Vec<u8> = (0..10).rev().collect();
        let digits = Digits::new(&all).unwrap();
        assert_eq!(digits.len(), 10);
        assert!((0..10).all(|d| digits.contains(d)));
    }

    #[test]
    fn digits_creation_invalid_length() {
        assert!(matches!(Digits::new(&[]), Err(DigitsError::InvalidLength(0))));
        let too_long = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0];
        assert!(matches!(
            Digits::new(&too_long),
            Err(DigitsError::InvalidLength(11))
        ));
    }

    #[test]
    fn digits_creation_rejects_duplicates_and_non_digits() {
        assert_eq!(Digits::new(&[3, 5, 3]), Err(DigitsError::Duplicate(3)));
        assert!(matches!(
            Digits::new(&[1, 12]),
            Err(DigitsError::NotADigit(_))
        ));
    }

    #[test]
    fn parse_input_separators() {
        let expected = Digits::new(&[7, 0, 3]).unwrap();
        assert_eq!(Digits::parse_input("703", 3).unwrap(), expected);
        assert_eq!(Digits::parse_input("7 0 3", 3).unwrap(), expected);
        assert_eq!(Digits::parse_input("7,0,3", 3).unwrap(), expected);
        assert_eq!(Digits::parse_input("7, 0, 3", 3).unwrap(), expected);
        assert_eq!(Digits::parse_input("  703 \n", 3).unwrap(), expected);
    }

    #[test]
    fn parse_input_errors() {
        assert_eq!(
            Digits::parse_input("12", 3),
            Err(DigitsError::WrongCount {
                expected: 3,
                got: 2
            })
        );
        assert_eq!(
            Digits::parse_input("1a3", 3),
            Err(DigitsError::NotADigit("a".to_string()))
        );
        assert_eq!(
            Digits::parse_input("10 2 3", 3),
            Err(DigitsError::NotADigit("10".to_string()))
        );
        assert_eq!(Digits::parse_input("121", 3), Err(DigitsError::Duplicate(1)));
        assert!(matches!(
            Digits::parse_input("1", 0),
            Err(DigitsError::InvalidLength(0))
        ));
    }

    #[test]
    fn from_str_uses_input_length() {
        let digits: Digits = "0918".parse().unwrap();
        assert_eq!(digits.as_slice(), &[0, 9, 1, 8]);
        assert!("09x".parse::<Digits>().is_err());
        assert!("".parse::<Digits>().is_err());
    }

    #[test]
    fn from_str_accepts_input_separators() {
        let expected = Digits::new(&[4, 1, 2]).unwrap();
        assert_eq!("4 1 2".parse::<Digits>().unwrap(), expected);
        assert_eq!("4,1,2".parse::<Digits>().unwrap(), expected);
        assert_eq!(" 4, 1, 2 ".parse::<Digits>().unwrap(), expected);
        assert_eq!("4 1 1".parse::<Digits>(), Err(DigitsError::Duplicate(1)));
        assert_eq!(
            "4 12".parse::<Digits>(),
            Err(DigitsError::NotADigit("12".to_string()))
        );
    }

    #[test]
    fn random_digits_are_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..=MAX_LENGTH {
            let digits = Digits::random(len, &mut rng).unwrap();
            assert_eq!(digits.len(), len);
            // Rebuilding through the validating constructor proves distinctness
            assert_eq!(Digits::new(digits.as_slice()).unwrap(), digits);
        }
        assert!(Digits::random(11, &mut rng).is_err());
    }

    #[test]
    fn digits_contains() {
        let digits = Digits::new(&[4, 1, 2]).unwrap();
        assert!(digits.contains(4));
        assert!(digits.contains(2));
        assert!(!digits.contains(0));
        assert!(!digits.contains(10));
    }

    #[test]
    fn digits_display() {
        let digits = Digits::new(&[0, 5, 9]).unwrap();
        assert_eq!(format!("{digits}"), "0 5 9");
    }

    #[test]
    fn digits_equality_ignores_unused_slots() {
        let mut slots = [9u8; MAX_LENGTH];
        slots[..3].copy_from_slice(&[4, 1, 2]);
        assert_eq!(
            Digits::from_slots(&slots, 3),
            Digits::new(&[4, 1, 2]).unwrap()
        );
    }
}
