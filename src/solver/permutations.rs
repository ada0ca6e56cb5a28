//! Lazy enumeration of every digit sequence of a given length
//!
//! Sequences are produced in lexicographic order, so `0 1 2` comes first and
//! `9 8 7` last for length 3.

use crate::core::{ALPHABET, Digits, MAX_LENGTH};

/// Iterator over all ordered arrangements of `len` distinct digits
///
/// Yields 10!/(10-len)! sequences. It cannot be rewound; build a new one to restart.
#[derive(Debug, Clone)]
pub struct Permutations {
    len: usize,
    slots: [u8; MAX_LENGTH],
    remaining: usize,
}

impl Permutations {
    /// Start the enumeration at `0 1 .. len-1`
    ///
    /// Yields nothing if `len` is not within 1..=10.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            slots: std::array::from_fn(|d| d as u8),
            remaining: Self::count(len),
        }
    }

    /// Number of sequences for a given length: 10!/(10-len)!, or 0 outside 1..=10
    #[must_use]
    pub fn count(len: usize) -> usize {
        if !(1..=MAX_LENGTH).contains(&len) {
            return 0;
        }
        (0..len).map(|i| usize::from(ALPHABET) - i).product()
    }

    /// Step `slots` to the next arrangement in lexicographic order
    fn advance(&mut self) {
        let len = self.len;
        for i in (0..len).rev() {
            let used = mask_of(&self.slots[..i]);
            let Some(next) = (self.slots[i] + 1..ALPHABET).find(|&d| used & (1 << d) == 0) else {
                continue;
            };

            self.slots[i] = next;
            let mut used = used | 1 << next;
            for slot in &mut self.slots[i + 1..len] {
                // len <= 10 so a free digit always exists
                let fill = (0..ALPHABET).find(|&d| used & (1 << d) == 0).unwrap_or(0);
                *slot = fill;
                used |= 1 << fill;
            }
            return;
        }
    }
}

fn mask_of(digits: &[u8]) -> u16 {
    digits.iter().fold(0u16, |mask, &d| mask | 1 << d)
}

impl Iterator for Permutations {
    type Item = Digits;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = Digits::from_slots(&self.slots, self.len);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Permutations {}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn count_matches_formula() {
        assert_eq!(Permutations::count(1), 10);
        assert_eq!(Permutations::count(2), 90);
        assert_eq!(Permutations::count(3), 720);
        assert_eq!(Permutations::count(4), 5040);
        assert_eq!(Permutations::count(10), 3_628_800);
    }

    #[test]
    fn out_of_range_lengths_yield_nothing() {
        assert_eq!(Permutations::count(0), 0);
        assert_eq!(Permutations::count(11), 0);
        assert_eq!(Permutations::new(0).next(), None);
        assert_eq!(Permutations::new(11).len(), 0);
    }

    #[test]
    fn yields_every_sequence_once() {
        for len in 1..=4 {
            let all: Vec<Digits> = Permutations::new(len).collect();
            assert_eq!(all.len(), Permutations::count(len));

            let unique: FxHashSet<Digits> = all.iter().copied().collect();
            assert_eq!(unique.len(), all.len());
            assert!(all.iter().all(|d| d.len() == len));
        }
    }

    #[test]
    fn lexicographic_order() {
        let all: Vec<Digits> = Permutations::new(3).collect();
        assert_eq!(all[0].as_slice(), &[0, 1, 2]);
        assert_eq!(all[1].as_slice(), &[0, 1, 3]);
        assert_eq!(all[7].as_slice(), &[0, 1, 9]);
        assert_eq!(all[8].as_slice(), &[0, 2, 1]);
        assert_eq!(all.last().unwrap().as_slice(), &[9, 8, 7]);
        assert!(all.windows(2).all(|w| w[0].as_slice() < w[1].as_slice()));
    }

    #[test]
    fn single_digit_sequences() {
        let all: Vec<u8> = Permutations::new(1).map(|d| d.digit_at(0)).collect();
        assert_eq!(all, (0..10).collect::<Vec<u8>>());
    }

    #[test]
    fn size_hint_tracks_progress() {
        let mut perms = Permutations::new(2);
        assert_eq!(perms.len(), 90);
        perms.next();
        perms.next();
        assert_eq!(perms.len(), 88);
    }
}
