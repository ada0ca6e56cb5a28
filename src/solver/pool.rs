//! Weighted candidate pool
//!
//! Holds every digit sequence that could still be the target, ordered by a
//! heuristic weight so the best guess is always at the front.

use super::Permutations;
use crate::core::{Digits, Score};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::cmp::Reverse;

/// Weight every candidate starts with before it has ever been rewarded
pub const UNSCORED: u32 = 1000;

/// A possible target together with its ranking weight
///
/// An unscored candidate ranks at `UNSCORED`. Whether it has been rewarded is
/// tracked apart from the weight, so a reward total that happens to equal
/// `UNSCORED` is never mistaken for the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub digits: Digits,
    pub weight: u32,
    scored: bool,
}

impl Candidate {
    #[must_use]
    pub const fn new(digits: Digits) -> Self {
        Self {
            digits,
            weight: UNSCORED,
            scored: false,
        }
    }

    /// A candidate that has already earned `weight` in rewards
    #[must_use]
    pub const fn with_weight(digits: Digits, weight: u32) -> Self {
        Self {
            digits,
            weight,
            scored: true,
        }
    }

    /// Whether the candidate has earned any reward yet
    #[inline]
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.scored
    }

    /// Add `reward`, dropping the unscored sentinel first so it never counts as a bonus
    fn reward(&mut self, reward: u32) {
        if !self.scored {
            self.weight = 0;
            self.scored = true;
        }
        self.weight += reward;
    }
}

/// Candidates sorted by descending weight
///
/// Ties keep enumeration order, since sorting is stable.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    /// Build the full pool for sequences of `len` digits
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            candidates: Permutations::new(len).map(Candidate::new).collect(),
        }
    }

    /// Build a pool from explicit candidates, sorting them by weight
    #[must_use]
    pub fn from_candidates(mut candidates: Vec<Candidate>) -> Self {
        candidates.sort_by_key(|c| Reverse(c.weight));
        Self { candidates }
    }

    /// Number of candidates left
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Highest-weight candidate, if any remain
    #[inline]
    #[must_use]
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Uniformly random candidate, if any remain
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Candidate> {
        self.candidates.choose(rng)
    }

    /// Iterate over candidates from best to worst
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Reconcile the pool with the feedback `score` received for `guess`
    ///
    /// Candidates that would have produced `score` stay; if they share at least one
    /// position with the guess they earn `score.reward()`. Candidates that would not
    /// have produced it are kept only when `keep_inconsistent` says so, with their
    /// weight untouched. The pool is re-sorted afterwards.
    pub fn update<F>(&mut self, guess: &Digits, score: Score, mut keep_inconsistent: F)
    where
        F: FnMut(&Candidate) -> bool,
    {
        let reward = score.reward();
        self.candidates.retain_mut(|candidate| {
            let observed = Score::calculate(&candidate.digits, guess);
            if observed == score {
                if observed.strikes > 0 {
                    candidate.reward(reward);
                }
                true
            } else {
                keep_inconsistent(candidate)
            }
        });
        self.candidates.sort_by_key(|c| Reverse(c.weight));
    }
}
