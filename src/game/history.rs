//! Game history
//!
//! Append-only record of every guess in a game plus its final metadata.

use super::{Mode, Player};
use crate::core::{Digits, Score};
use std::time::Duration;

/// One guess as it was played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub player: Player,
    pub guess: Digits,
    pub score: Score,
    pub elapsed: Duration,
}

/// Everything needed to replay or summarize a finished game
#[derive(Debug, Clone)]
pub struct History {
    rounds: usize,
    target: Digits,
    mode: Mode,
    winner: Option<Player>,
    entries: Vec<HistoryEntry>,
}

impl History {
    #[must_use]
    pub const fn new(rounds: usize, target: Digits, mode: Mode) -> Self {
        Self {
            rounds,
            target,
            mode,
            winner: None,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn set_winner(&mut self, winner: Player) {
        self.winner = Some(winner);
    }

    /// Round budget the game was played with
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    #[must_use]
    pub const fn target(&self) -> &Digits {
        &self.target
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of guesses played so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total thinking time spent by one player
    #[must_use]
    pub fn time_spent_by(&self, player: Player) -> Duration {
        self.entries
            .iter()
            .filter(|e| e.player == player)
            .map(|e| e.elapsed)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(player: Player, guess: &[u8], score: Score, millis: u64) -> HistoryEntry {
        HistoryEntry {
            player,
            guess: Digits::new(guess).unwrap(),
            score,
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn history_records_in_order() {
        let target = Digits::new(&[4, 1, 2]).unwrap();
        let mut history = History::new(5, target, Mode::Compete);
        assert!(history.is_empty());

        history.push(entry(Player::Bot, &[0, 1, 2], Score::new(2, 0), 300));
        history.push(entry(Player::User, &[4, 1, 3], Score::new(2, 0), 2000));
        history.push(entry(Player::Bot, &[4, 1, 2], Score::new(3, 0), 200));
        history.set_winner(Player::Bot);

        assert_eq!(history.len(), 3);
        assert_eq!(history.rounds(), 5);
        assert_eq!(history.mode(), Mode::Compete);
        assert_eq!(history.target(), &target);
        assert_eq!(history.winner(), Some(Player::Bot));
        assert_eq!(history.entries()[1].player, Player::User);
        assert_eq!(history.time_spent_by(Player::Bot), Duration::from_millis(500));
        assert_eq!(history.time_spent_by(Player::Rival), Duration::ZERO);
    }
}
