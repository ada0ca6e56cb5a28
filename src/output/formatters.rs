//! Formatting utilities for terminal output

use crate::game::Player;
use std::time::Duration;

/// Label for the `index`-th (1-based) history line, e.g. `b03.`
#[must_use]
pub fn history_label(index: usize, player: Player) -> String {
    format!("{}{index:02}.", player.tag())
}

/// Format a duration as seconds with two decimals
#[must_use]
pub fn format_seconds(duration: Duration) -> String {
    format!("{:.2} sec", duration.as_secs_f64())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the original search space is left, on a log scale
///
/// A linear bar would look empty after the first guess, since pools usually
/// shrink by an order of magnitude per round.
#[must_use]
pub fn pool_bar(remaining: usize, total: usize, width: usize) -> String {
    let max = (total as f64 + 1.0).ln();
    create_progress_bar((remaining as f64 + 1.0).ln(), max, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_label_pads_index() {
        assert_eq!(history_label(1, Player::User), "u01.");
        assert_eq!(history_label(12, Player::Bot), "b12.");
        assert_eq!(history_label(3, Player::Rival), "r03.");
    }

    #[test]
    fn seconds_have_two_decimals() {
        assert_eq!(format_seconds(Duration::from_millis(1234)), "1.23 sec");
        assert_eq!(format_seconds(Duration::ZERO), "0.00 sec");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn pool_bar_extremes() {
        assert_eq!(pool_bar(720, 720, 8), "████████");
        assert_eq!(pool_bar(0, 720, 8), "░░░░░░░░");
    }
}
