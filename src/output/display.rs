//! Display functions for games and command results

use super::formatters::{create_progress_bar, format_seconds, history_label, pool_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::game::{History, Mode, Outcome, Player, Turn};
use crate::solver::Permutations;
use colored::Colorize;

/// Print how the game is played for sequences of `length` digits
pub fn print_rules(length: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {}", "RULES".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    println!("A secret {length}-digit number with no repeated digits is hidden.");
    println!("Each round a guess of {length} distinct digits is scored:");
    println!("  {}  right digit in the right place", "S (strike)".green());
    println!("  {}    right digit in the wrong place", "B (ball)".yellow());
    println!("  {}         no digit in common", "OUT".red());
    println!("{length} strikes is a {}.", "Home run!".bright_green().bold());
    println!("Digits may be typed as `4 1 2`, `4,1,2` or `412`.");
    println!("{}\n", "─".repeat(60).cyan());
}

/// Print the verdict line of a played turn, with the bots' remaining candidates
pub fn print_turn(turn: &Turn, length: usize) {
    let verdict = turn.score.verdict(length);
    let verdict = if turn.is_home_run() {
        verdict.bright_green().bold()
    } else if turn.score.is_out() {
        verdict.red()
    } else {
        verdict.yellow()
    };

    let pools = turn
        .pool_sizes
        .iter()
        .map(|(player, size)| match turn.pool_sizes.len() {
            1 => size.to_string(),
            _ => format!("{}: {size}", player.tag()),
        })
        .collect::<Vec<_>>();

    if pools.is_empty() {
        println!("{} : {verdict}", turn.guess);
    } else {
        println!(
            "{} : {verdict} {}",
            turn.guess,
            format!("({})", pools.join(", ")).bright_black()
        );
    }

    if let Some(&(_, size)) = turn.pool_sizes.first() {
        let total = Permutations::count(length);
        println!("   [{}]", pool_bar(size, total, 30).cyan());
    }
}

/// Print the end-of-game verdict from the user's point of view
pub fn print_outcome(outcome: Outcome, mode: Mode) {
    let message = match outcome {
        Outcome::Won(Player::User) => "You win!".green().bold(),
        Outcome::Won(player) if mode == Mode::Dual => format!("{player} wins!").green().bold(),
        Outcome::Won(_) if mode == Mode::Compete => "Bot wins!".red().bold(),
        Outcome::Won(_) => "Bot wins!".green().bold(),
        Outcome::Lost if mode == Mode::Alone => "You lose!".red().bold(),
        Outcome::Lost => "Bot loses!".red().bold(),
        Outcome::Draw => "Draw!".yellow().bold(),
        Outcome::Forfeit { by, winner } => {
            println!("{}", format!("{by} ran out of candidates.").bright_black());
            match winner {
                Some(Player::User) => "You win!".green().bold(),
                Some(player) => format!("{player} wins!").green().bold(),
                None => format!("{by} loses!").red().bold(),
            }
        }
    };
    println!("{message}");
}

/// Print the record of a finished game
pub fn print_history(history: &History) {
    println!("{}", "Game History:".bright_cyan().bold());
    println!("- Mode: {}", history.mode());
    println!("- Rounds: {}", history.rounds());
    println!("- Target: {}", history.target().to_string().bright_yellow());
    match history.winner() {
        Some(winner) => println!("- Winner: {winner}"),
        None => println!("- Winner: None"),
    }
    println!("- History:");

    let length = history.target().len();
    for (i, entry) in history.entries().iter().enumerate() {
        let msg = entry.score.verdict(length);
        println!(
            "  {} {} : {msg:<10} - {}",
            history_label(i + 1, entry.player),
            entry.guess,
            format_seconds(entry.elapsed)
        );
    }

    for player in [Player::User, Player::Bot, Player::Rival] {
        if history.entries().iter().any(|e| e.player == player) {
            println!(
                "- {player} thinking time: {}",
                format_seconds(history.time_spent_by(player))
            );
        }
    }
}

/// Print the result of solving a target
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_string().bright_yellow().bold()
    );
    match result.level {
        Some(level) => println!("Level:   {}", level.value()),
        None => println!("Level:   strict"),
    }
    println!("{}", "─".repeat(60).cyan());

    let length = result.target.len();
    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} : {}",
            i + 1,
            step.guess,
            step.score.verdict(length)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Remaining:  [{}]",
                pool_bar(step.candidates_after, result.initial_candidates, 30).green()
            );
            println!("  Thought:    {}", format_seconds(step.elapsed));
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else if result.exhausted {
        println!(
            "{}",
            format!(
                "❌ Ran out of candidates after {} guesses",
                result.guesses.len()
            )
            .red()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let config = &result.config;
    println!("\n⚙️  {}", "Setup:".bright_cyan().bold());
    println!("   Length:           {}", config.length);
    println!("   Round budget:     {}", config.rounds);
    match config.level {
        Some(level) => println!("   Level:            {}", level.value()),
        None => println!("   Level:            strict"),
    }
    println!("   Seed:             {}", config.seed);

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green()
    );
    if result.failed > 0 {
        println!(
            "   Out of rounds:    {}",
            result.failed.to_string().red()
        );
    }
    if result.exhausted > 0 {
        println!(
            "   Out of candidates: {}",
            result.exhausted.to_string().red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count:2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }
}
