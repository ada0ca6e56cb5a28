//! Interactive console game
//!
//! Prompts for the game settings that were not given on the command line, then
//! plays one game after another until the user declines a rematch.

use crate::core::{Digits, MAX_LENGTH};
use crate::game::{Game, GameConfig, GameError, Mode, Player};
use crate::output::{print_history, print_outcome, print_rules, print_turn};
use crate::solver::Level;
use anyhow::Result;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

/// Settings supplied on the command line; anything missing is asked for
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub rounds: Option<usize>,
    pub length: Option<usize>,
    pub mode: Option<Mode>,
    pub level: Option<Level>,
    pub rival_level: Option<Level>,
    /// Play every bot strictly and skip the level prompts
    pub strict: bool,
    pub no_delay: bool,
    /// `Some(true)` prints the rules without asking
    pub rules: Option<bool>,
}

/// Run interactive games on stdin/stdout
///
/// # Errors
///
/// Returns an error if the terminal cannot be read from or written to.
pub fn run_play(options: &PlayOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock());

    loop {
        clear_screen()?;
        println!("{}\n", "Welcome to Number Baseball!".bright_cyan().bold());

        let show_rules = match options.rules {
            Some(show) => show,
            None => prompter.ask_yes_no("Show rule? (y/n) : ")?,
        };

        let config = prompter.ask_config(options)?;
        if show_rules {
            print_rules(config.length);
        }

        play_game(config, &mut prompter)?;

        println!();
        if !prompter.ask_yes_no("Play again? (y/n) : ")? {
            return Ok(());
        }
    }
}

fn play_game<R: BufRead>(config: GameConfig, prompter: &mut Prompter<R>) -> Result<()> {
    let mut game = Game::new(config)?;

    while let Some(player) = game.current_player() {
        let round = game.round() + 1;
        match config.mode {
            Mode::Compete | Mode::Dual if player == Player::User => {
                println!("\nRound {round} (Your turn)");
            }
            Mode::Compete | Mode::Dual => println!("\nRound {round} ({player}'s turn)"),
            Mode::Alone | Mode::Auto => println!("\nRound {round}"),
        }

        let turn = if player.is_bot() {
            match game.play_bot_turn() {
                Ok(turn) => {
                    println!(
                        "> Input {}-digit number: {}",
                        config.length,
                        turn.guess.to_string().bright_magenta()
                    );
                    turn
                }
                Err(GameError::Bot(e)) => {
                    println!("{} {e}", format!("{player} gives up:").red());
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        } else {
            let (guess, elapsed) = prompter.ask_guess(config.length)?;
            game.play_user_turn(guess, elapsed)?
        };

        print_turn(&turn, config.length);
    }

    println!();
    if let Some(outcome) = game.outcome() {
        print_outcome(outcome, config.mode);
    }
    println!();
    print_history(game.history());
    Ok(())
}

fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

/// Line-based question/answer helper
///
/// Invalid answers are reported and the question is asked again. End of input
/// is an error rather than an endless loop.
pub struct Prompter<R> {
    reader: R,
}

impl<R: BufRead> Prompter<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(input.trim().to_string())
    }

    /// Ask until `parse` accepts the answer
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, String>,
    ) -> io::Result<T> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(message) => println!("{}", message.red()),
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error on I/O failure or end of input.
    pub fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self.ask(prompt)?.eq_ignore_ascii_case("y"))
    }

    /// # Errors
    ///
    /// Returns an error on I/O failure or end of input.
    pub fn ask_rounds(&mut self) -> io::Result<usize> {
        self.ask_until("> Number of rounds : ", |answer| {
            answer
                .parse::<usize>()
                .map_err(|_| "Invalid input! Please input number.".to_string())
        })
    }

    /// # Errors
    ///
    /// Returns an error on I/O failure or end of input.
    pub fn ask_length(&mut self) -> io::Result<usize> {
        self.ask_until("> Length of number : ", |answer| {
            match answer.parse::<usize>() {
                Err(_) => Err("Invalid input! Please input number.".to_string()),
                Ok(length) if length > MAX_LENGTH => Err(format!(
                    "Invalid input! Please input number no more than {MAX_LENGTH}."
                )),
                Ok(0) => Err("Invalid input! Please input number of at least 1.".to_string()),
                Ok(length) => Ok(length),
            }
        })
    }

    /// # Errors
    ///
    /// Returns an error on I/O failure or end of input.
    pub fn ask_mode(&mut self) -> io::Result<Mode> {
        self.ask_until(
            "> Mode [1: Alone, 2: Auto, 3: Compete, 4: Dual] : ",
            |answer| {
                Mode::from_choice(answer)
                    .ok_or_else(|| "Invalid input! Please input 1, 2, 3, or 4.".to_string())
            },
        )
    }

    /// Ask for a bot level; a blank answer means a strict bot
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or end of input.
    pub fn ask_level(&mut self, player: Player) -> io::Result<Option<Level>> {
        let prompt = format!(
            "> Set the level of the {} [ 1: dum - 10: smart, blank: strict ] : ",
            player.name().to_lowercase()
        );
        self.ask_until(&prompt, |answer| {
            if answer.is_empty() {
                return Ok(None);
            }
            answer
                .parse::<Level>()
                .map(Some)
                .map_err(|_| "Invalid input! Please input number between 1 and 10".to_string())
        })
    }

    /// Ask the user for a guess, timing how long they took
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or end of input.
    pub fn ask_guess(&mut self, length: usize) -> io::Result<(Digits, Duration)> {
        let start = Instant::now();
        let prompt = format!("> Input {length}-digit number: ");
        let guess = self.ask_until(&prompt, |answer| {
            Digits::parse_input(answer, length).map_err(|e| e.to_string())
        })?;
        Ok((guess, start.elapsed()))
    }

    /// Fill in every setting missing from `options`
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or end of input.
    pub fn ask_config(&mut self, options: &PlayOptions) -> io::Result<GameConfig> {
        let rounds = match options.rounds {
            Some(rounds) => rounds,
            None => self.ask_rounds()?,
        };
        let length = match options.length {
            Some(length) => length,
            None => self.ask_length()?,
        };
        let mode = match options.mode {
            Some(mode) => mode,
            None => self.ask_mode()?,
        };

        let mut level = options.level;
        let mut rival_level = options.rival_level;
        if !options.strict {
            let seats = mode.bots();
            if level.is_none() && seats.contains(&Player::Bot) {
                level = self.ask_level(Player::Bot)?;
            }
            if rival_level.is_none() && seats.contains(&Player::Rival) {
                rival_level = self.ask_level(Player::Rival)?;
            }
        }

        Ok(GameConfig {
            rounds,
            length,
            mode,
            level,
            rival_level,
            delay: !options.no_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn asks_again_after_invalid_rounds() {
        let mut p = prompter("ten\n-1\n7\n");
        assert_eq!(p.ask_rounds().unwrap(), 7);
    }

    #[test]
    fn length_must_be_in_range() {
        let mut p = prompter("11\n0\nx\n4\n");
        assert_eq!(p.ask_length().unwrap(), 4);
    }

    #[test]
    fn mode_accepts_number_or_name() {
        let mut p = prompter("9\n3\n");
        assert_eq!(p.ask_mode().unwrap(), Mode::Compete);
        let mut p = prompter("dual\n");
        assert_eq!(p.ask_mode().unwrap(), Mode::Dual);
    }

    #[test]
    fn blank_level_means_strict() {
        let mut p = prompter("\n");
        assert_eq!(p.ask_level(Player::Bot).unwrap(), None);
        let mut p = prompter("0\n12\n8\n");
        assert_eq!(p.ask_level(Player::Bot).unwrap(), Some(Level::new(8).unwrap()));
    }

    #[test]
    fn guess_is_reprompted_until_valid() {
        let mut p = prompter("12\n1 1 2\n1,a,2\n4 1 2\n");
        let (guess, _) = p.ask_guess(3).unwrap();
        assert_eq!(guess, Digits::new(&[4, 1, 2]).unwrap());
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut p = prompter("abc\n");
        let err = p.ask_rounds().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn yes_no_is_case_insensitive() {
        let mut p = prompter("Y\nn\n");
        assert!(p.ask_yes_no("? ").unwrap());
        assert!(!p.ask_yes_no("? ").unwrap());
    }

    #[test]
    fn config_prompts_only_for_missing_values() {
        let options = PlayOptions {
            rounds: Some(8),
            mode: Some(Mode::Dual),
            level: Some(Level::MAX),
            no_delay: true,
            ..PlayOptions::default()
        };
        // Length, then the rival level
        let mut p = prompter("4\n3\n");
        let config = p.ask_config(&options).unwrap();

        assert_eq!(config.rounds, 8);
        assert_eq!(config.length, 4);
        assert_eq!(config.mode, Mode::Dual);
        assert_eq!(config.level, Some(Level::MAX));
        assert_eq!(config.rival_level, Some(Level::new(3).unwrap()));
        assert!(!config.delay);
    }

    #[test]
    fn strict_option_skips_level_prompts() {
        let options = PlayOptions {
            rounds: Some(5),
            length: Some(3),
            mode: Some(Mode::Compete),
            strict: true,
            ..PlayOptions::default()
        };
        let mut p = prompter("");
        let config = p.ask_config(&options).unwrap();
        assert_eq!(config.level, None);
        assert!(config.delay);
    }

    #[test]
    fn alone_mode_has_no_level_prompt() {
        let options = PlayOptions {
            rounds: Some(5),
            length: Some(3),
            mode: Some(Mode::Alone),
            ..PlayOptions::default()
        };
        let mut p = prompter("");
        assert_eq!(p.ask_config(&options).unwrap().level, None);
    }
}
