//! Game orchestration
//!
//! A `Game` owns the hidden target, the round budget, the bots and the history.
//! Callers ask whose turn it is, supply a guess for human turns, and let the game
//! pull guesses from bots on bot turns. Every guess is scored, recorded and shown
//! to every bot at the table.

mod history;

pub use history::{History, HistoryEntry};

use crate::core::{Digits, DigitsError, Score};
use crate::solver::{Bot, BotError, Clock, ClockType, Level};
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::Duration;

/// Round budget used when none is given
pub const DEFAULT_ROUNDS: usize = 10;

/// Sequence length used when none is given
pub const DEFAULT_LENGTH: usize = 3;

/// Who is at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The human at the keyboard
    User,
    /// The main bot
    Bot,
    /// The second bot in a bot-versus-bot game
    Rival,
}

impl Player {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Bot => "Bot",
            Self::Rival => "Rival",
        }
    }

    /// Single-letter tag used when listing history
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::User => 'u',
            Self::Bot => 'b',
            Self::Rival => 'r',
        }
    }

    #[must_use]
    pub const fn is_bot(self) -> bool {
        !matches!(self, Self::User)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Who plays which rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Mode {
    /// The user guesses every round
    Alone,
    /// The bot guesses every round
    Auto,
    /// Bot and user alternate, bot first
    Compete,
    /// Two bots alternate, `Bot` first
    Dual,
}

impl Mode {
    pub const ALL: [Self; 4] = [Self::Alone, Self::Auto, Self::Compete, Self::Dual];

    /// Player who guesses in the zero-based `round`
    #[must_use]
    pub const fn player_for_round(self, round: usize) -> Player {
        match self {
            Self::Alone => Player::User,
            Self::Auto => Player::Bot,
            Self::Compete if round % 2 == 0 => Player::Bot,
            Self::Compete => Player::User,
            Self::Dual if round % 2 == 0 => Player::Bot,
            Self::Dual => Player::Rival,
        }
    }

    /// Bots seated in this mode
    #[must_use]
    pub const fn bots(self) -> &'static [Player] {
        match self {
            Self::Alone => &[],
            Self::Auto | Self::Compete => &[Player::Bot],
            Self::Dual => &[Player::Bot, Player::Rival],
        }
    }

    /// Whether running out of rounds is a draw rather than a loss
    #[must_use]
    pub const fn is_contest(self) -> bool {
        matches!(self, Self::Compete | Self::Dual)
    }

    /// Parse a menu answer: either the 1-based number or the mode name
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        let choice = choice.trim();
        if let Ok(number) = choice.parse::<usize>() {
            return number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        Self::from_str(choice, true).ok()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Alone => "Alone",
            Self::Auto => "Auto",
            Self::Compete => "Compete",
            Self::Dual => "Dual",
        };
        f.write_str(name)
    }
}

/// Settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rounds: usize,
    pub length: usize,
    pub mode: Mode,
    /// Level of `Player::Bot`; `None` plays strictly
    pub level: Option<Level>,
    /// Level of `Player::Rival` in dual games
    pub rival_level: Option<Level>,
    /// Whether bots really pause while "thinking"
    pub delay: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            length: DEFAULT_LENGTH,
            mode: Mode::Auto,
            level: None,
            rival_level: None,
            delay: true,
        }
    }
}

impl GameConfig {
    /// Level configured for a given bot seat
    #[must_use]
    pub const fn level_for(&self, player: Player) -> Option<Level> {
        match player {
            Player::Rival => self.rival_level,
            Player::User | Player::Bot => self.level,
        }
    }
}

/// Errors that stop a game from proceeding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Digits(DigitsError),
    Bot(BotError),
    /// The target does not have the configured length
    TargetLength { expected: usize, got: usize },
    /// A seated bot plays a different length than the game
    BotLength {
        player: Player,
        expected: usize,
        got: usize,
    },
    /// A guess was offered for a player whose turn it is not
    NotYourTurn { expected: Player, got: Player },
    /// The game already has a result
    Finished,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digits(e) => write!(f, "{e}"),
            Self::Bot(e) => write!(f, "{e}"),
            Self::TargetLength { expected, got } => {
                write!(f, "Target must have {expected} digits, got {got}")
            }
            Self::BotLength {
                player,
                expected,
                got,
            } => write!(f, "{player} plays {got}-digit numbers, game needs {expected}"),
            Self::NotYourTurn { expected, got } => {
                write!(f, "It is {expected}'s turn, not {got}'s")
            }
            Self::Finished => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Digits(e) => Some(e),
            Self::Bot(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DigitsError> for GameError {
    fn from(e: DigitsError) -> Self {
        Self::Digits(e)
    }
}

impl From<BotError> for GameError {
    fn from(e: BotError) -> Self {
        Self::Bot(e)
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Someone hit a home run
    Won(Player),
    /// The round budget ran out in a solo game
    Lost,
    /// The round budget ran out in a contest
    Draw,
    /// A bot ran out of candidates; the opponent, if any, wins
    Forfeit { by: Player, winner: Option<Player> },
}

impl Outcome {
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Won(player) => Some(player),
            Self::Forfeit { winner, .. } => winner,
            Self::Lost | Self::Draw => None,
        }
    }
}

/// Result of one played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Zero-based round index
    pub round: usize,
    pub player: Player,
    pub guess: Digits,
    pub score: Score,
    pub elapsed: Duration,
    /// Remaining candidates of each seated bot after seeing this guess
    pub pool_sizes: Vec<(Player, usize)>,
}

impl Turn {
    #[must_use]
    pub fn is_home_run(&self) -> bool {
        self.score.is_home_run(self.guess.len())
    }

    /// Remaining candidates for one bot, if it is seated
    #[must_use]
    pub fn pool_size(&self, player: Player) -> Option<usize> {
        self.pool_sizes
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, size)| *size)
    }
}

/// A single game in progress
pub struct Game<R = StdRng, C = ClockType> {
    config: GameConfig,
    target: Digits,
    bots: Vec<(Player, Bot<R, C>)>,
    history: History,
    round: usize,
    outcome: Option<Outcome>,
}

impl Game {
    /// Start a game with a random target and OS-seeded bots
    ///
    /// # Errors
    /// Returns `GameError` if the configured length is invalid.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let target = Digits::random(config.length, &mut rand::rng())?;
        let clock = ClockType::from_delay(config.delay);
        Self::with_bots(config, target, |_, level| {
            Bot::with_parts(config.length, level, StdRng::from_os_rng(), clock)
        })
    }
}

impl<R: Rng, C: Clock> Game<R, C> {
    /// Start a game with a known target, building each seated bot with `make_bot`
    ///
    /// `make_bot` receives the seat and the level configured for it.
    ///
    /// # Errors
    /// Returns `GameError` if the target length does not match the configuration or a
    /// bot cannot be built.
    pub fn with_bots<F>(
        config: GameConfig,
        target: Digits,
        mut make_bot: F,
    ) -> Result<Self, GameError>
    where
        F: FnMut(Player, Option<Level>) -> Result<Bot<R, C>, BotError>,
    {
        if target.len() != config.length {
            return Err(GameError::TargetLength {
                expected: config.length,
                got: target.len(),
            });
        }

        let bots = config
            .mode
            .bots()
            .iter()
            .map(|&player| make_bot(player, config.level_for(player)).map(|bot| (player, bot)))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some((player, bot)) = bots.iter().find(|(_, b)| b.length() != config.length) {
            return Err(GameError::BotLength {
                player: *player,
                expected: config.length,
                got: bot.length(),
            });
        }

        let mut game = Self {
            config,
            target,
            bots,
            history: History::new(config.rounds, target, config.mode),
            round: 0,
            outcome: None,
        };
        game.settle_budget();
        Ok(game)
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The hidden target
    #[must_use]
    pub const fn target(&self) -> &Digits {
        &self.target
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Number of rounds played so far
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Final result, once the game is over
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Player expected to guess next, or `None` once the game is over
    #[must_use]
    pub const fn current_player(&self) -> Option<Player> {
        if self.outcome.is_some() {
            None
        } else {
            Some(self.config.mode.player_for_round(self.round))
        }
    }

    /// Remaining candidates of a seated bot
    #[must_use]
    pub fn pool_size(&self, player: Player) -> Option<usize> {
        self.bot(player).map(Bot::size)
    }

    fn bot(&self, player: Player) -> Option<&Bot<R, C>> {
        self.bots.iter().find(|(p, _)| *p == player).map(|(_, b)| b)
    }

    /// Let the bot whose turn it is guess and score it
    ///
    /// If that bot has no candidates left it forfeits; the game ends and the
    /// forfeit is reported as `GameError::Bot(BotError::Exhausted)`.
    ///
    /// # Errors
    /// Returns `GameError` if the game is over, it is the user's turn, or the bot is
    /// exhausted.
    pub fn play_bot_turn(&mut self) -> Result<Turn, GameError> {
        let player = self.current_player().ok_or(GameError::Finished)?;
        let Some((_, bot)) = self.bots.iter_mut().find(|(p, _)| *p == player) else {
            return Err(GameError::NotYourTurn {
                expected: player,
                got: Player::Bot,
            });
        };

        match bot.guess() {
            Ok((guess, elapsed)) => self.submit(player, guess, elapsed),
            Err(e) => {
                self.forfeit(player);
                Err(e.into())
            }
        }
    }

    /// Score a guess made by the user
    ///
    /// # Errors
    /// Returns `GameError` if the game is over, it is not the user's turn, or the guess
    /// has the wrong length.
    pub fn play_user_turn(&mut self, guess: Digits, elapsed: Duration) -> Result<Turn, GameError> {
        let player = self.current_player().ok_or(GameError::Finished)?;
        if player != Player::User {
            return Err(GameError::NotYourTurn {
                expected: player,
                got: Player::User,
            });
        }
        self.submit(player, guess, elapsed)
    }

    fn submit(
        &mut self,
        player: Player,
        guess: Digits,
        elapsed: Duration,
    ) -> Result<Turn, GameError> {
        if guess.len() != self.config.length {
            return Err(GameError::Digits(DigitsError::WrongCount {
                expected: self.config.length,
                got: guess.len(),
            }));
        }

        if let Some((_, bot)) = self.bots.iter().find(|(_, b)| b.length() != guess.len()) {
            return Err(GameError::Bot(BotError::LengthMismatch {
                expected: bot.length(),
                got: guess.len(),
            }));
        }

        let score = Score::calculate(&self.target, &guess);
        self.history.push(HistoryEntry {
            player,
            guess,
            score,
            elapsed,
        });

        let home_run = score.is_home_run(self.config.length);
        let mut exhausted = None;
        for (seat, bot) in &mut self.bots {
            match bot.update(&guess, score) {
                Ok(()) => {}
                Err(BotError::Exhausted) => {
                    exhausted.get_or_insert(*seat);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let turn = Turn {
            round: self.round,
            player,
            guess,
            score,
            elapsed,
            pool_sizes: self.bots.iter().map(|(p, b)| (*p, b.size())).collect(),
        };
        self.round += 1;

        if home_run {
            self.history.set_winner(player);
            self.outcome = Some(Outcome::Won(player));
        } else if let Some(seat) = exhausted {
            self.forfeit(seat);
        } else {
            self.settle_budget();
        }

        Ok(turn)
    }

    /// End the game because `player`'s bot has nothing left to guess
    fn forfeit(&mut self, player: Player) {
        let winner = match self.config.mode {
            Mode::Compete => Some(Player::User),
            Mode::Dual if player == Player::Bot => Some(Player::Rival),
            Mode::Dual => Some(Player::Bot),
            Mode::Alone | Mode::Auto => None,
        };
        if let Some(winner) = winner {
            self.history.set_winner(winner);
        }
        self.outcome = Some(Outcome::Forfeit { by: player, winner });
    }

    fn settle_budget(&mut self) {
        if self.outcome.is_none() && self.round >= self.config.rounds {
            self.outcome = Some(if self.config.mode.is_contest() {
                Outcome::Draw
            } else {
                Outcome::Lost
            });
        }
    }

    /// Give up ownership of the record once play is finished
    #[must_use]
    pub fn into_history(self) -> History {
        self.history
    }
}
