//! Core domain types for tic-tac-toe.

use super::phases::Outcome;
use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game (a seat, independent of who controls it).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Who plays which seat.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Both seats are human.
    #[default]
    #[serde(alias = "two")]
    #[strum(to_string = "two-player", serialize = "two")]
    TwoPlayer,
    /// X is human, O is the computer.
    #[serde(alias = "single")]
    #[strum(to_string = "single-player", serialize = "single")]
    SinglePlayer,
}

impl GameMode {
    /// Returns the seat played by the computer, if any.
    pub fn computer_seat(self) -> Option<Player> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::SinglePlayer => Some(Player::O),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in increasing index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact form: one character per square, `.` for empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            let c = match square {
                Square::Empty => '.',
                Square::Occupied(Player::X) => 'X',
                Square::Occupied(Player::O) => 'O',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Wrong number of squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
    /// Character that is not a mark or an empty marker.
    #[display("Invalid square character {:?}", _0)]
    InvalidSquare(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`, `O` and `.`/`_`/`-` (empty); whitespace and `|` are ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '_' | '-' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidSquare(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// False before the first reset and after a terminal result.
    active: bool,
    /// Seat assignment.
    mode: GameMode,
    /// Terminal result since the last reset.
    outcome: Option<Outcome>,
}

impl GameState {
    /// Creates the pre-mode-selection state: empty and inactive.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            active: false,
            mode: GameMode::default(),
            outcome: None,
        }
    }

    /// Creates a fresh active game with X to move.
    pub fn fresh(mode: GameMode) -> Self {
        Self {
            active: true,
            mode,
            ..Self::new()
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the terminal result, if the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Places the current player's mark (unchecked - use Game::apply_move for validation).
    pub(super) fn place(&mut self, pos: Position) {
        self.board.set(pos, Square::Occupied(self.current_player));
    }

    /// Hands the turn to the other seat.
    pub(super) fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Ends the game with the given outcome.
    pub(super) fn finish(&mut self, outcome: Outcome) {
        self.active = false;
        self.outcome = Some(outcome);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
