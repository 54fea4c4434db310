//! Game state, move validation and capture resolution

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Pos, DEFAULT_HEIGHT, DEFAULT_WIDTH, DIRECTIONS};
use crate::error::{EngineError, RejectReason};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Cell value for this player's discs
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Winner of a finished game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Black,
    White,
    Draw,
}

/// Final result, fixed once both players had to pass
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Winner,
    pub black_count: usize,
    pub white_count: usize,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Black {} : White {} - ", self.black_count, self.white_count)?;
        match self.winner {
            Winner::Black => write!(f, "Black wins"),
            Winner::White => write!(f, "White wins"),
            Winner::Draw => write!(f, "Draw"),
        }
    }
}

/// Disc counts for the current board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: usize,
    pub white: usize,
    pub empty: usize,
}

impl Score {
    /// Higher count wins, equal counts draw
    pub fn winner(&self) -> Winner {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Winner::Black,
            std::cmp::Ordering::Less => Winner::White,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }

    pub fn total(&self) -> usize {
        self.black + self.white + self.empty
    }

    pub fn into_result(self) -> GameResult {
        GameResult {
            winner: self.winner(),
            black_count: self.black,
            white_count: self.white,
        }
    }
}

/// Engine lifecycle state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Terminal,
}

/// What a successful move did
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Player who placed the disc
    pub player: Player,
    pub pos: Pos,
    /// Opponent discs turned to the mover's color
    pub flipped: Vec<Pos>,
    /// Player forced to pass right after this move
    pub skipped: Option<Player>,
    /// Set when this move ended the game
    pub result: Option<GameResult>,
}

/// Read-only view of the game for rendering or serialization
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Cells indexed `grid[x][y]`
    pub grid: Vec<Vec<Cell>>,
    pub current_player: Player,
    pub status: Status,
    pub result: Option<GameResult>,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// A single game session
///
/// Owns the board and turn state. Only [`GameState::attempt_move`] and
/// [`GameState::initialize`] mutate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    result: Option<GameResult>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game on the default 8x8 board
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT).expect("default dimensions are valid")
    }

    /// New game on a custom board size
    pub fn with_size(width: u8, height: u8) -> Result<Self, EngineError> {
        Ok(Self::from_position(Board::standard(width, height)?, Player::Black))
    }

    /// Game continuing from an arbitrary position
    ///
    /// No pass or end-of-game check is made here; the position is taken as is.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        Self {
            board,
            current_player: to_move,
            result: None,
        }
    }

    /// Reset to the opening position, keeping the board size
    pub fn initialize(&mut self) {
        self.board.reset_to_opening();
        self.current_player = Player::Black;
        self.result = None;
        tracing::debug!(
            "Game initialized on {}x{} board",
            self.board.width(),
            self.board.height()
        );
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move (the last mover once the game is over)
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn status(&self) -> Status {
        if self.result.is_some() {
            Status::Terminal
        } else {
            Status::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Cell at position
    pub fn cell(&self, pos: Pos) -> Result<Cell, EngineError> {
        self.board.get(pos).ok_or_else(|| self.out_of_bounds(pos))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            grid: self.board.columns(),
            current_player: self.current_player,
            status: self.status(),
            result: self.result,
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Count discs of each color
    pub fn score(&self) -> Score {
        Score {
            black: self.board.count(Cell::Black),
            white: self.board.count(Cell::White),
            empty: self.board.count(Cell::Empty),
        }
    }

    /// Opponent discs that `player` would flip by playing at `pos`
    ///
    /// Empty when the move is illegal (off the board, occupied, or no
    /// bracketed run in any direction). Does not touch the board.
    pub fn captures(&self, pos: Pos, player: Player) -> Vec<Pos> {
        if self.board.get(pos) != Some(Cell::Empty) {
            return Vec::new();
        }

        let mut flipped = Vec::new();
        for dir in DIRECTIONS {
            let run = self.bracketed_run(pos, dir, player);
            let mut current = pos;
            for _ in 0..run {
                match self.board.step(current, dir) {
                    Some(next) => {
                        flipped.push(next);
                        current = next;
                    }
                    None => break,
                }
            }
        }
        flipped
    }

    /// True if `player` may place a disc at `pos`
    pub fn is_legal_move(&self, pos: Pos, player: Player) -> bool {
        self.board.get(pos) == Some(Cell::Empty)
            && DIRECTIONS
                .iter()
                .any(|&dir| self.bracketed_run(pos, dir, player) > 0)
    }

    /// All legal placements for `player`, row-major
    pub fn legal_moves(&self, player: Player) -> Vec<Pos> {
        self.board
            .positions()
            .filter(|&pos| self.is_legal_move(pos, player))
            .collect()
    }

    pub fn has_any_legal_move(&self, player: Player) -> bool {
        self.board
            .positions()
            .any(|pos| self.is_legal_move(pos, player))
    }

    // ========================================================================
    // APPLY MOVE
    // ========================================================================

    /// Place a disc for the current player
    ///
    /// On success all captures are applied and the turn advances, skipping
    /// an opponent with no legal move. If neither side can move afterwards the
    /// game ends. On error the state is unchanged.
    pub fn attempt_move(&mut self, pos: Pos) -> Result<MoveRecord, EngineError> {
        if self.result.is_some() {
            return Err(EngineError::GameAlreadyOver);
        }

        let player = self.current_player;
        let flipped = match self.validate_move(pos, player) {
            Ok(flipped) => flipped,
            Err(e) => {
                tracing::trace!("Rejected move {} by {}: {}", pos, player, e);
                return Err(e);
            }
        };

        self.board.put(pos, player.cell());
        for &captured in &flipped {
            self.board.put(captured, player.cell());
        }

        tracing::debug!("{} played {} flipping {} disc(s)", player, pos, flipped.len());

        let (skipped, result) = self.end_turn(player);

        Ok(MoveRecord {
            player,
            pos,
            flipped,
            skipped,
            result,
        })
    }

    fn validate_move(&self, pos: Pos, player: Player) -> Result<Vec<Pos>, EngineError> {
        match self.board.get(pos) {
            None => return Err(self.out_of_bounds(pos)),
            Some(Cell::Empty) => {}
            Some(_) => {
                return Err(EngineError::InvalidMove {
                    pos,
                    reason: RejectReason::Occupied,
                })
            }
        }

        let flipped = self.captures(pos, player);
        if flipped.is_empty() {
            return Err(EngineError::InvalidMove {
                pos,
                reason: RejectReason::NoCapture,
            });
        }
        Ok(flipped)
    }

    /// Hand the turn over, handling forced passes and the double pass
    fn end_turn(&mut self, mover: Player) -> (Option<Player>, Option<GameResult>) {
        let opponent = mover.opponent();
        self.current_player = opponent;
        if self.has_any_legal_move(opponent) {
            return (None, None);
        }

        // Opponent passes
        self.current_player = mover;
        if self.has_any_legal_move(mover) {
            tracing::debug!("{} has no legal move and passes", opponent);
            return (Some(opponent), None);
        }

        let result = self.score().into_result();
        self.result = Some(result);
        tracing::info!("Game over: {}", result);
        (Some(opponent), Some(result))
    }

    // ========================================================================
    // CAPTURE SCAN
    // ========================================================================

    /// Length of the opponent run starting next to `pos` in `dir` that is
    /// closed by one of `player`'s discs; 0 when there is no such run
    fn bracketed_run(&self, pos: Pos, dir: (i8, i8), player: Player) -> usize {
        let own = player.cell();
        let other = player.opponent().cell();
        let mut run = 0;
        let mut current = pos;

        while let Some(next) = self.board.step(current, dir) {
            let cell = self.board.at(next);
            if cell == other {
                run += 1;
                current = next;
            } else if cell == own {
                return run;
            } else {
                return 0;
            }
        }
        0
    }

    fn out_of_bounds(&self, pos: Pos) -> EngineError {
        EngineError::OutOfBounds {
            pos,
            width: self.board.width(),
            height: self.board.height(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
