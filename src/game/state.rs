use std::fmt;

use tracing::{debug, info, instrument};

use super::{Board, Player, Position, WIN_LENGTH};
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    InProgress,
    Won(Player),
    Tie,
}

impl GameResult {
    /// Won and Tie are terminal; only a reset leaves them.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "in progress"),
            GameResult::Won(player) => write!(f, "{player} won"),
            GameResult::Tie => write!(f, "tie"),
        }
    }
}

/// Where a piece landed and what it did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    pub player: Player,
    pub result: GameResult,
}

/// Outcome of a move that was not a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied(Placement),
    /// The column had no room. Nothing changed and the turn did not pass.
    ColumnFull,
}

/// One game session: the grid, whose turn it is, and the result so far.
///
/// Mutated only through [`GameState::apply_move`] and [`GameState::reset`].
/// There is no internal synchronization; each session owns its own instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    result: GameResult,
    move_count: usize,
    last_move: Option<Position>,
}

impl GameState {
    /// Create an empty `height` x `width` game with Player One to move.
    ///
    /// Dimensions below 4 are accepted but no four-in-a-row can ever form.
    #[instrument]
    pub fn initialize(height: usize, width: usize) -> Result<Self, BoardError> {
        let board = Board::new(height, width)?;
        debug!("new game");
        Ok(GameState {
            board,
            current_player: Player::One,
            result: GameResult::InProgress,
            move_count: 0,
            last_move: None,
        })
    }

    /// Discard the board, turn, and result, keeping the dimensions.
    #[instrument(skip(self), fields(previous = %self.result))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::One;
        self.result = GameResult::InProgress;
        self.move_count = 0;
        self.last_move = None;
        debug!("game reset");
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.result.is_terminal()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// Number of pieces successfully placed this game
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Row a piece dropped into `column` would land on, `None` if full.
    pub fn find_landing_row(&self, column: usize) -> Result<Option<usize>, MoveError> {
        self.board.landing_row(column)
    }

    pub fn check_for_win(&self, player: Player) -> bool {
        self.board.check_for_win(player)
    }

    pub fn winning_cells(&self, player: Player) -> Option<[Position; WIN_LENGTH]> {
        self.board.winning_cells(player)
    }

    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A full column is reported as [`MoveOutcome::ColumnFull`] and leaves
    /// everything untouched. After a placement the mover is checked for a win
    /// first, then the board for a tie; only if neither does the turn pass.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            debug!(result = %self.result, "move rejected, game already over");
            return Err(MoveError::GameAlreadyOver {
                result: self.result,
            });
        }

        let player = self.current_player;
        let Some(row) = self.board.drop_piece(column, player)? else {
            debug!("column full, move ignored");
            return Ok(MoveOutcome::ColumnFull);
        };

        let position = Position::new(row, column);
        self.move_count += 1;
        self.last_move = Some(position);

        // Only the piece just placed can have completed a line.
        self.result = if self.board.is_winning_move(position) {
            GameResult::Won(player)
        } else if self.board.is_full() {
            GameResult::Tie
        } else {
            self.current_player = player.other();
            GameResult::InProgress
        };

        debug!(row, "piece placed");
        if self.result.is_terminal() {
            info!(result = %self.result, moves = self.move_count, "game over");
        }

        Ok(MoveOutcome::Applied(Placement {
            position,
            player,
            result: self.result,
        }))
    }
}
