use super::board::{Board, MoveError, DEFAULT_COLS, DEFAULT_ROWS};
use super::detect;
use super::player::{Player, Side};

/// How a game stands: still running, won by one side, or drawn with a
/// full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Side),
    Tie,
}

/// Complete state of one game: the grid, the two contestants, whose turn
/// it is, and the outcome. All transitions go through [`drop_piece`].
///
/// [`drop_piece`]: GameState::drop_piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current: Side,
    outcome: Outcome,
}

impl GameState {
    /// Start a game on the standard 6-row, 7-column board. Side one moves
    /// first.
    pub fn new(player_one: Player, player_two: Player) -> Self {
        Self::with_board_size(player_one, player_two, DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Start a game on a board with the given dimensions. Side one moves
    /// first.
    pub fn with_board_size(
        player_one: Player,
        player_two: Player,
        rows: usize,
        cols: usize,
    ) -> Self {
        GameState {
            board: Board::new(rows, cols),
            players: [player_one, player_two],
            current: Side::One,
            outcome: Outcome::InProgress,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose turn it is. Once a game is won this stays on the
    /// winner; the turn marker never advances past a terminal move.
    pub fn current_side(&self) -> Side {
        self.current
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// The player seated on the given side
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Get the game outcome
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Check if the game has reached a terminal outcome
    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Drop the current side's piece into `column`.
    ///
    /// On success returns the landing `(row, col)`. The outcome is then
    /// re-evaluated, wins before ties, and the turn passes to the other
    /// side only when the game is still in progress. Once the outcome is
    /// terminal every further call fails with
    /// [`MoveError::GameAlreadyOver`], whatever the column, and nothing
    /// changes.
    pub fn drop_piece(&mut self, column: usize) -> Result<(usize, usize), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let row = self.board.drop_piece(column, self.current)?;

        if detect::has_win_at(&self.board, row, column, self.current) {
            self.outcome = Outcome::Win(self.current);
        } else if self.board.is_full() {
            self.outcome = Outcome::Tie;
        } else {
            self.current = self.current.other();
        }

        Ok((row, column))
    }
}
