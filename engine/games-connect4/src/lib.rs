//! Connect Four implementation of the [`GameState`] contract.
//!
//! Connect Four is a two-player connection game where players drop colored
//! discs into a 7-column, 6-row vertically suspended grid. The objective is
//! to be the first to form a horizontal, vertical, or diagonal line of four
//! discs. The line length is configurable (see [`State::with_win_length`]),
//! so "Connect Three" and "Connect Five" variants share this implementation.
//!
//! # Board Layout
//!
//! The board is stored in row-major order, with row 0 at the bottom:
//! ```text
//! Row 5: [35][36][37][38][39][40][41]  <- Top
//! Row 4: [28][29][30][31][32][33][34]
//! Row 3: [21][22][23][24][25][26][27]
//! Row 2: [14][15][16][17][18][19][20]
//! Row 1: [ 7][ 8][ 9][10][11][12][13]
//! Row 0: [ 0][ 1][ 2][ 3][ 4][ 5][ 6]  <- Bottom
//!         Col 0  1  2  3  4  5  6
//! ```

use std::fmt;

use game_core::{GameError, GameResult, GameState, Player};

/// Board dimensions
pub const COLS: usize = 7;
pub const ROWS: usize = 6;
pub const BOARD_SIZE: usize = COLS * ROWS; // 42

/// Default winning line length.
pub const DEFAULT_WIN_LENGTH: u8 = 4;

/// Connect Four action: drop a disc into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Drop a disc in the given column (0-6).
    Drop(u8),
}

impl Action {
    /// The column for this action.
    pub fn column(&self) -> u8 {
        match self {
            Action::Drop(col) => *col,
        }
    }
}

/// Connect Four game state.
///
/// A value type: [`GameState::apply`] derives a new state and leaves the
/// receiver untouched, so states can be shared across search-tree branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Board representation: 0=empty, 1=Red (player 1), 2=Yellow (player 2)
    /// Stored in row-major order with row 0 at the bottom
    board: [u8; BOARD_SIZE],
    /// Height of each column (number of discs already dropped into it)
    column_heights: [u8; COLS],
    /// Player to move next.
    to_move: Player,
    /// Cached outcome; `None` while the game is ongoing.
    outcome: Option<GameResult>,
    /// Discs in a row needed to win.
    win_length: u8,
}

impl State {
    /// Create the empty starting position with Red to move and the standard
    /// four-in-a-row win condition.
    pub fn new() -> Self {
        Self::with_win_length(DEFAULT_WIN_LENGTH)
    }

    /// Create the empty starting position with a custom winning line length.
    pub fn with_win_length(win_length: u8) -> Self {
        Self {
            board: [0; BOARD_SIZE],
            column_heights: [0; COLS],
            to_move: Player::One,
            outcome: None,
            win_length,
        }
    }

    /// The cell contents at (col, row): 0=empty, 1=Red, 2=Yellow.
    pub fn cell(&self, col: usize, row: usize) -> u8 {
        self.board[Self::pos(col, row)]
    }

    /// Number of discs in the given column.
    pub fn column_height(&self, col: usize) -> u8 {
        self.column_heights[col]
    }

    /// Convert column and row to board index
    #[inline]
    fn pos(col: usize, row: usize) -> usize {
        row * COLS + col
    }

    fn piece(player: Player) -> u8 {
        player.index() as u8 + 1
    }

    /// Check whether the disc just placed at (col, row) finishes the game.
    fn outcome_after(&self, col: usize, row: usize) -> Option<GameResult> {
        let player = self.board[Self::pos(col, row)];

        // Direction vectors: horizontal, vertical, diagonal /, diagonal \
        let directions: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

        for (dc, dr) in directions {
            let mut count = 1; // Count the disc we just placed

            // Count in positive direction
            let (mut c, mut r) = (col as i32 + dc, row as i32 + dr);
            while c >= 0 && c < COLS as i32 && r >= 0 && r < ROWS as i32 {
                if self.board[Self::pos(c as usize, r as usize)] == player {
                    count += 1;
                    c += dc;
                    r += dr;
                } else {
                    break;
                }
            }

            // Count in negative direction
            let (mut c, mut r) = (col as i32 - dc, row as i32 - dr);
            while c >= 0 && c < COLS as i32 && r >= 0 && r < ROWS as i32 {
                if self.board[Self::pos(c as usize, r as usize)] == player {
                    count += 1;
                    c -= dc;
                    r -= dr;
                } else {
                    break;
                }
            }

            if count >= self.win_length as i32 {
                let winner = if player == 1 { Player::One } else { Player::Two };
                return Some(GameResult::Win(winner));
            }
        }

        // Draw: board full without a winning line.
        if self.column_heights.iter().all(|&h| h >= ROWS as u8) {
            return Some(GameResult::Draw);
        }

        None
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for State {
    type Action = Action;

    fn legal_actions(&self) -> Vec<Action> {
        if self.outcome.is_some() {
            return Vec::new();
        }

        (0..COLS as u8)
            .filter(|&col| self.column_heights[col as usize] < ROWS as u8)
            .map(Action::Drop)
            .collect()
    }

    fn apply(&self, action: &Action) -> Result<Self, GameError> {
        let col = action.column() as usize;

        if self.outcome.is_some() {
            return Err(GameError::IllegalAction(
                "the game is already over".to_string(),
            ));
        }
        if col >= COLS {
            return Err(GameError::IllegalAction(format!(
                "column {} is off the board",
                col
            )));
        }
        if self.column_heights[col] >= ROWS as u8 {
            return Err(GameError::IllegalAction(format!("column {} is full", col)));
        }

        let mut next = self.clone();
        let row = self.column_heights[col] as usize;
        next.board[Self::pos(col, row)] = Self::piece(self.to_move);
        next.column_heights[col] += 1;

        next.outcome = next.outcome_after(col, row);
        if next.outcome.is_none() {
            next.to_move = self.to_move.opponent();
        }
        Ok(next)
    }

    fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    fn result(&self) -> Result<GameResult, GameError> {
        self.outcome.ok_or(GameError::NotTerminal)
    }

    fn next_to_move(&self) -> Player {
        self.to_move
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const GLYPHS: [char; 3] = ['.', 'X', 'O'];
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", GLYPHS[self.board[Self::pos(col, row)] as usize])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
