//! Core traits and types for two-player, zero-sum, perfect-information games.
//!
//! This crate defines the capability boundary the search engine consumes:
//! - `GameState`: immutable board position that enumerates and applies moves
//! - `Player` / `GameResult`: the shared two-player vocabulary
//! - `GameError`: the collaborator error taxonomy
//!
//! Game crates (e.g. `games-connect4`, `games-tictactoe`) implement
//! `GameState`; the `mcts` crate works against it and nothing else.

use std::fmt;

use thiserror::Error;

/// One of the two players. Identity is absolute: it never changes meaning as
/// moves are applied, and all result bookkeeping is keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The player who moves first in the initial position.
    One,
    /// The player who moves second.
    Two,
}

impl Player {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Stable index for per-player tally arrays (0 or 1).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// The given player won.
    Win(Player),
    /// Neither player won.
    Draw,
}

impl GameResult {
    /// The winning player, if any.
    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Win(p) => Some(p),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win(p) => write!(f, "{} wins", p),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Errors raised by a game-state collaborator.
///
/// These indicate a defect in the caller or the game implementation and are
/// not recoverable within a single search.
#[derive(Debug, Error)]
pub enum GameError {
    /// `apply` received an action outside the current legal set.
    #[error("illegal action: {0}")]
    IllegalAction(String),

    /// `result` was queried on a state that is not terminal.
    #[error("game result queried on a non-terminal state")]
    NotTerminal,
}

/// An immutable two-player game position.
///
/// Implementations must be value types: `apply` derives a new state and never
/// mutates the receiver, so states can be shared across sibling branches of a
/// search tree without corruption.
///
/// # Contract
///
/// - `legal_actions` is deterministic given the same state (the engine's
///   expansion order depends on it) and empty iff the state is terminal.
/// - `apply` succeeds for every action returned by `legal_actions` and fails
///   with [`GameError::IllegalAction`] for anything else, including any
///   action on a terminal state.
/// - `result` is defined only for terminal states and fails with
///   [`GameError::NotTerminal`] otherwise.
/// - `next_to_move` alternates between the two players as actions are
///   applied. The engine does not re-check this; the game must guarantee it.
pub trait GameState: Clone {
    /// A move. Opaque to the engine.
    type Action: Clone + fmt::Debug + PartialEq;

    /// All legal actions in this position, in a deterministic order.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Apply one action, producing a new independent state.
    fn apply(&self, action: &Self::Action) -> Result<Self, GameError>;

    /// Whether the game is over in this position.
    fn is_terminal(&self) -> bool;

    /// The outcome of a terminal position.
    fn result(&self) -> Result<GameResult, GameError>;

    /// The player whose turn it is.
    fn next_to_move(&self) -> Player;
}
