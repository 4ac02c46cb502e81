//! Monte Carlo Tree Search for two-player, zero-sum, perfect-information
//! games.
//!
//! This crate provides a game-agnostic search engine that works with any
//! game implementing the `game-core` [`GameState`](game_core::GameState)
//! contract. Each search iteration runs four phases:
//!
//! 1. **Selection**: walk from the root through fully expanded nodes,
//!    following the UCT score, until a node with untried actions (or a
//!    terminal node) is found
//! 2. **Expansion**: attach one new child for a previously untried action
//! 3. **Rollout**: play random moves from the new node to a terminal state
//! 4. **Backpropagation**: record the result at every node on the path back
//!    to the root
//!
//! After the budget expires the root child with the highest plain win rate
//! (no exploration bonus) is the move to play.
//!
//! # Usage
//!
//! ```
//! use game_core::GameState;
//! use mcts::{choose_move, SearchBudget, SearchConfig, UniformRandom};
//!
//! let state = games_tictactoe::State::new();
//! let action = choose_move(
//!     &state,
//!     UniformRandom::seeded(42),
//!     SearchConfig::default(),
//!     &SearchBudget::iterations(200),
//! )
//! .unwrap();
//! assert!(state.legal_actions().contains(&action));
//! ```
//!
//! The search is single-threaded and stateless across invocations: every
//! move decision builds a fresh tree and discards it.

pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::{SearchBudget, SearchConfig};
pub use node::{NodeId, TwoPlayerNode};
pub use rollout::{RolloutPolicy, UniformRandom};
pub use search::{choose_move, Mcts, SearchError, SearchResult};
pub use tree::SearchTree;
