//! The search driver.
//!
//! Runs the iterate-until-budget loop — tree policy, rollout,
//! backpropagation — and exposes the final move decision. Each driver owns
//! one tree built around one root state; nothing survives into the next
//! decision.

use std::time::Instant;

use game_core::{GameError, GameState};
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::{BudgetKind, SearchBudget, SearchConfig};
use crate::node::NodeId;
use crate::rollout::RolloutPolicy;
use crate::tree::SearchTree;

/// Errors that can occur during a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The game-state collaborator failed; the current decision aborts.
    #[error(transparent)]
    Game(#[from] GameError),

    /// `expand` was called on a node with no untried actions left.
    #[error("expand called on a fully expanded node")]
    ExpandOnFullyExpandedNode,

    /// Selection encountered a child with zero recorded visits, for which
    /// the UCT score is undefined.
    #[error("selection reached a child with zero visits")]
    ZeroVisitSelection,

    /// Neither or both of the iteration and wall-clock limits were set, or
    /// the iteration limit was zero.
    #[error("exactly one of iterations or time_limit must be set, and iterations must be nonzero")]
    BudgetMisconfiguration,

    /// No action was available where one was required.
    #[error("no legal actions available")]
    NoLegalActions,
}

/// Result of a search: the chosen action plus summary statistics.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// Best action found, by plain visit-weighted score.
    pub action: A,

    /// Visits the chosen child received.
    pub visits: u64,

    /// Number of completed iterations.
    pub iterations: u64,
}

/// Monte Carlo tree search driver.
///
/// Owns the search tree for one move decision. Create it with the current
/// real game position, call [`best_action`](Mcts::best_action) once, and
/// drop it; the next decision starts from a fresh root.
pub struct Mcts<S: GameState, P: RolloutPolicy<S>> {
    tree: SearchTree<S>,
    rollout: P,
    config: SearchConfig,
}

impl<S: GameState, P: RolloutPolicy<S>> Mcts<S, P> {
    /// Create a search rooted at `root_state`.
    pub fn new(root_state: S, rollout: P, config: SearchConfig) -> Self {
        Self {
            tree: SearchTree::new(root_state),
            rollout,
            config,
        }
    }

    /// Walk from the root to the node the next rollout should start from.
    ///
    /// While the current node is non-terminal: expand it if it still has
    /// untried actions (returning the new child), otherwise descend to its
    /// best child under the configured exploration constant. Terminal nodes
    /// are returned as-is; their rollout yields the already-known result.
    fn tree_policy(&mut self) -> Result<NodeId, SearchError> {
        let mut current = self.tree.root();
        loop {
            if self.tree.get(current).is_terminal() {
                return Ok(current);
            }
            if !self.tree.get_mut(current).is_fully_expanded() {
                return self.tree.expand(current);
            }
            current = self
                .tree
                .best_child(current, self.config.exploration_constant)?;
        }
    }

    /// Run the search until the budget is exhausted and return the decision.
    ///
    /// The budget check happens after each full iteration; a wall-clock
    /// budget therefore never preempts a rollout and always admits at least
    /// one iteration. The final decision is the root child with the highest
    /// plain win rate (exploration constant 0).
    pub fn best_action(
        &mut self,
        budget: &SearchBudget,
    ) -> Result<SearchResult<S::Action>, SearchError> {
        let kind = budget.kind()?;
        let start = Instant::now();
        let mut iterations = 0u64;

        loop {
            let leaf = self.tree_policy()?;
            let result = self.tree.rollout(leaf, &mut self.rollout)?;
            self.tree.backpropagate(leaf, result);
            iterations += 1;

            trace!(leaf = leaf.0, ?result, iterations, "iteration complete");

            let exhausted = match kind {
                BudgetKind::Iterations(count) => iterations >= count,
                BudgetKind::TimeLimit(limit) => start.elapsed() >= limit,
            };
            if exhausted {
                break;
            }
        }

        let best = self.tree.best_child(self.tree.root(), 0.0)?;
        let node = self.tree.get(best);
        let action = node
            .action()
            .cloned()
            .ok_or(SearchError::NoLegalActions)?;

        debug!(
            iterations,
            visits = node.n(),
            tree_nodes = self.tree.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search decided"
        );

        Ok(SearchResult {
            action,
            visits: node.n(),
            iterations,
        })
    }

    /// The underlying tree, for inspection and tests.
    pub fn tree(&self) -> &SearchTree<S> {
        &self.tree
    }
}

/// Run one full root-to-decision cycle for `state` and return the move.
///
/// Intended for an outer game loop that alternates calling this until the
/// state is terminal. The search tree is built and discarded inside.
pub fn choose_move<S, P>(
    state: &S,
    rollout: P,
    config: SearchConfig,
    budget: &SearchBudget,
) -> Result<S::Action, SearchError>
where
    S: GameState,
    P: RolloutPolicy<S>,
{
    let mut search = Mcts::new(state.clone(), rollout, config);
    Ok(search.best_action(budget)?.action)
}
