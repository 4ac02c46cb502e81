//! Search tree with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by `NodeId` handles,
//! so parent back-references are plain indices and backpropagation is an
//! iterative walk instead of a recursion up the ancestor chain.

use game_core::{GameResult, GameState};

use crate::node::{NodeId, TwoPlayerNode};
use crate::rollout::{self, RolloutPolicy};
use crate::search::SearchError;

/// Search tree with arena-based node storage.
///
/// The tree lives for exactly one move decision: it is built around one root
/// state, grown by the search, and discarded with the driver.
pub struct SearchTree<S: GameState> {
    /// Arena storing all nodes
    nodes: Vec<TwoPlayerNode<S>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<S: GameState> SearchTree<S> {
    /// Create a new tree rooted at the given state.
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![TwoPlayerNode::new_root(root_state)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &TwoPlayerNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut TwoPlayerNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn allocate(&mut self, node: TwoPlayerNode<S>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Expand one untried action of `id`: pop the last cached action, apply
    /// it, and attach the resulting child node.
    ///
    /// Fails with [`SearchError::ExpandOnFullyExpandedNode`] when nothing is
    /// left to try; callers guard with `is_fully_expanded` as the tree
    /// policy does.
    pub fn expand(&mut self, id: NodeId) -> Result<NodeId, SearchError> {
        let node = self.get_mut(id);
        let action = node
            .pop_untried()
            .ok_or(SearchError::ExpandOnFullyExpandedNode)?;
        let child_state = node.state().apply(&action)?;

        let child_id = self.allocate(TwoPlayerNode::new_child(id, action, child_state));
        self.get_mut(id).children.push(child_id);
        Ok(child_id)
    }

    /// Select the child of `id` maximizing the UCT score, evaluated from the
    /// perspective of the player to move at `id`. Ties keep the first
    /// maximal child in expansion order.
    ///
    /// With `exploration_constant = 0` this degenerates to pure win-rate
    /// selection, used for the final move decision.
    ///
    /// Fails with [`SearchError::ZeroVisitSelection`] if any child has no
    /// recorded visits: the UCT score would be undefined, and the search
    /// invariant (every expanded child is visited by the iteration that
    /// created it) must have been broken.
    pub fn best_child(&self, id: NodeId, exploration_constant: f64) -> Result<NodeId, SearchError> {
        let node = self.get(id);
        if node.children().is_empty() {
            return Err(SearchError::NoLegalActions);
        }

        let perspective = node.state().next_to_move();
        let parent_visits = node.n();

        let mut best_id = node.children()[0];
        let mut best_score = f64::NEG_INFINITY;
        for &child_id in node.children() {
            let child = self.get(child_id);
            if child.n() == 0 {
                return Err(SearchError::ZeroVisitSelection);
            }
            let score = child.uct_score(parent_visits, exploration_constant, perspective);
            if score > best_score {
                best_id = child_id;
                best_score = score;
            }
        }
        Ok(best_id)
    }

    /// Random playout from the state at `id` to a terminal state.
    ///
    /// Pure simulation: the transient states visited are never attached to
    /// the tree and no node statistics are touched.
    pub fn rollout<P: RolloutPolicy<S>>(
        &self,
        id: NodeId,
        policy: &mut P,
    ) -> Result<GameResult, SearchError> {
        rollout::simulate(self.get(id).state(), policy)
    }

    /// Record `result` at `id` and every ancestor up to the root.
    ///
    /// The same raw result is recorded at every node on the path; each node
    /// reinterprets its tallies per perspective at selection time.
    pub fn backpropagate(&mut self, id: NodeId, result: GameResult) {
        let mut current = id;
        while current.is_some() {
            let node = self.get_mut(current);
            node.record(result);
            current = node.parent;
        }
    }
}
