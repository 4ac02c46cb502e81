//! Search-tree node representation.
//!
//! Each node wraps one game state plus the statistics accumulated by
//! backpropagation: a visit count and win tallies keyed by absolute player
//! identity. Tallies are read from a perspective only at selection time.

use game_core::{GameResult, GameState, Player};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the search tree.
///
/// Every rollout that passes through (or originates at) a node records its
/// raw game result here, so each node's tallies cover all rollouts in its
/// subtree. [`q`](TwoPlayerNode::q) reinterprets them from the asking
/// player's perspective.
pub struct TwoPlayerNode<S: GameState> {
    /// Parent node index (NONE for the root)
    pub(crate) parent: NodeId,
    /// Action that led to this node from the parent (None for the root)
    pub(crate) action: Option<S::Action>,
    /// Child node indices, in expansion order
    pub(crate) children: Vec<NodeId>,
    /// Game state at this node
    state: S,
    /// Number of rollouts backpropagated through this node
    visits: u64,
    /// Win counts keyed by absolute player identity
    wins: [u64; 2],
    /// Drawn rollout count
    draws: u64,
    /// Legal actions not yet expanded; computed once on first access and
    /// only ever shrunk by expansion
    untried: Option<Vec<S::Action>>,
}

impl<S: GameState> TwoPlayerNode<S> {
    /// Create a root node wrapping the current real game position.
    pub fn new_root(state: S) -> Self {
        Self {
            parent: NodeId::NONE,
            action: None,
            children: Vec::new(),
            state,
            visits: 0,
            wins: [0, 0],
            draws: 0,
            untried: None,
        }
    }

    /// Create a child node reached by `action` from its parent.
    pub fn new_child(parent: NodeId, action: S::Action, state: S) -> Self {
        Self {
            parent,
            action: Some(action),
            children: Vec::new(),
            state,
            visits: 0,
            wins: [0, 0],
            draws: 0,
            untried: None,
        }
    }

    /// The wrapped game state.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The action that produced this node, absent on the root.
    #[inline]
    pub fn action(&self) -> Option<&S::Action> {
        self.action.as_ref()
    }

    /// Child handles in expansion order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Visit count.
    #[inline]
    pub fn n(&self) -> u64 {
        self.visits
    }

    /// Rollout wins recorded for the given player.
    #[inline]
    pub fn wins_for(&self, player: Player) -> u64 {
        self.wins[player.index()]
    }

    /// Drawn rollouts recorded at this node.
    #[inline]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Signed score from `perspective`'s point of view: wins for that player
    /// minus wins for the opponent, read from this node's own tallies.
    ///
    /// Selection always asks with the PARENT's next-to-move, which encodes
    /// "how good this move was for the player who chose it".
    #[inline]
    pub fn q(&self, perspective: Player) -> i64 {
        self.wins_for(perspective) as i64 - self.wins_for(perspective.opponent()) as i64
    }

    /// Record one backpropagated result: a visit plus the tally for `result`.
    pub fn record(&mut self, result: GameResult) {
        self.visits += 1;
        match result {
            GameResult::Win(p) => self.wins[p.index()] += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    /// Whether the wrapped state is terminal.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Legal actions not yet expanded from this node.
    ///
    /// The first call computes and caches the game's legal actions; later
    /// calls return the cached, already-shrunk list without consulting the
    /// game state again.
    pub fn untried_actions(&mut self) -> &[S::Action] {
        self.untried
            .get_or_insert_with(|| self.state.legal_actions())
            .as_slice()
    }

    /// Remove and return the action expansion should try next (the last of
    /// the cached sequence).
    pub(crate) fn pop_untried(&mut self) -> Option<S::Action> {
        self.untried
            .get_or_insert_with(|| self.state.legal_actions())
            .pop()
    }

    /// True iff no untried actions remain.
    pub fn is_fully_expanded(&mut self) -> bool {
        self.untried_actions().is_empty()
    }

    /// UCT score of this node as seen from its parent:
    /// `q/n + c * sqrt(2 ln N / n)` with `N` the parent's visit count.
    ///
    /// Callers must guarantee `n > 0` (see `SearchTree::best_child`).
    #[inline]
    pub fn uct_score(&self, parent_visits: u64, c: f64, perspective: Player) -> f64 {
        let n = self.visits as f64;
        let exploit = self.q(perspective) as f64 / n;
        let explore = c * (2.0 * (parent_visits as f64).ln() / n).sqrt();
        exploit + explore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_tictactoe::{Action, State};

    #[test]
    fn test_node_id_none() {
        assert!(NodeId::NONE.is_none());
        assert!(!NodeId::NONE.is_some());
        assert!(!NodeId(0).is_none());
        assert!(NodeId(0).is_some());
    }

    #[test]
    fn test_new_root() {
        let node = TwoPlayerNode::new_root(State::new());

        assert!(node.parent.is_none());
        assert!(node.action().is_none());
        assert_eq!(node.n(), 0);
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_record_and_tallies() {
        let mut node = TwoPlayerNode::new_root(State::new());

        node.record(GameResult::Win(Player::One));
        node.record(GameResult::Win(Player::One));
        node.record(GameResult::Win(Player::Two));
        node.record(GameResult::Draw);

        assert_eq!(node.n(), 4);
        assert_eq!(node.wins_for(Player::One), 2);
        assert_eq!(node.wins_for(Player::Two), 1);
        assert_eq!(node.draws(), 1);
    }

    #[test]
    fn test_q_perspective() {
        let mut node = TwoPlayerNode::new_root(State::new());
        for _ in 0..3 {
            node.record(GameResult::Win(Player::One));
        }
        node.record(GameResult::Win(Player::Two));

        assert_eq!(node.q(Player::One), 2);
        assert_eq!(node.q(Player::Two), -2);
    }

    #[test]
    fn test_untried_actions_idempotent() {
        let mut node = TwoPlayerNode::new_root(State::new());

        let first: Vec<_> = node.untried_actions().to_vec();
        let second: Vec<_> = node.untried_actions().to_vec();
        assert_eq!(first, second);
        assert_eq!(first.len(), 9);
    }

    #[test]
    fn test_pop_untried_takes_last() {
        let mut node = TwoPlayerNode::new_root(State::new());

        // Legal actions enumerate positions 0..9, so expansion tries 8 first.
        assert_eq!(node.pop_untried(), Some(Action::Place(8)));
        assert_eq!(node.untried_actions().len(), 8);
        assert_eq!(node.pop_untried(), Some(Action::Place(7)));
        assert_eq!(node.untried_actions().len(), 7);
    }

    #[test]
    fn test_uct_monotonic_in_q() {
        let mut weak = TwoPlayerNode::new_root(State::new());
        let mut strong = TwoPlayerNode::new_root(State::new());

        // Same visit count, different win counts for player 1.
        for _ in 0..10 {
            weak.record(GameResult::Draw);
            strong.record(GameResult::Win(Player::One));
        }

        let c = 1.4;
        let parent_visits = 20;
        assert!(
            strong.uct_score(parent_visits, c, Player::One)
                > weak.uct_score(parent_visits, c, Player::One)
        );
    }

    #[test]
    fn test_uct_exploration_bonus_decays_with_visits() {
        let mut rare = TwoPlayerNode::new_root(State::new());
        let mut frequent = TwoPlayerNode::new_root(State::new());

        rare.record(GameResult::Draw);
        for _ in 0..10 {
            frequent.record(GameResult::Draw);
        }

        // Equal q (zero); the less-visited node must score higher.
        assert!(
            rare.uct_score(20, 1.4, Player::One) > frequent.uct_score(20, 1.4, Player::One)
        );
    }
}
