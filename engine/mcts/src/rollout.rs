//! Rollout policies: how simulation picks moves below the tree frontier.
//!
//! The policy is injectable so tests can script playouts; the engine default
//! is uniform random selection over the legal set.

use game_core::{GameResult, GameState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::search::SearchError;

/// Strategy for choosing one action during a rollout.
pub trait RolloutPolicy<S: GameState> {
    /// Pick one of `legal` for the given state. `legal` is never empty.
    fn choose(&mut self, state: &S, legal: &[S::Action]) -> S::Action;
}

/// Uniform-random rollout policy.
///
/// Seed it for reproducible searches; two searches over the same state with
/// the same seed and iteration budget choose the same move.
pub struct UniformRandom {
    rng: ChaCha20Rng,
}

impl UniformRandom {
    /// Deterministic policy from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Policy seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }
}

impl<S: GameState> RolloutPolicy<S> for UniformRandom {
    fn choose(&mut self, _state: &S, legal: &[S::Action]) -> S::Action {
        legal[self.rng.gen_range(0..legal.len())].clone()
    }
}

/// Play `policy`-chosen moves from `state` until a terminal state is reached
/// and report its result.
///
/// Already-terminal states report their own result without consulting the
/// policy. A non-terminal state with no legal actions breaks the game-state
/// contract and fails with [`SearchError::NoLegalActions`].
pub(crate) fn simulate<S, P>(state: &S, policy: &mut P) -> Result<GameResult, SearchError>
where
    S: GameState,
    P: RolloutPolicy<S>,
{
    let mut current = state.clone();
    while !current.is_terminal() {
        let legal = current.legal_actions();
        if legal.is_empty() {
            return Err(SearchError::NoLegalActions);
        }
        let action = policy.choose(&current, &legal);
        current = current.apply(&action)?;
    }
    Ok(current.result()?)
}
