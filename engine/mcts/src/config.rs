//! Search configuration and budgets.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::search::SearchError;

/// Configuration for a Monte Carlo tree search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Exploration constant for the UCT formula.
    /// Higher values encourage exploration, lower values favor exploitation.
    /// The final move decision always uses 0 (pure win rate).
    pub exploration_constant: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exploration_constant: 1.4,
        }
    }
}

impl SearchConfig {
    /// Builder pattern: set the exploration constant.
    pub fn with_exploration_constant(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }
}

/// Budget for one search: a fixed iteration count or a wall-clock limit.
///
/// Exactly one of the two limits must be set; [`SearchBudget::kind`] rejects
/// anything else with [`SearchError::BudgetMisconfiguration`]. The wall-clock
/// limit is checked after each full iteration, so the search always completes
/// at least one iteration and never interrupts a rollout mid-flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchBudget {
    /// Number of search iterations to run.
    pub iterations: Option<u64>,
    /// Wall-clock limit for the whole search.
    pub time_limit: Option<Duration>,
}

impl SearchBudget {
    /// Budget of a fixed number of iterations.
    pub fn iterations(count: u64) -> Self {
        Self {
            iterations: Some(count),
            time_limit: None,
        }
    }

    /// Wall-clock budget.
    pub fn time_limit(limit: Duration) -> Self {
        Self {
            iterations: None,
            time_limit: Some(limit),
        }
    }

    /// Validate and classify the budget.
    ///
    /// A zero iteration count is also a misconfiguration: the root would
    /// never accumulate the visits the final selection requires.
    pub(crate) fn kind(&self) -> Result<BudgetKind, SearchError> {
        match (self.iterations, self.time_limit) {
            (Some(count), None) if count > 0 => Ok(BudgetKind::Iterations(count)),
            (None, Some(limit)) => Ok(BudgetKind::TimeLimit(limit)),
            _ => Err(SearchError::BudgetMisconfiguration),
        }
    }
}

/// A validated budget.
#[derive(Debug, Clone, Copy)]
pub(crate) enum BudgetKind {
    Iterations(u64),
    TimeLimit(Duration),
}
