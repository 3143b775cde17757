//! # Planner Module for the woodcutter GOAP system
//!
//! The planner is the entry point callers use. It:
//! - Holds the ordered action set available to the woodcutter
//! - Delegates to a [`SearchAlgorithm`] (by default [`BestFirstSearch`] with
//!   the [`HouseHeuristic`])
//! - Reports either a [`Plan`] or "no plan" (`Ok(None)`)
//!
//! ## Basic Usage
//!
//! ```
//! use goap_woodcutter::{Action, Fact, Goal, Planner, WorldState};
//!
//! let start = WorldState::from_facts([
//!     ("ForestWood", 10),
//!     ("HandWood", 0),
//!     ("PiledWood", 0),
//!     ("HasHouse", 0),
//!     ("wood_needed_for_house", 5),
//!     ("transport_capacity", 3),
//! ])
//! .unwrap();
//!
//! let planner = Planner::new(Action::ALL.to_vec());
//! let plan = planner.plan(&start, &Goal::house()).unwrap().expect("a house can be built");
//!
//! let end = plan.replay(&start).unwrap();
//! assert_eq!(end.get(Fact::HasHouse), 1);
//! assert_eq!(end.get(Fact::PiledWood), 0);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{GoapError, Result};
use crate::search::{
    BestFirstSearch, GoalDistanceHeuristic, HeuristicStrategy, HouseHeuristic, SearchAlgorithm,
    SearchOutcome, ZeroHeuristic,
};
use crate::{Action, Goal, Plan, WorldState};

/// Which heuristic orders the frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeuristicKind {
    /// Fixed house goal shape with the partial-load penalty
    #[default]
    House,
    /// Distance to the requirements of the goal being planned for
    GoalDistance,
    /// No guidance; breadth-first order
    Zero,
}

impl HeuristicKind {
    fn strategy(self) -> Box<dyn HeuristicStrategy> {
        match self {
            HeuristicKind::House => Box::new(HouseHeuristic),
            HeuristicKind::GoalDistance => Box::new(GoalDistanceHeuristic),
            HeuristicKind::Zero => Box::new(ZeroHeuristic),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HeuristicKind::House => "house",
            HeuristicKind::GoalDistance => "goal-distance",
            HeuristicKind::Zero => "zero",
        })
    }
}

impl FromStr for HeuristicKind {
    type Err = GoapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "house" => Ok(HeuristicKind::House),
            "goal-distance" => Ok(HeuristicKind::GoalDistance),
            "zero" => Ok(HeuristicKind::Zero),
            other => Err(GoapError::UnknownHeuristic(other.to_string())),
        }
    }
}

/// Tunables for a [`Planner`].
///
/// The default matches the classic behaviour: house heuristic, no expansion
/// limit.
///
/// ```
/// use goap_woodcutter::{HeuristicKind, PlannerConfig};
///
/// let config = PlannerConfig::default()
///     .with_heuristic(HeuristicKind::GoalDistance)
///     .with_max_expansions(10_000);
/// assert_eq!(config.max_expansions, Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlannerConfig {
    pub heuristic: HeuristicKind,
    /// Expansions allowed before the search gives up with an error
    pub max_expansions: Option<usize>,
}

impl PlannerConfig {
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

/// The GOAP planner that finds a sequence of actions reaching a goal.
///
/// The order of `actions` decides which successor is generated first, and so
/// which of several equally rated plans is returned.
pub struct Planner {
    /// Available actions that can be used in planning
    actions: Vec<Action>,
    /// The algorithm used to search for a plan
    search_algorithm: Box<dyn SearchAlgorithm>,
}

impl Planner {
    /// Creates a new planner with the given actions using best-first search
    /// and the house heuristic.
    pub fn new(actions: Vec<Action>) -> Self {
        Self::with_config(actions, PlannerConfig::default())
    }

    /// Creates a planner whose best-first search is built from `config`.
    pub fn with_config(actions: Vec<Action>, config: PlannerConfig) -> Self {
        let search = BestFirstSearch::new(config.heuristic.strategy())
            .with_max_expansions(config.max_expansions);
        Self::with_search_algorithm(actions, Box::new(search))
    }

    /// Creates a new planner with the given actions and a custom search algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use goap_woodcutter::{Action, BestFirstSearch, Planner, ZeroHeuristic};
    ///
    /// let search = BestFirstSearch::new(Box::new(ZeroHeuristic));
    /// let planner = Planner::with_search_algorithm(Action::ALL.to_vec(), Box::new(search));
    /// assert_eq!(planner.actions().len(), 3);
    /// ```
    pub fn with_search_algorithm(
        actions: Vec<Action>,
        search_algorithm: Box<dyn SearchAlgorithm>,
    ) -> Self {
        Self {
            actions,
            search_algorithm,
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Finds a plan from `start` to a state satisfying `goal`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(plan))` - A sequence of actions that achieves the goal (empty
    ///   if `start` already satisfies it)
    /// * `Ok(None)` - No reachable state satisfies the goal
    ///
    /// # Errors
    ///
    /// Returns `GoapError::ExpansionLimitReached` if a configured expansion
    /// limit runs out first.
    ///
    /// # Examples
    ///
    /// ```
    /// use goap_woodcutter::{Action, Fact, Goal, Planner, WorldState};
    ///
    /// // Two logs will never make a five-log house.
    /// let start = WorldState::new(5, 3).with_fact(Fact::ForestWood, 2);
    /// let planner = Planner::new(Action::ALL.to_vec());
    /// assert!(planner.plan(&start, &Goal::house()).unwrap().is_none());
    /// ```
    pub fn plan(&self, start: &WorldState, goal: &Goal) -> Result<Option<Plan>> {
        self.plan_with_stats(start, goal).map(|outcome| outcome.plan)
    }

    /// Same as [`Planner::plan`], also returning search statistics.
    pub fn plan_with_stats(&self, start: &WorldState, goal: &Goal) -> Result<SearchOutcome> {
        log::debug!("Planning from {} towards {}", start, goal);
        let outcome = self.search_algorithm.search(&self.actions, start, goal)?;

        match &outcome.plan {
            Some(plan) => log::info!(
                "Generated plan with {} actions ({} states expanded)",
                plan.len(),
                outcome.stats.expanded
            ),
            None => log::info!(
                "No plan reaches {} ({} states expanded)",
                goal,
                outcome.stats.expanded
            ),
        }
        Ok(outcome)
    }
}
