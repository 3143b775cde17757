use crate::error::{GoapError, Result};
use crate::{Action, Goal, Plan, WorldState};
use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

/// Trait defining the interface for search algorithms used by the planner.
///
/// This trait abstracts the specific algorithm used to find a sequence of actions
/// that transforms the start state into one satisfying the goal.
///
/// # Examples
///
/// ```
/// use goap_woodcutter::{Action, Goal, Plan, Result, SearchAlgorithm, SearchOutcome, WorldState};
///
/// /// Tries every single action and nothing more.
/// struct OneStepSearch;
///
/// impl SearchAlgorithm for OneStepSearch {
///     fn search(&self, actions: &[Action], start: &WorldState, goal: &Goal) -> Result<SearchOutcome> {
///         let plan = actions
///             .iter()
///             .filter(|action| action.is_applicable(start))
///             .find(|action| action.apply(start).satisfies(goal))
///             .map(|action| Plan::from(vec![*action]));
///         Ok(SearchOutcome { plan, stats: Default::default() })
///     }
/// }
/// ```
pub trait SearchAlgorithm: Send + Sync {
    /// Finds a sequence of actions that transforms `start` into a state satisfying `goal`.
    ///
    /// # Returns
    ///
    /// * `Ok(outcome)` with `outcome.plan == None` when the goal is unreachable
    /// * `Err(GoapError)` if the search could not run to completion
    fn search(&self, actions: &[Action], start: &WorldState, goal: &Goal) -> Result<SearchOutcome>;
}

/// A trait for heuristic functions used to order the frontier.
pub trait HeuristicStrategy: Send + Sync {
    /// Estimates the remaining distance from `state` to `goal`. Lower is closer.
    fn estimate(&self, state: &WorldState, goal: &Goal) -> i64;
}

/// The woodcutter heuristic: distance to a built house with a penalty for
/// partially filled loads. Ignores the goal it is given.
///
/// See [`WorldState::heuristic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HouseHeuristic;

impl HeuristicStrategy for HouseHeuristic {
    fn estimate(&self, state: &WorldState, _goal: &Goal) -> i64 {
        state.heuristic()
    }
}

/// Sum of absolute differences between the state and each goal requirement.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalDistanceHeuristic;

impl HeuristicStrategy for GoalDistanceHeuristic {
    fn estimate(&self, state: &WorldState, goal: &Goal) -> i64 {
        goal.iter()
            .map(|(fact, value)| state.get(fact).saturating_sub(value).saturating_abs())
            .fold(0, i64::saturating_add)
    }
}

/// Zero heuristic. With first-in first-out tie-breaking this turns the search
/// into breadth-first search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl HeuristicStrategy for ZeroHeuristic {
    fn estimate(&self, _state: &WorldState, _goal: &Goal) -> i64 {
        0
    }
}

/// Counters describing the work a single search performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States taken off the frontier and expanded
    pub expanded: usize,
    /// Successor states pushed onto the frontier
    pub generated: usize,
    /// Largest frontier size observed
    pub max_frontier: usize,
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The plan found, or `None` if the reachable space holds no goal state
    pub plan: Option<Plan>,
    pub stats: SearchStats,
}

/// A node in the search space.
///
/// Paths are not stored per node; they are rebuilt from parent links once a
/// goal is found.
#[derive(Debug, Clone)]
struct Node {
    state: WorldState,
    parent: Option<usize>,
    /// Action that led to this state (from parent)
    action: Option<Action>,
}

/// Frontier entry ordered by heuristic, then by insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierEntry {
    h_cost: i64,
    order: u64,
    idx: usize,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.h_cost
            .cmp(&other.h_cost)
            .then_with(|| self.order.cmp(&other.order))
    }
}

/// Manages the state of a single search.
struct SearchContext<'a> {
    goal: &'a Goal,
    heuristic: &'a dyn HeuristicStrategy,
    nodes: Vec<Node>,
    /// Min-heap of frontier entries
    open_set: BinaryHeap<Reverse<FrontierEntry>>,
    /// States that have been expanded
    closed_set: HashSet<WorldState>,
    next_order: u64,
    stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    fn new(start: &WorldState, goal: &'a Goal, heuristic: &'a dyn HeuristicStrategy) -> Self {
        let mut context = Self {
            goal,
            heuristic,
            nodes: Vec::new(),
            open_set: BinaryHeap::new(),
            closed_set: HashSet::new(),
            next_order: 0,
            stats: SearchStats::default(),
        };
        context.push(*start, None, None);
        context
    }

    fn push(&mut self, state: WorldState, parent: Option<usize>, action: Option<Action>) {
        let idx = self.nodes.len();
        let h_cost = self.heuristic.estimate(&state, self.goal);
        self.nodes.push(Node {
            state,
            parent,
            action,
        });
        self.open_set.push(Reverse(FrontierEntry {
            h_cost,
            order: self.next_order,
            idx,
        }));
        self.next_order += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(self.open_set.len());
    }

    /// Pops the best frontier entry whose state has not been expanded yet.
    ///
    /// States are only marked visited on expansion, so the frontier can hold
    /// several entries for one state; the later ones are dropped here.
    fn next_node(&mut self) -> Option<usize> {
        while let Some(Reverse(entry)) = self.open_set.pop() {
            if !self.closed_set.contains(&self.nodes[entry.idx].state) {
                return Some(entry.idx);
            }
        }
        None
    }

    fn mark_visited(&mut self, state: WorldState) {
        self.closed_set.insert(state);
        self.stats.expanded += 1;
    }

    fn expand(&mut self, idx: usize, actions: &[Action]) {
        let state = self.nodes[idx].state;
        for action in actions.iter().filter(|action| action.is_applicable(&state)) {
            let next = action.apply(&state);
            if self.closed_set.contains(&next) {
                continue;
            }
            self.push(next, Some(idx), Some(*action));
            self.stats.generated += 1;
        }
    }

    /// Reconstructs the path from the start state to the given node.
    fn reconstruct_path(&self, node_idx: usize) -> Plan {
        let mut path = Vec::new();
        let mut current = Some(node_idx);

        while let Some(idx) = current {
            let node = &self.nodes[idx];
            if let Some(action) = node.action {
                path.push(action);
            }
            current = node.parent;
        }

        path.reverse();
        Plan::from(path)
    }
}

/// Greedy best-first search ordered purely by a heuristic estimate.
///
/// Every action costs one step, so the accumulated path length does not take
/// part in the ordering: the frontier entry with the lowest estimate is always
/// expanded next, and ties go to the entry pushed first.
pub struct BestFirstSearch {
    heuristic: Box<dyn HeuristicStrategy>,
    max_expansions: Option<usize>,
}

impl BestFirstSearch {
    /// Creates a new search with the given heuristic and no expansion limit.
    pub fn new(heuristic: Box<dyn HeuristicStrategy>) -> Self {
        Self {
            heuristic,
            max_expansions: None,
        }
    }

    /// Creates a new search with the woodcutter [`HouseHeuristic`].
    pub fn with_house_heuristic() -> Self {
        Self::new(Box::new(HouseHeuristic))
    }

    /// Aborts the search with `GoapError::ExpansionLimitReached` once `limit`
    /// states have been expanded without reaching the goal.
    pub fn with_max_expansions(mut self, limit: Option<usize>) -> Self {
        self.max_expansions = limit;
        self
    }
}

impl Default for BestFirstSearch {
    fn default() -> Self {
        Self::with_house_heuristic()
    }
}

impl SearchAlgorithm for BestFirstSearch {
    fn search(&self, actions: &[Action], start: &WorldState, goal: &Goal) -> Result<SearchOutcome> {
        let mut context = SearchContext::new(start, goal, self.heuristic.as_ref());

        while let Some(current_idx) = context.next_node() {
            let state = context.nodes[current_idx].state;

            if state.satisfies(goal) {
                let plan = context.reconstruct_path(current_idx);
                log::debug!(
                    "Goal {} reached after {} expansions with {} steps",
                    goal,
                    context.stats.expanded,
                    plan.len()
                );
                return Ok(SearchOutcome {
                    plan: Some(plan),
                    stats: context.stats,
                });
            }

            if let Some(limit) = self.max_expansions {
                if context.stats.expanded >= limit {
                    log::warn!("Search aborted after {} expansions", limit);
                    return Err(GoapError::ExpansionLimitReached(limit));
                }
            }

            log::trace!("Expanding {}", state);
            context.mark_visited(state);
            context.expand(current_idx, actions);
        }

        log::debug!(
            "Frontier exhausted after {} expansions, goal {} unreachable",
            context.stats.expanded,
            goal
        );
        Ok(SearchOutcome {
            plan: None,
            stats: context.stats,
        })
    }
}
