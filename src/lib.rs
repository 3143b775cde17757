pub mod action;
pub mod error;
pub mod goal;
pub mod plan;
pub mod planner;
pub mod report;
pub mod search;
pub mod world_state;

pub use action::Action;
pub use error::{GoapError, Result};
pub use goal::Goal;
pub use plan::Plan;
pub use planner::{HeuristicKind, Planner, PlannerConfig};
pub use search::{
    BestFirstSearch, GoalDistanceHeuristic, HeuristicStrategy, HouseHeuristic, SearchAlgorithm,
    SearchOutcome, SearchStats, ZeroHeuristic,
};
pub use world_state::{Fact, WorldState};
