use std::collections::{HashSet, VecDeque};

use goap_woodcutter::{Action, Fact, Goal, HeuristicKind, Planner, PlannerConfig, WorldState};
use proptest::prelude::*;

/// Every state reachable from `start` through applicable actions.
fn reachable_states(start: WorldState) -> HashSet<WorldState> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(state) = queue.pop_front() {
        for action in Action::ALL {
            if action.is_applicable(&state) {
                let next = action.apply(&state);
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    seen
}

fn small_state() -> impl Strategy<Value = WorldState> {
    (0i64..8, 0i64..4, 0i64..6, 0i64..=1, 1i64..7, 0i64..4).prop_map(
        |(forest, hand, piled, has_house, needed, capacity)| {
            WorldState::new(needed, capacity)
                .with_fact(Fact::ForestWood, forest)
                .with_fact(Fact::HandWood, hand)
                .with_fact(Fact::PiledWood, piled)
                .with_fact(Fact::HasHouse, has_house)
        },
    )
}

fn small_goal() -> impl Strategy<Value = Goal> {
    (prop::option::of(0i64..=1), prop::option::of(0i64..6), prop::option::of(0i64..4)).prop_map(
        |(has_house, piled, hand)| {
            let mut goal = Goal::new();
            if let Some(value) = has_house {
                goal = goal.require(Fact::HasHouse, value);
            }
            if let Some(value) = piled {
                goal = goal.require(Fact::PiledWood, value);
            }
            if let Some(value) = hand {
                goal = goal.require(Fact::HandWood, value);
            }
            goal
        },
    )
}

fn heuristic() -> impl Strategy<Value = HeuristicKind> {
    prop_oneof![
        Just(HeuristicKind::House),
        Just(HeuristicKind::GoalDistance),
        Just(HeuristicKind::Zero),
    ]
}

proptest! {
    #[test]
    fn returned_plans_replay_to_the_goal(
        start in small_state(),
        goal in small_goal(),
        kind in heuristic(),
    ) {
        let planner = Planner::with_config(
            Action::ALL.to_vec(),
            PlannerConfig::default().with_heuristic(kind),
        );
        if let Some(plan) = planner.plan(&start, &goal).unwrap() {
            let end = plan.replay(&start).unwrap();
            prop_assert!(end.satisfies(&goal));
        }
    }

    #[test]
    fn no_plan_only_when_goal_is_unreachable(
        start in small_state(),
        goal in small_goal(),
        kind in heuristic(),
    ) {
        let planner = Planner::with_config(
            Action::ALL.to_vec(),
            PlannerConfig::default().with_heuristic(kind),
        );
        let found = planner.plan(&start, &goal).unwrap().is_some();
        let reachable = reachable_states(start).iter().any(|state| state.satisfies(&goal));
        prop_assert_eq!(found, reachable);
    }

    #[test]
    fn planning_is_deterministic(start in small_state(), goal in small_goal()) {
        let planner = Planner::new(Action::ALL.to_vec());
        let first = planner.plan(&start, &goal).unwrap();
        let second = planner.plan(&start, &goal).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn satisfied_start_returns_empty_plan(
        start in small_state(),
        facts in prop::sample::subsequence(Fact::ALL.to_vec(), 0..=Fact::ALL.len()),
    ) {
        let goal = facts
            .into_iter()
            .fold(Goal::new(), |goal, fact| goal.require(fact, start.get(fact)));
        let planner = Planner::new(Action::ALL.to_vec());
        let outcome = planner.plan_with_stats(&start, &goal).unwrap();
        prop_assert!(outcome.plan.unwrap().is_empty());
        prop_assert_eq!(outcome.stats.expanded, 0);
    }
}
