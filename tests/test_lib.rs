use goap_woodcutter::{Action, Fact, Goal, GoapError, Planner, PlannerConfig, WorldState};

#[cfg(test)]
mod tests {
    use super::*;

    fn start_state(forest: i64, has_house: i64) -> WorldState {
        WorldState::from_facts([
            ("ForestWood", forest),
            ("HandWood", 0),
            ("PiledWood", 0),
            ("HasHouse", has_house),
            ("wood_needed_for_house", 5),
            ("transport_capacity", 3),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_house_from_full_forest() {
        let start = start_state(10, 0);
        let planner = Planner::new(Action::ALL.to_vec());

        let plan = planner.plan(&start, &Goal::house()).unwrap().unwrap();
        assert_eq!(
            plan.names(),
            vec![
                "ChopWood",
                "ChopWood",
                "ChopWood",
                "TransportWood",
                "ChopWood",
                "ChopWood",
                "TransportWood",
                "BuildHouse",
            ]
        );

        let end = plan.replay(&start).unwrap();
        assert_eq!(end.get(Fact::HasHouse), 1);
        assert_eq!(end.get(Fact::PiledWood), 0);
        assert_eq!(end.get(Fact::ForestWood), 5);
    }

    #[test]
    fn test_not_enough_wood_means_no_plan() {
        let start = start_state(2, 0);
        let planner = Planner::new(Action::ALL.to_vec());
        assert_eq!(planner.plan(&start, &Goal::house()).unwrap(), None);
    }

    #[test]
    fn test_goal_already_satisfied_gives_empty_plan() {
        let start = start_state(10, 1);
        let planner = Planner::new(Action::ALL.to_vec());
        let outcome = planner.plan_with_stats(&start, &Goal::house()).unwrap();
        assert!(outcome.plan.unwrap().is_empty());
        assert_eq!(outcome.stats.expanded, 0);
    }

    #[test]
    fn test_missing_configuration_fails_fast() {
        let result = WorldState::from_facts([("ForestWood", 10), ("transport_capacity", 3)]);
        assert!(matches!(
            result,
            Err(GoapError::MissingConfiguration(Fact::WoodNeededForHouse))
        ));
    }

    #[test]
    fn test_repeated_planning_is_deterministic() {
        let start = start_state(10, 0);
        let planner = Planner::new(Action::ALL.to_vec());
        let first = planner.plan(&start, &Goal::house()).unwrap();
        for _ in 0..5 {
            assert_eq!(planner.plan(&start, &Goal::house()).unwrap(), first);
        }
    }

    #[test]
    fn test_goal_other_than_house() {
        // The default heuristic still aims at the house, but the goal check is exact.
        let start = start_state(10, 0);
        let goal = Goal::new().require(Fact::PiledWood, 3);
        let planner = Planner::new(Action::ALL.to_vec());

        let plan = planner.plan(&start, &goal).unwrap().unwrap();
        assert!(plan.replay(&start).unwrap().satisfies(&goal));
    }

    #[test]
    fn test_capacity_of_one_shuttles_every_log() {
        let start = start_state(10, 0).with_fact(Fact::TransportCapacity, 1);
        let planner = Planner::new(Action::ALL.to_vec());

        let plan = planner.plan(&start, &Goal::house()).unwrap().unwrap();
        let transports = plan
            .iter()
            .filter(|action| **action == Action::TransportWood)
            .count();
        assert_eq!(transports, 5);
        assert!(plan.replay(&start).unwrap().satisfies(&Goal::house()));
    }

    #[test]
    fn test_expansion_limit_is_an_error_not_no_plan() {
        let start = start_state(10, 0);
        let planner = Planner::with_config(
            Action::ALL.to_vec(),
            PlannerConfig::default().with_max_expansions(1),
        );
        assert!(matches!(
            planner.plan(&start, &Goal::house()),
            Err(GoapError::ExpansionLimitReached(1))
        ));
    }
}
