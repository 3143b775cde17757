//! World state representation for the woodcutter planner.
//!
//! This module provides the [`WorldState`] structure, which is the foundation for:
//! - Representing a snapshot of the woodcutter's world
//! - Estimating the remaining distance to a built house
//! - Deduplicating states during search through value equality and hashing
//!
//! Every fact is a named integer. The world facts (`ForestWood`, `HandWood`,
//! `PiledWood`, `HasHouse`) default to 0 when a state is built from a map that
//! omits them. The configuration facts (`wood_needed_for_house`,
//! `transport_capacity`) define the scale of the problem and must always be
//! given.
//!
//! # Example
//!
//! ```
//! use goap_woodcutter::{Fact, WorldState};
//!
//! let state = WorldState::from_facts([
//!     ("ForestWood", 10),
//!     ("wood_needed_for_house", 5),
//!     ("transport_capacity", 3),
//! ])
//! .unwrap();
//!
//! assert_eq!(state.get(Fact::ForestWood), 10);
//! assert_eq!(state.get(Fact::HandWood), 0);
//!
//! // Transitions never mutate: a new state is returned.
//! let carried = state.with_fact(Fact::HandWood, 2);
//! assert_eq!(state.get(Fact::HandWood), 0);
//! assert_eq!(carried.get(Fact::HandWood), 2);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{GoapError, Result};

/// Weight applied per missing unit of a partially filled load.
const PARTIAL_LOAD_PENALTY: i64 = 10;

/// The named facts a [`WorldState`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fact {
    ForestWood,
    HandWood,
    PiledWood,
    HasHouse,
    WoodNeededForHouse,
    TransportCapacity,
}

impl Fact {
    /// Every fact, in display order.
    pub const ALL: [Fact; 6] = [
        Fact::ForestWood,
        Fact::HandWood,
        Fact::PiledWood,
        Fact::HasHouse,
        Fact::WoodNeededForHouse,
        Fact::TransportCapacity,
    ];

    /// The key this fact is known by in state and goal maps.
    pub fn name(self) -> &'static str {
        match self {
            Fact::ForestWood => "ForestWood",
            Fact::HandWood => "HandWood",
            Fact::PiledWood => "PiledWood",
            Fact::HasHouse => "HasHouse",
            Fact::WoodNeededForHouse => "wood_needed_for_house",
            Fact::TransportCapacity => "transport_capacity",
        }
    }

    /// Configuration facts have no default and never change during planning.
    pub fn is_configuration(self) -> bool {
        matches!(self, Fact::WoodNeededForHouse | Fact::TransportCapacity)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fact {
    type Err = GoapError;

    fn from_str(s: &str) -> Result<Self> {
        Fact::ALL
            .into_iter()
            .find(|fact| fact.name() == s)
            .ok_or_else(|| GoapError::UnknownFact(s.to_string()))
    }
}

/// An immutable snapshot of the woodcutter's world.
///
/// Two states are equal when every fact holds the same value, which also makes
/// `WorldState` usable as a key in the search's visited set.
///
/// # Examples
///
/// ```
/// use goap_woodcutter::{Fact, WorldState};
///
/// let a = WorldState::new(5, 3).with_fact(Fact::ForestWood, 4);
/// let b = WorldState::new(5, 3).with_fact(Fact::ForestWood, 4);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldState {
    forest_wood: i64,
    hand_wood: i64,
    piled_wood: i64,
    has_house: i64,
    wood_needed_for_house: i64,
    transport_capacity: i64,
}

impl WorldState {
    /// Creates a state with the given configuration and every world fact at 0.
    pub fn new(wood_needed_for_house: i64, transport_capacity: i64) -> Self {
        Self {
            forest_wood: 0,
            hand_wood: 0,
            piled_wood: 0,
            has_house: 0,
            wood_needed_for_house,
            transport_capacity,
        }
    }

    /// Builds a state from `(key, value)` pairs.
    ///
    /// World facts that are not mentioned default to 0. Later pairs override
    /// earlier ones with the same key.
    ///
    /// # Errors
    ///
    /// - `GoapError::UnknownFact` if a key is not a known fact
    /// - `GoapError::NegativeFact` if a value is below zero
    /// - `GoapError::MissingConfiguration` if `wood_needed_for_house` or
    ///   `transport_capacity` is absent
    ///
    /// # Examples
    ///
    /// ```
    /// use goap_woodcutter::{Fact, GoapError, WorldState};
    ///
    /// let result = WorldState::from_facts([("ForestWood", 3), ("transport_capacity", 2)]);
    /// assert!(matches!(
    ///     result,
    ///     Err(GoapError::MissingConfiguration(Fact::WoodNeededForHouse))
    /// ));
    /// ```
    pub fn from_facts<I, K>(facts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let mut wood_needed = None;
        let mut capacity = None;
        let mut state = Self::new(0, 0);

        for (key, value) in facts {
            let fact: Fact = key.as_ref().parse()?;
            if value < 0 {
                return Err(GoapError::NegativeFact { fact, value });
            }
            match fact {
                Fact::WoodNeededForHouse => wood_needed = Some(value),
                Fact::TransportCapacity => capacity = Some(value),
                _ => {}
            }
            state = state.with_fact(fact, value);
        }

        if wood_needed.is_none() {
            return Err(GoapError::MissingConfiguration(Fact::WoodNeededForHouse));
        }
        if capacity.is_none() {
            return Err(GoapError::MissingConfiguration(Fact::TransportCapacity));
        }
        Ok(state)
    }

    /// Returns the current value of a fact.
    pub fn get(&self, fact: Fact) -> i64 {
        match fact {
            Fact::ForestWood => self.forest_wood,
            Fact::HandWood => self.hand_wood,
            Fact::PiledWood => self.piled_wood,
            Fact::HasHouse => self.has_house,
            Fact::WoodNeededForHouse => self.wood_needed_for_house,
            Fact::TransportCapacity => self.transport_capacity,
        }
    }

    /// Returns a copy of this state with one fact replaced.
    pub fn with_fact(&self, fact: Fact, value: i64) -> Self {
        let mut next = *self;
        match fact {
            Fact::ForestWood => next.forest_wood = value,
            Fact::HandWood => next.hand_wood = value,
            Fact::PiledWood => next.piled_wood = value,
            Fact::HasHouse => next.has_house = value,
            Fact::WoodNeededForHouse => next.wood_needed_for_house = value,
            Fact::TransportCapacity => next.transport_capacity = value,
        }
        next
    }

    /// Iterates over every fact and its value in display order.
    pub fn facts(&self) -> impl Iterator<Item = (Fact, i64)> + '_ {
        Fact::ALL.into_iter().map(move |fact| (fact, self.get(fact)))
    }

    /// Estimates how far this state is from a built house.
    ///
    /// The goal shape is fixed: `PiledWood == wood_needed_for_house` and
    /// `HasHouse == 1`, each contributing the absolute difference. A load in
    /// hand that is neither empty nor full adds
    /// `10 * (transport_capacity - HandWood)`, which pushes the search to fill
    /// the transport capacity before carrying wood to the pile.
    ///
    /// The estimate is not admissible; it only orders the frontier. It
    /// saturates at `i64::MAX` instead of overflowing on extreme inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use goap_woodcutter::{Fact, WorldState};
    ///
    /// let start = WorldState::new(5, 3).with_fact(Fact::ForestWood, 10);
    /// assert_eq!(start.heuristic(), 6);
    ///
    /// // One log in a three-log carry costs 2 * 10 extra.
    /// let partial = start.with_fact(Fact::HandWood, 1);
    /// assert_eq!(partial.heuristic(), 26);
    /// ```
    pub fn heuristic(&self) -> i64 {
        let base = self
            .piled_wood
            .saturating_sub(self.wood_needed_for_house)
            .saturating_abs()
            .saturating_add(self.has_house.saturating_sub(1).saturating_abs());
        let penalty = if self.hand_wood > 0 && self.hand_wood < self.transport_capacity {
            PARTIAL_LOAD_PENALTY.saturating_mul(self.transport_capacity - self.hand_wood)
        } else {
            0
        };
        base.saturating_add(penalty)
    }
}

impl fmt::Display for WorldState {
    /// Formats the state as `{ForestWood: 10, HandWood: 0, ...}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (fact, value) in self.facts() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", fact, value)?;
            first = false;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn config_only() -> Vec<(&'static str, i64)> {
        vec![("wood_needed_for_house", 5), ("transport_capacity", 3)]
    }

    #[test]
    fn test_fact_name_round_trips_through_parse() {
        for fact in Fact::ALL {
            assert_eq!(fact.name().parse::<Fact>().unwrap(), fact);
        }
        assert!(matches!(
            "Gold".parse::<Fact>(),
            Err(GoapError::UnknownFact(name)) if name == "Gold"
        ));
    }

    #[test]
    fn test_missing_world_facts_default_to_zero() {
        let state = WorldState::from_facts(config_only()).unwrap();
        assert_eq!(state.get(Fact::ForestWood), 0);
        assert_eq!(state.get(Fact::HandWood), 0);
        assert_eq!(state.get(Fact::PiledWood), 0);
        assert_eq!(state.get(Fact::HasHouse), 0);
        assert_eq!(state.get(Fact::WoodNeededForHouse), 5);
        assert_eq!(state.get(Fact::TransportCapacity), 3);
    }

    #[test]
    fn test_missing_configuration_is_rejected() {
        let result = WorldState::from_facts([("wood_needed_for_house", 5)]);
        assert!(matches!(
            result,
            Err(GoapError::MissingConfiguration(Fact::TransportCapacity))
        ));

        let result = WorldState::from_facts([("transport_capacity", 3)]);
        assert!(matches!(
            result,
            Err(GoapError::MissingConfiguration(Fact::WoodNeededForHouse))
        ));
    }

    #[test]
    fn test_unknown_and_negative_facts_are_rejected() {
        let mut facts = config_only();
        facts.push(("Stone", 1));
        assert!(matches!(
            WorldState::from_facts(facts),
            Err(GoapError::UnknownFact(_))
        ));

        let mut facts = config_only();
        facts.push(("ForestWood", -1));
        assert!(matches!(
            WorldState::from_facts(facts),
            Err(GoapError::NegativeFact {
                fact: Fact::ForestWood,
                value: -1
            })
        ));
    }

    #[test]
    fn test_with_fact_leaves_original_untouched() {
        let state = WorldState::new(5, 3);
        let next = state.with_fact(Fact::PiledWood, 4);
        assert_eq!(state.get(Fact::PiledWood), 0);
        assert_eq!(next.get(Fact::PiledWood), 4);
        assert_ne!(state, next);
    }

    #[test]
    fn test_equality_ignores_key_order() {
        let a = WorldState::from_facts([
            ("ForestWood", 2),
            ("wood_needed_for_house", 5),
            ("transport_capacity", 3),
        ])
        .unwrap();
        let b = WorldState::from_facts([
            ("transport_capacity", 3),
            ("wood_needed_for_house", 5),
            ("ForestWood", 2),
        ])
        .unwrap();
        assert_eq!(a, b);

        let mut seen = HashSet::new();
        seen.insert(a);
        assert!(seen.contains(&b));
    }

    #[test]
    fn test_heuristic_base_distance() {
        let state = WorldState::new(5, 3);
        assert_eq!(state.heuristic(), 6);

        let piled = state.with_fact(Fact::PiledWood, 5);
        assert_eq!(piled.heuristic(), 1);

        let built = state.with_fact(Fact::HasHouse, 1);
        assert_eq!(built.heuristic(), 5);
    }

    #[test]
    fn test_heuristic_penalises_partial_loads_only() {
        let state = WorldState::new(5, 3);
        assert_eq!(state.with_fact(Fact::HandWood, 1).heuristic(), 6 + 20);
        assert_eq!(state.with_fact(Fact::HandWood, 2).heuristic(), 6 + 10);
        // Full hands carry no penalty.
        assert_eq!(state.with_fact(Fact::HandWood, 3).heuristic(), 6);
    }

    #[test]
    fn test_heuristic_saturates_on_extreme_values() {
        let state = WorldState::from_facts([
            ("ForestWood", 10),
            ("wood_needed_for_house", 5),
            ("transport_capacity", i64::MAX),
        ])
        .unwrap();
        assert_eq!(state.heuristic(), 6);
        assert_eq!(state.with_fact(Fact::HandWood, 1).heuristic(), i64::MAX);

        let piled = WorldState::new(0, 3).with_fact(Fact::PiledWood, i64::MAX);
        assert_eq!(piled.heuristic(), i64::MAX);
    }

    #[test]
    fn test_display_lists_every_fact() {
        let state = WorldState::new(5, 3).with_fact(Fact::ForestWood, 10);
        assert_eq!(
            state.to_string(),
            "{ForestWood: 10, HandWood: 0, PiledWood: 0, HasHouse: 0, \
             wood_needed_for_house: 5, transport_capacity: 3}"
        );
    }
}
