//! # Goal conditions
//!
//! A [`Goal`] is a set of required `(fact, value)` pairs. A world state
//! satisfies the goal when every required fact holds exactly the required
//! value; facts the goal does not mention are ignored.
//!
//! ```
//! use goap_woodcutter::{Fact, Goal, WorldState};
//!
//! let goal = Goal::new().require(Fact::HasHouse, 1);
//!
//! let state = WorldState::new(5, 3);
//! assert!(!state.satisfies(&goal));
//! assert!(state.with_fact(Fact::HasHouse, 1).satisfies(&goal));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;
use crate::world_state::{Fact, WorldState};

/// The exact-match condition that ends a search.
///
/// An empty goal is satisfied by every state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Goal {
    requirements: BTreeMap<Fact, i64>,
}

impl Goal {
    /// Creates an empty goal.
    pub fn new() -> Self {
        Self {
            requirements: BTreeMap::new(),
        }
    }

    /// The goal of the woodcutter scenario: `{HasHouse: 1}`.
    pub fn house() -> Self {
        Self::new().require(Fact::HasHouse, 1)
    }

    /// Adds a requirement, replacing any earlier value for the same fact.
    pub fn require(mut self, fact: Fact, value: i64) -> Self {
        self.requirements.insert(fact, value);
        self
    }

    /// Builds a goal from `(key, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `GoapError::UnknownFact` if a key is not a known fact.
    pub fn from_facts<I, K>(facts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let mut goal = Self::new();
        for (key, value) in facts {
            goal = goal.require(key.as_ref().parse()?, value);
        }
        Ok(goal)
    }

    /// Returns the required value for a fact, if the goal constrains it.
    pub fn get(&self, fact: Fact) -> Option<i64> {
        self.requirements.get(&fact).copied()
    }

    /// Iterates over the requirements in fact order.
    pub fn iter(&self) -> impl Iterator<Item = (Fact, i64)> + '_ {
        self.requirements.iter().map(|(fact, value)| (*fact, *value))
    }

    /// Number of requirements.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// True when the goal has no requirements.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Checks whether a state meets every requirement exactly.
    pub fn is_satisfied_by(&self, state: &WorldState) -> bool {
        self.iter().all(|(fact, value)| state.get(fact) == value)
    }
}

impl WorldState {
    /// Checks if this state satisfies a goal's requirements.
    ///
    /// This is the same check as [`Goal::is_satisfied_by`], phrased from the
    /// state's side.
    pub fn satisfies(&self, goal: &Goal) -> bool {
        goal.is_satisfied_by(self)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (fact, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", fact, value)?;
        }
        write!(f, "}}")
    }
}
