//! # Action Module for the woodcutter planner
//!
//! Actions are the only way a [`WorldState`] changes during planning. Each
//! action has:
//!
//! * a precondition, checked with [`Action::is_applicable`]
//! * an effect, produced with [`Action::apply`]
//!
//! Both are pure functions of the input state. Every action costs one step.
//!
//! ## Basic Usage
//!
//! ```
//! use goap_woodcutter::{Action, Fact, WorldState};
//!
//! let state = WorldState::new(5, 3).with_fact(Fact::ForestWood, 10);
//!
//! assert!(Action::ChopWood.is_applicable(&state));
//! assert!(!Action::TransportWood.is_applicable(&state));
//!
//! let next = Action::ChopWood.apply(&state);
//! assert_eq!(next.get(Fact::ForestWood), 9);
//! assert_eq!(next.get(Fact::HandWood), 1);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{GoapError, Result};
use crate::world_state::{Fact, WorldState};

/// The actions available to the woodcutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Fell one unit of forest wood into the woodcutter's hands.
    ChopWood,
    /// Carry everything in hand to the pile.
    TransportWood,
    /// Turn a full pile into a house.
    BuildHouse,
}

impl Action {
    /// The full action set in its default expansion order.
    pub const ALL: [Action; 3] = [Action::ChopWood, Action::TransportWood, Action::BuildHouse];

    /// The name this action is reported and parsed by.
    pub fn name(self) -> &'static str {
        match self {
            Action::ChopWood => "ChopWood",
            Action::TransportWood => "TransportWood",
            Action::BuildHouse => "BuildHouse",
        }
    }

    /// Checks if this action can be performed in the given state.
    ///
    /// - `ChopWood`: forest wood is left and the hands are not full
    /// - `TransportWood`: something is in hand and the pile would not exceed
    ///   the wood needed for the house
    /// - `BuildHouse`: the pile holds at least the wood needed for the house
    ///
    /// # Examples
    ///
    /// ```
    /// use goap_woodcutter::{Action, Fact, WorldState};
    ///
    /// let state = WorldState::new(5, 3)
    ///     .with_fact(Fact::HandWood, 3)
    ///     .with_fact(Fact::PiledWood, 3);
    ///
    /// // 3 + 3 would overfill the pile for a five-log house.
    /// assert!(!Action::TransportWood.is_applicable(&state));
    /// ```
    pub fn is_applicable(self, state: &WorldState) -> bool {
        let forest = state.get(Fact::ForestWood);
        let hand = state.get(Fact::HandWood);
        let piled = state.get(Fact::PiledWood);
        let needed = state.get(Fact::WoodNeededForHouse);
        let capacity = state.get(Fact::TransportCapacity);

        match self {
            Action::ChopWood => forest > 0 && hand < capacity,
            Action::TransportWood => {
                hand > 0 && piled.checked_add(hand).is_some_and(|total| total <= needed)
            }
            Action::BuildHouse => piled >= needed,
        }
    }

    /// Produces the state that results from performing this action.
    ///
    /// The input state is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the action is not applicable to `state`. Use
    /// [`Action::try_apply`] when the caller cannot guarantee the precondition.
    pub fn apply(self, state: &WorldState) -> WorldState {
        assert!(
            self.is_applicable(state),
            "{} applied to a state that does not meet its precondition: {}",
            self,
            state
        );
        self.effect(state)
    }

    /// Checked variant of [`Action::apply`].
    ///
    /// # Errors
    ///
    /// Returns `GoapError::PreconditionNotMet` if the action is not applicable.
    ///
    /// # Examples
    ///
    /// ```
    /// use goap_woodcutter::{Action, GoapError, WorldState};
    ///
    /// let empty = WorldState::new(5, 3);
    /// assert!(matches!(
    ///     Action::BuildHouse.try_apply(&empty),
    ///     Err(GoapError::PreconditionNotMet(_))
    /// ));
    /// ```
    pub fn try_apply(self, state: &WorldState) -> Result<WorldState> {
        if !self.is_applicable(state) {
            return Err(GoapError::PreconditionNotMet(format!(
                "{} in state {}",
                self, state
            )));
        }
        Ok(self.effect(state))
    }

    fn effect(self, state: &WorldState) -> WorldState {
        let hand = state.get(Fact::HandWood);
        let piled = state.get(Fact::PiledWood);

        match self {
            Action::ChopWood => state
                .with_fact(Fact::HandWood, hand + 1)
                .with_fact(Fact::ForestWood, state.get(Fact::ForestWood) - 1),
            Action::TransportWood => state
                .with_fact(Fact::PiledWood, piled + hand)
                .with_fact(Fact::HandWood, 0),
            Action::BuildHouse => state
                .with_fact(Fact::PiledWood, piled - state.get(Fact::WoodNeededForHouse))
                .with_fact(Fact::HasHouse, 1),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = GoapError;

    fn from_str(s: &str) -> Result<Self> {
        Action::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| GoapError::UnknownAction(s.to_string()))
    }
}
