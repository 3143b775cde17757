use std::fmt;

use crate::error::Result;
use crate::{Action, WorldState};

/// An ordered sequence of actions produced by the planner.
///
/// An empty plan means the start state already satisfied the goal.
///
/// # Examples
///
/// ```
/// use goap_woodcutter::{Action, Fact, Plan, WorldState};
///
/// let plan = Plan::from(vec![Action::ChopWood, Action::TransportWood]);
/// let start = WorldState::new(5, 3).with_fact(Fact::ForestWood, 1);
///
/// let end = plan.replay(&start).unwrap();
/// assert_eq!(end.get(Fact::PiledWood), 1);
/// assert_eq!(plan.to_string(), "ChopWood -> TransportWood");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Action>,
}

impl Plan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// The actions in execution order.
    pub fn steps(&self) -> &[Action] {
        &self.steps
    }

    /// Number of steps in the plan.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when no action is needed.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates over the steps in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.steps.iter()
    }

    /// The action names in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|action| action.name()).collect()
    }

    /// Applies every step to `start`, checking each precondition first.
    ///
    /// # Errors
    ///
    /// Returns `GoapError::PreconditionNotMet` at the first step whose
    /// precondition does not hold.
    pub fn replay(&self, start: &WorldState) -> Result<WorldState> {
        self.steps
            .iter()
            .try_fold(*start, |state, action| action.try_apply(&state))
    }

    /// Every state visited while executing the plan, starting with `start`.
    ///
    /// # Errors
    ///
    /// Same as [`Plan::replay`].
    pub fn trajectory(&self, start: &WorldState) -> Result<Vec<WorldState>> {
        let mut states = Vec::with_capacity(self.steps.len() + 1);
        states.push(*start);
        let mut current = *start;
        for action in &self.steps {
            current = action.try_apply(&current)?;
            states.push(current);
        }
        Ok(states)
    }
}

impl From<Vec<Action>> for Plan {
    fn from(steps: Vec<Action>) -> Self {
        Self { steps }
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return write!(f, "<empty plan>");
        }
        for (i, action) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}
