use thiserror::Error;

use crate::world_state::Fact;

/// Errors raised while building planning inputs or running a search.
///
/// Failing to find a plan is not an error: the planner reports it as
/// `Ok(None)`.
///
/// # Examples
///
/// ```
/// use goap_woodcutter::{Fact, GoapError};
///
/// let error = GoapError::MissingConfiguration(Fact::TransportCapacity);
/// assert_eq!(
///     format!("{}", error),
///     "Missing required configuration fact: transport_capacity"
/// );
/// ```
#[derive(Error, Debug)]
pub enum GoapError {
    /// A start state was built without one of the configuration facts
    #[error("Missing required configuration fact: {0}")]
    MissingConfiguration(Fact),

    /// A state or goal map named a fact this world does not know
    #[error("Unknown fact: {0}")]
    UnknownFact(String),

    /// World facts are counts and cannot go below zero
    #[error("Fact {fact} must not be negative, got {value}")]
    NegativeFact { fact: Fact, value: i64 },

    /// An action name could not be parsed
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// A heuristic name could not be parsed
    #[error("Unknown heuristic: {0}")]
    UnknownHeuristic(String),

    /// An action was applied to a state that does not meet its precondition
    #[error("Action precondition not met: {0}")]
    PreconditionNotMet(String),

    /// The search gave up after the configured number of expansions
    #[error("Search expansion limit of {0} reached before the goal was found")]
    ExpansionLimitReached(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, GoapError>;
