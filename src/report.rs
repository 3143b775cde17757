//! Presentation helpers for planner results.
//!
//! [`render_text`] produces the console report; [`render_dot`] draws the state
//! trajectory of a plan as a Graphviz digraph.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::{Goal, Plan, WorldState};

/// Renders the console report for a planning result.
///
/// ```
/// use goap_woodcutter::{report, Action, Goal, Plan};
///
/// let plan = Plan::from(vec![Action::BuildHouse]);
/// let text = report::render_text(&Goal::house(), Some(&plan));
/// assert_eq!(text, "Plan found with 1 action:\n  1. BuildHouse\nGoal {HasHouse: 1} reached.\n");
///
/// let text = report::render_text(&Goal::house(), None);
/// assert_eq!(text, "No plan found to reach goal {HasHouse: 1}.\n");
/// ```
pub fn render_text(goal: &Goal, plan: Option<&Plan>) -> String {
    let mut out = String::new();
    match plan {
        Some(plan) => {
            let noun = if plan.len() == 1 { "action" } else { "actions" };
            // Writing into a String cannot fail.
            let _ = writeln!(out, "Plan found with {} {}:", plan.len(), noun);
            for (i, action) in plan.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", i + 1, action);
            }
            let _ = writeln!(out, "Goal {} reached.", goal);
        }
        None => {
            let _ = writeln!(out, "No plan found to reach goal {}.", goal);
        }
    }
    out
}

/// Renders a plan as a DOT digraph: one node per visited state, one edge per action.
///
/// # Errors
///
/// Returns `GoapError::PreconditionNotMet` if the plan does not replay from `start`.
pub fn render_dot(start: &WorldState, goal: &Goal, plan: &Plan) -> Result<String> {
    let states = plan.trajectory(start)?;
    let mut dot = String::new();

    let _ = writeln!(dot, "digraph GOAP {{");
    let _ = writeln!(dot, "    rankdir=LR;");
    let _ = writeln!(dot, "    node [shape=box, style=filled, fillcolor=lightblue];");
    let _ = writeln!(dot, "    edge [fontsize=10];");

    let last = states.len() - 1;
    for (i, state) in states.iter().enumerate() {
        let fill = if i == 0 {
            ", fillcolor=lightgreen"
        } else if i == last && state.satisfies(goal) {
            ", fillcolor=lightpink"
        } else {
            ""
        };
        let _ = writeln!(
            dot,
            "    state_{} [label=\"{}\"{}];",
            i,
            state_label(state),
            fill
        );
    }

    for (i, action) in plan.iter().enumerate() {
        let _ = writeln!(
            dot,
            "    state_{} -> state_{} [label=\"{}. {}\"];",
            i,
            i + 1,
            i + 1,
            action
        );
    }

    let _ = writeln!(dot, "}}");
    Ok(dot)
}

/// Writes [`render_dot`] output to `path`.
pub fn write_dot(path: impl AsRef<Path>, start: &WorldState, goal: &Goal, plan: &Plan) -> Result<()> {
    let dot = render_dot(start, goal, plan)?;
    let mut file = File::create(path)?;
    file.write_all(dot.as_bytes())?;
    Ok(())
}

fn state_label(state: &WorldState) -> String {
    state
        .facts()
        .filter(|(fact, _)| !fact.is_configuration())
        .map(|(fact, value)| format!("{}={}", fact, value))
        .collect::<Vec<_>>()
        .join("\\n")
}
