use crate::search::{Path, Problem};
use itertools::Itertools;

/// Check that `path` is a well-formed solution of `problem`: it starts at the
/// initial state, every hop appears among the successors of the state before
/// it, the accumulated step costs match the path's cost, and the final state
/// satisfies the goal.
pub fn validate<P: Problem>(path: &Path<P::State>, problem: &P) -> Result<(), String> {
    if path.initial_state() != &problem.initial_state() {
        return Err(format!(
            "path starts at {:?}, not at the initial state {:?}",
            path.initial_state(),
            problem.initial_state()
        ));
    }

    let mut accumulated = 0.0;
    for (from, to) in path.states().iter().tuple_windows() {
        match problem.successors(from).iter().find(|s| &s.state == to) {
            Some(successor) => accumulated += successor.cost,
            None => {
                return Err(format!("{to:?} is not a successor of {from:?}"));
            }
        }
    }

    if (accumulated - path.cost()).abs() > 1e-9 {
        return Err(format!(
            "path cost {} does not match the accumulated step costs {}",
            path.cost(),
            accumulated
        ));
    }

    if !problem.is_goal(path.goal_state()) {
        return Err(format!(
            "path ends at {:?}, which is not a goal state",
            path.goal_state()
        ));
    }

    Ok(())
}
