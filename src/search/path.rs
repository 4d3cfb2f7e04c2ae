//! A path is the successful outcome of a search: the full sequence of states
//! from the initial state to a goal state, together with the accumulated cost
//! of the actions along it.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::Deref;

/// A path is never empty: even the degenerate solution where the initial
/// state already satisfies the goal holds that one state, at cost zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path<S> {
    states: Vec<S>,
    cost: f64,
}

impl<S> Path<S> {
    pub fn new(states: Vec<S>, cost: f64) -> Self {
        debug_assert!(
            !states.is_empty(),
            "a path holds at least the initial state"
        );
        Self { states, cost }
    }

    /// The path of a problem whose initial state is already a goal.
    pub fn trivial(initial: S) -> Self {
        Self {
            states: vec![initial],
            cost: 0.0,
        }
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn initial_state(&self) -> &S {
        self.states.first().expect("paths are never empty")
    }

    pub fn goal_state(&self) -> &S {
        self.states.last().expect("paths are never empty")
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<S: Debug> Path<S> {
    pub fn render(&self) -> String {
        format!(
            "{} (cost {})",
            self.states.iter().map(|state| format!("{state:?}")).join(" -> "),
            self.cost
        )
    }
}

impl<S> Deref for Path<S> {
    type Target = [S];

    fn deref(&self) -> &Self::Target {
        &self.states
    }
}

impl<S> IntoIterator for Path<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}
