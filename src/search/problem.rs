//! The caller-supplied side of a search: an implicit graph described by an
//! initial state, a goal test and a costed successor function. The search
//! engines only ever query a problem, they never mutate it.

use std::fmt::Debug;
use std::hash::Hash;

/// One outgoing edge produced by [`Problem::successors`]: the state the edge
/// leads to and the non-negative cost of taking it.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S> {
    pub state: S,
    pub cost: f64,
}

impl<S> Successor<S> {
    pub fn new(state: S, cost: f64) -> Self {
        Self { state, cost }
    }
}

/// A search problem over an implicit state space.
///
/// State equality and hashing define node identity for duplicate detection,
/// so two states that compare equal must be interchangeable for the rest of
/// the search.
///
/// `successors` must be a pure function of the state (no dependency on
/// traversal history) and must only report non-negative costs. Neither is
/// checked; a problem that violates them gets undefined search results and
/// possibly a search that never terminates.
pub trait Problem {
    type State: Clone + Debug + Eq + Hash;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State>>;
}
