use crate::search::{Heuristic, HeuristicValue, Problem};

/// Estimates every state at zero remaining cost. Turns [`AStar`] into
/// uniform-cost search and [`GBFS`] into an unordered flood.
///
/// [`AStar`]: crate::search::search_engines::AStar
/// [`GBFS`]: crate::search::search_engines::GBFS
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<P: Problem> Heuristic<P> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &P::State, _problem: &P) -> HeuristicValue {
        (0.).into()
    }
}
