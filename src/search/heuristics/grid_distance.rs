use crate::search::grid::{Cell, GridProblem};
use crate::search::heuristics::{Heuristic, HeuristicValue};
use ordered_float::OrderedFloat;

/// Distance metric used by [`GridDistance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMetric {
    Manhattan,
    Euclid,
}

/// Distance to the nearest goal cell, ignoring walls. Admissible for the
/// unit-step cost model, since a move changes the position by one cell and
/// costs at least one.
#[derive(Debug, Clone)]
pub struct GridDistance {
    metric: DistanceMetric,
}

impl GridDistance {
    pub fn new(metric: DistanceMetric) -> Self {
        Self { metric }
    }
}

impl Heuristic<GridProblem> for GridDistance {
    fn evaluate(&mut self, state: &Cell, problem: &GridProblem) -> HeuristicValue {
        problem
            .goals()
            .map(|goal| match self.metric {
                DistanceMetric::Manhattan => OrderedFloat(state.manhattan_distance(goal)),
                DistanceMetric::Euclid => OrderedFloat(state.euclidean_distance(goal)),
            })
            .min()
            // A map without goal cells estimates everything at zero.
            .unwrap_or(OrderedFloat(0.0))
    }
}
