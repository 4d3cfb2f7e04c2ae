use crate::search::grid::GridProblem;
use crate::search::heuristics::{DistanceMetric, GridDistance, ZeroHeuristic};
use crate::search::Problem;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic<P: Problem>: Debug {
    /// Estimate of the remaining cost from `state` to the nearest goal.
    /// Takes `&mut self` so that implementations may cache.
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum GridHeuristicNames {
    #[clap(help = "Manhattan distance to the nearest goal cell.")]
    Manhattan,
    #[clap(help = "Straight-line distance to the nearest goal cell.")]
    Euclid,
    #[clap(name = "zero", help = "The zero heuristic.")]
    ZeroHeuristic,
}

impl GridHeuristicNames {
    pub fn create(&self) -> Box<dyn Heuristic<GridProblem>> {
        match self {
            GridHeuristicNames::Manhattan => {
                Box::new(GridDistance::new(DistanceMetric::Manhattan))
            }
            GridHeuristicNames::Euclid => Box::new(GridDistance::new(DistanceMetric::Euclid)),
            GridHeuristicNames::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}
