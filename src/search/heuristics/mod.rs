mod grid_distance;
mod heuristic;
mod zero_heuristic;

pub use grid_distance::{DistanceMetric, GridDistance};
pub use heuristic::{GridHeuristicNames, Heuristic, HeuristicValue};
pub use zero_heuristic::ZeroHeuristic;
