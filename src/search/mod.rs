pub mod grid;
pub mod heuristics;
mod path;
mod problem;
pub mod search_engines;
mod validate;
mod verbosity;

pub use heuristics::{Heuristic, HeuristicValue};
pub use path::Path;
pub use problem::{Problem, Successor};
pub use validate::validate;
pub use verbosity::Verbosity;
