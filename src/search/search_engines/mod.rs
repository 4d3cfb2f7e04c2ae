mod astar;
mod bfs;
mod gbfs;
mod search_engine;
mod search_node;
mod search_statistics;
mod termination_condition;
mod weighted_dfs;

pub use astar::AStar;
pub use bfs::BFS;
pub use gbfs::GBFS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_node::SearchNode;
pub use search_statistics::SearchStatistics;
pub use termination_condition::{SearchLimits, Termination, TerminationCondition};
pub use weighted_dfs::WeightedDFS;
