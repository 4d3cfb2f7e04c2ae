use crate::search::{
    search_engines::{AStar, SearchLimits, SearchStatistics, Termination, BFS, GBFS, WeightedDFS},
    Heuristic, Path, Problem,
};
use clap;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<S> {
    /// A goal was reached; this is the cheapest goal path the engine
    /// discovered before it stopped.
    Success(Path<S>),
    /// The frontier was exhausted without any goal state being reached. This
    /// is an expected outcome for callers to branch on, not an error.
    Exhausted,
    /// The wall-clock budget ran out before any goal was found.
    TimeLimitExceeded,
    /// The memory budget ran out before any goal was found.
    MemoryLimitExceeded,
    /// The node expansion budget ran out before any goal was found.
    ExpansionLimitExceeded,
}

impl<S> From<Termination> for SearchResult<S> {
    fn from(reason: Termination) -> Self {
        match reason {
            Termination::TimeLimit => SearchResult::TimeLimitExceeded,
            Termination::MemoryLimit => SearchResult::MemoryLimitExceeded,
            Termination::ExpansionLimit => SearchResult::ExpansionLimitExceeded,
        }
    }
}

pub trait SearchEngine<P: Problem> {
    /// Run the search to completion. Engines that do not use a heuristic
    /// still take one, to keep a uniform surface; pass [`ZeroHeuristic`].
    ///
    /// [`ZeroHeuristic`]: crate::search::heuristics::ZeroHeuristic
    fn search(
        &mut self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::State>, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Depth-first search that keeps the cheapest goal path it discovers.")]
    WeightedDFS,
    #[clap(help = "Breadth-first search, first goal found wins.")]
    BFS,
    #[clap(help = "Greedy best-first search, ordered by the heuristic alone.")]
    GBFS,
    #[clap(name = "astar", help = "A* search, ordered by path cost plus heuristic.")]
    AStar,
    #[clap(name = "ucs", help = "Uniform-cost search: A* with the zero heuristic.")]
    UCS,
}

impl SearchEngineName {
    pub fn create<P: Problem + 'static>(&self, limits: SearchLimits) -> Box<dyn SearchEngine<P>> {
        match self {
            SearchEngineName::WeightedDFS => Box::new(WeightedDFS::new(limits)),
            SearchEngineName::BFS => Box::new(BFS::new(limits)),
            SearchEngineName::GBFS => Box::new(GBFS::new(limits)),
            SearchEngineName::AStar | SearchEngineName::UCS => Box::new(AStar::new(limits)),
        }
    }
}
