//! Depth-first search over weighted edges that returns the cheapest goal
//! path it discovered.

use tracing::info;

use crate::search::{
    search_engines::{
        SearchEngine, SearchLimits, SearchNode, SearchResult, SearchStatistics,
        TerminationCondition,
    },
    Heuristic, Problem,
};
use std::collections::HashSet;

/// Depth-first search with per-edge costs.
///
/// The frontier is a stack, so traversal order has nothing to do with path
/// cost. Reaching a goal therefore does not stop the search: the engine
/// records the cheapest goal path popped so far and keeps going until the
/// frontier is exhausted (or a budget trips), then returns the best one.
///
/// A state is expanded at most once. A second, cheaper route into an already
/// expanded state is dropped, so the returned path is the cheapest path
/// *discovered*, not necessarily the cheapest that exists. States that are
/// merely on the frontier do not block re-enqueueing: the same state may sit
/// there several times at different costs. When global optimality matters,
/// use [`AStar`] with the zero heuristic instead.
///
/// [`AStar`]: crate::search::search_engines::AStar
#[derive(Debug)]
pub struct WeightedDFS {
    limits: SearchLimits,
}

impl WeightedDFS {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl<P: Problem> SearchEngine<P> for WeightedDFS {
    fn search(
        &mut self,
        problem: &P,
        _heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::State>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut termination = TerminationCondition::new(self.limits);

        let root = SearchNode::root(problem.initial_state());
        if problem.is_goal(root.get_state()) {
            statistics.finalise_search();
            return (SearchResult::Success(root.to_path()), statistics);
        }

        let mut frontier = vec![root];
        let mut explored: HashSet<P::State> = HashSet::new();
        let mut cheapest_cost = f64::INFINITY;
        let mut best_path = None;

        while !frontier.is_empty() {
            if let Some(reason) = termination.should_terminate(statistics.expanded_nodes()) {
                termination.finalise();
                statistics.finalise_search();
                // A goal path found before the budget tripped is still the
                // cheapest one discovered, so it wins over the limit signal.
                let result = match best_path {
                    Some(path) => SearchResult::Success(path),
                    None => reason.into(),
                };
                return (result, statistics);
            }

            let node = frontier.pop().unwrap();

            if problem.is_goal(node.get_state()) {
                statistics.increment_goal_nodes();
                if node.get_cost() < cheapest_cost {
                    cheapest_cost = node.get_cost();
                    best_path = Some(node.to_path());
                    info!(cost = cheapest_cost, "found a cheaper goal path");
                }
                // Keep searching: a node still on the frontier may lead to a
                // cheaper goal path.
            }

            if explored.contains(node.get_state()) {
                statistics.increment_pruned_nodes();
                continue;
            }
            explored.insert(node.get_state().clone());
            statistics.increment_expanded_nodes();

            for successor in problem.successors(node.get_state()) {
                if explored.contains(&successor.state) {
                    statistics.increment_pruned_nodes();
                    continue;
                }
                frontier.push(node.child(successor.state, successor.cost));
                statistics.increment_generated_nodes(1);
            }
        }

        termination.finalise();
        statistics.finalise_search();
        let result = match best_path {
            Some(path) => SearchResult::Success(path),
            None => SearchResult::Exhausted,
        };
        (result, statistics)
    }
}
