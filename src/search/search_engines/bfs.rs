//! Breadth first search

use crate::search::{
    search_engines::{
        SearchEngine, SearchLimits, SearchNode, SearchResult, SearchStatistics,
        TerminationCondition,
    },
    Heuristic, Problem,
};
use std::collections::{HashSet, VecDeque};

/// Breadth-first search. Goal states are recognized when they are generated,
/// and the first one found wins, so the returned path has the fewest edges of
/// any goal path; its cost is reported but plays no part in the traversal.
#[derive(Debug)]
pub struct BFS {
    limits: SearchLimits,
}

impl BFS {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl<P: Problem> SearchEngine<P> for BFS {
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

        let mut seen: HashSet<P::State> = HashSet::new();
        seen.insert(problem.initial_state());
        let mut queue = VecDeque::new();
        queue.push_back(root);

        while !queue.is_empty() {
            if let Some(reason) = termination.should_terminate(statistics.expanded_nodes()) {
                termination.finalise();
                statistics.finalise_search();
                return (reason.into(), statistics);
            }

            let node = queue.pop_front().unwrap();
            statistics.increment_expanded_nodes();

            for successor in problem.successors(node.get_state()) {
                if seen.contains(&successor.state) {
                    statistics.increment_pruned_nodes();
                    continue;
                }
                let child = node.child(successor.state, successor.cost);
                statistics.increment_generated_nodes(1);

                if problem.is_goal(child.get_state()) {
                    statistics.increment_goal_nodes();
                    termination.finalise();
                    statistics.finalise_search();
                    return (SearchResult::Success(child.to_path()), statistics);
                }
                seen.insert(child.get_state().clone());
                queue.push_back(child);
            }
        }

        termination.finalise();
        statistics.finalise_search();
        (SearchResult::Exhausted, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::heuristics::ZeroHeuristic;
    use crate::test_utils::*;

    fn run(problem: &AdjacencyProblem) -> (SearchResult<&'static str>, SearchStatistics) {
        BFS::new(SearchLimits::default()).search(problem, &mut ZeroHeuristic::new())
    }

    #[test]
    fn finds_the_path_with_fewest_edges() {
        // The direct edge is expensive but two hops shorter; BFS takes it.
        let problem = AdjacencyProblem::new("A")
            .edge("A", "B", 1.0)
            .edge("A", "G", 9.0)
            .edge("B", "C", 1.0)
            .edge("C", "G", 1.0)
            .goal("G");

        let (result, _) = run(&problem);
        let path = expect_success(result);
        assert_eq!(path.states(), &["A", "G"]);
        assert_eq!(path.cost(), 9.0);
    }

    #[test]
    fn goal_initial_state_returns_immediately() {
        let problem = AdjacencyProblem::new("A").goal("A");

        let (result, statistics) = run(&problem);
        let path = expect_success(result);
        assert_eq!(path.states(), &["A"]);
        assert_eq!(statistics.expanded_nodes(), 0);
    }

    #[test]
    fn unreachable_goal_exhausts() {
        let problem = AdjacencyProblem::new("A")
            .edge("A", "B", 1.0)
            .edge("B", "A", 1.0)
            .goal("Z");

        let (result, _) = run(&problem);
        assert_eq!(result, SearchResult::Exhausted);
    }

    #[test]
    fn expansion_budget_trips_on_an_endless_chain() {
        let problem = EndlessChain::without_goal();
        let limits = SearchLimits {
            expansion_limit: Some(10),
            ..SearchLimits::default()
        };
        let (result, _) = BFS::new(limits).search(&problem, &mut ZeroHeuristic::new());
        assert_eq!(result, SearchResult::ExpansionLimitExceeded);
    }
}
