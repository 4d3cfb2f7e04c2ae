//! A* search; with the zero heuristic this is uniform-cost search.

use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;

use crate::search::{
    search_engines::{
        SearchEngine, SearchLimits, SearchNode, SearchResult, SearchStatistics,
        TerminationCondition,
    },
    Heuristic, Problem,
};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// A* search, ordered by path cost plus heuristic.
///
/// Goal states are recognized when they are popped. A state reached again
/// with a cheaper path cost is re-enqueued; the stale frontier entry stays
/// behind and is skipped when it surfaces. With an admissible heuristic (the
/// zero heuristic included) the returned path is the globally cheapest one.
#[derive(Debug)]
pub struct AStar {
    limits: SearchLimits,
}

impl AStar {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl<P: Problem> SearchEngine<P> for AStar {
    fn search(
        &mut self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::State>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut termination = TerminationCondition::new(self.limits);

        let root = SearchNode::root(problem.initial_state());
        if problem.is_goal(root.get_state()) {
            statistics.finalise_search();
            return (SearchResult::Success(root.to_path()), statistics);
        }

        // Frontier entries index into the node arena; the queue itself only
        // carries the f-value.
        let mut nodes: Vec<SearchNode<P::State>> = Vec::new();
        let mut frontier: PriorityQueue<usize, Reverse<OrderedFloat<f64>>> = PriorityQueue::new();
        let mut best_g: HashMap<P::State, f64> = HashMap::new();
        let mut closed: HashSet<P::State> = HashSet::new();

        let h = heuristic.evaluate(root.get_state(), problem);
        statistics.increment_evaluated_nodes();
        best_g.insert(root.get_state().clone(), root.get_cost());
        frontier.push(0, Reverse(OrderedFloat(root.get_cost()) + h));
        nodes.push(root);

        while !frontier.is_empty() {
            if let Some(reason) = termination.should_terminate(statistics.expanded_nodes()) {
                termination.finalise();
                statistics.finalise_search();
                return (reason.into(), statistics);
            }

            let (index, _) = frontier.pop().unwrap();
            let node = &nodes[index];

            if closed.contains(node.get_state()) {
                statistics.increment_pruned_nodes();
                continue;
            }
            // Stale entry: a cheaper route to this state was enqueued later.
            let known_g = best_g.get(node.get_state()).copied().unwrap_or(f64::INFINITY);
            if node.get_cost() > known_g {
                statistics.increment_pruned_nodes();
                continue;
            }

            if problem.is_goal(node.get_state()) {
                statistics.increment_goal_nodes();
                termination.finalise();
                statistics.finalise_search();
                return (SearchResult::Success(node.to_path()), statistics);
            }

            closed.insert(node.get_state().clone());
            statistics.increment_expanded_nodes();

            for successor in problem.successors(nodes[index].get_state()) {
                if closed.contains(&successor.state) {
                    statistics.increment_pruned_nodes();
                    continue;
                }
                let child = nodes[index].child(successor.state, successor.cost);
                let known = best_g.get(child.get_state()).copied().unwrap_or(f64::INFINITY);
                if child.get_cost() >= known {
                    statistics.increment_pruned_nodes();
                    continue;
                }
                best_g.insert(child.get_state().clone(), child.get_cost());
                let h = heuristic.evaluate(child.get_state(), problem);
                statistics.increment_evaluated_nodes();
                let f = OrderedFloat(child.get_cost()) + h;

                let child_index = nodes.len();
                nodes.push(child);
                frontier.push(child_index, Reverse(f));
                statistics.increment_generated_nodes(1);
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
    use crate::search::grid::{CostModel, GridProblem};
    use crate::search::heuristics::{DistanceMetric, GridDistance, ZeroHeuristic};
    use crate::search::validate;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn run(problem: &AdjacencyProblem) -> (SearchResult<&'static str>, SearchStatistics) {
        AStar::new(SearchLimits::default()).search(problem, &mut ZeroHeuristic::new())
    }

    #[test]
    fn zero_heuristic_finds_the_global_optimum() {
        // The graph on which weighted DFS settles for the 11.0 path.
        let problem = AdjacencyProblem::new("A")
            .edge("A", "C", 1.0)
            .edge("A", "B", 10.0)
            .edge("B", "G", 1.0)
            .edge("C", "B", 1.0)
            .goal("G");

        let (result, _) = run(&problem);
        let path = expect_success(result);
        assert_eq!(path.states(), &["A", "C", "B", "G"]);
        assert_eq!(path.cost(), 3.0);
    }

    #[test]
    fn reopens_a_state_reached_cheaper_before_expansion() {
        let problem = AdjacencyProblem::new("A")
            .edge("A", "B", 5.0)
            .edge("A", "C", 1.0)
            .edge("C", "B", 1.0)
            .edge("B", "G", 10.0)
            .goal("G");

        let (result, _) = run(&problem);
        let path = expect_success(result);
        assert_eq!(path.states(), &["A", "C", "B", "G"]);
        assert_eq!(path.cost(), 12.0);
    }

    #[test]
    fn unreachable_goal_exhausts() {
        let problem = AdjacencyProblem::new("A").edge("A", "B", 1.0).goal("Z");

        let (result, _) = run(&problem);
        assert_eq!(result, SearchResult::Exhausted);
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
    fn manhattan_guided_grid_search_is_optimal() {
        let problem = GridProblem::from_text(
            "S..#.\n\
             .#.#.\n\
             .#...\n\
             .#.#.\n\
             ...#G",
            CostModel::Step,
        )
        .unwrap();

        let mut heuristic = GridDistance::new(DistanceMetric::Manhattan);
        let (result, statistics) =
            AStar::new(SearchLimits::default()).search(&problem, &mut heuristic);

        let path = expect_success(result);
        assert!(validate(&path, &problem).is_ok());
        assert_approx_eq!(path.cost(), 8.0);
        assert!(statistics.evaluated_nodes() > 0);
    }
}
