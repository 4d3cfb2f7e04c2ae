//! This module implements the greedy best-first search algorithm.

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
use std::collections::HashSet;

/// Greedy best-first search, ordered by the heuristic alone. Fast to reach a
/// goal when the heuristic is informative, with no cost guarantee at all; the
/// first route into a state is the one kept.
#[derive(Debug)]
pub struct GBFS {
    limits: SearchLimits,
}

impl GBFS {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl<P: Problem> SearchEngine<P> for GBFS {
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

        let mut nodes: Vec<SearchNode<P::State>> = Vec::new();
        let mut frontier: PriorityQueue<usize, Reverse<OrderedFloat<f64>>> = PriorityQueue::new();
        let mut seen: HashSet<P::State> = HashSet::new();

        let h = heuristic.evaluate(root.get_state(), problem);
        statistics.increment_evaluated_nodes();
        seen.insert(problem.initial_state());
        frontier.push(0, Reverse(h));
        nodes.push(root);

        while !frontier.is_empty() {
            if let Some(reason) = termination.should_terminate(statistics.expanded_nodes()) {
                termination.finalise();
                statistics.finalise_search();
                return (reason.into(), statistics);
            }

            let (index, _) = frontier.pop().unwrap();

            if problem.is_goal(nodes[index].get_state()) {
                statistics.increment_goal_nodes();
                termination.finalise();
                statistics.finalise_search();
                return (SearchResult::Success(nodes[index].to_path()), statistics);
            }
            statistics.increment_expanded_nodes();

            for successor in problem.successors(nodes[index].get_state()) {
                if seen.contains(&successor.state) {
                    statistics.increment_pruned_nodes();
                    continue;
                }
                let child = nodes[index].child(successor.state, successor.cost);
                seen.insert(child.get_state().clone());
                let h = heuristic.evaluate(child.get_state(), problem);
                statistics.increment_evaluated_nodes();

                let child_index = nodes.len();
                nodes.push(child);
                frontier.push(child_index, Reverse(h));
                statistics.increment_generated_nodes(1);
            }
        }

        termination.finalise();
        statistics.finalise_search();
        (SearchResult::Exhausted, statistics)
    }
}
