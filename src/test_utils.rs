//! Shared fixtures for the test modules.

use crate::search::{search_engines::SearchResult, Path, Problem, Successor};
use std::collections::HashMap;

/// A graph problem defined by an explicit adjacency list, so tests can spell
/// out exact shapes. Edges keep their declaration order, which fixes the
/// push order of every engine, and parallel edges are allowed.
#[derive(Debug, Clone)]
pub struct AdjacencyProblem {
    initial: &'static str,
    goals: Vec<&'static str>,
    edges: HashMap<&'static str, Vec<(&'static str, f64)>>,
}

impl AdjacencyProblem {
    pub fn new(initial: &'static str) -> Self {
        Self {
            initial,
            goals: Vec::new(),
            edges: HashMap::new(),
        }
    }

    pub fn edge(mut self, from: &'static str, to: &'static str, cost: f64) -> Self {
        self.edges.entry(from).or_default().push((to, cost));
        self
    }

    pub fn goal(mut self, state: &'static str) -> Self {
        self.goals.push(state);
        self
    }
}

impl Problem for AdjacencyProblem {
    type State = &'static str;

    fn initial_state(&self) -> &'static str {
        self.initial
    }

    fn is_goal(&self, state: &&'static str) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &&'static str) -> Vec<Successor<&'static str>> {
        self.edges
            .get(state)
            .map(|edges| {
                edges
                    .iter()
                    .map(|&(to, cost)| Successor::new(to, cost))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// States 0, 1, 2, ... with a single unit-cost successor each. Without a
/// goal, a search on it only stops when a budget trips.
#[derive(Debug, Clone)]
pub struct EndlessChain {
    goal_at: Option<u64>,
}

impl EndlessChain {
    pub fn without_goal() -> Self {
        Self { goal_at: None }
    }

    pub fn with_goal_at(goal_at: u64) -> Self {
        Self {
            goal_at: Some(goal_at),
        }
    }
}

impl Problem for EndlessChain {
    type State = u64;

    fn initial_state(&self) -> u64 {
        0
    }

    fn is_goal(&self, state: &u64) -> bool {
        self.goal_at == Some(*state)
    }

    fn successors(&self, state: &u64) -> Vec<Successor<u64>> {
        vec![Successor::new(state + 1, 1.0)]
    }
}

pub fn expect_success<S: std::fmt::Debug>(result: SearchResult<S>) -> Path<S> {
    match result {
        SearchResult::Success(path) => path,
        other => panic!("expected a successful search, got {other:?}"),
    }
}
