use crate::search::Path;

/// A node on a search frontier.
///
/// Each node carries the full sequence of states from the initial state up to
/// and including its own, so a node is self-contained: the same state may sit
/// on the frontier several times with different costs and different
/// histories. Nodes are immutable once created; expansion builds fresh child
/// nodes rather than mutating in place.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    state: S,
    /// Cost to reach this node, the sum of action costs along `path`.
    cost: f64,
    /// States from the initial state to `state`, both inclusive.
    path: Vec<S>,
}

impl<S: Clone> SearchNode<S> {
    pub fn root(initial: S) -> Self {
        Self {
            state: initial.clone(),
            cost: 0.0,
            path: vec![initial],
        }
    }

    /// The node reached by taking an action of cost `action_cost` from this
    /// node to `state`.
    pub fn child(&self, state: S, action_cost: f64) -> Self {
        let mut path = self.path.clone();
        path.push(state.clone());
        Self {
            state,
            cost: self.cost + action_cost,
            path,
        }
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_cost(&self) -> f64 {
        self.cost
    }

    pub fn to_path(&self) -> Path<S> {
        Path::new(self.path.clone(), self.cost)
    }
}
