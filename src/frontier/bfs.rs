use super::Frontier;
use crate::node::{Node, NodeId};
use crate::SearchState;
use std::collections::{HashSet, VecDeque};

/// First-in first-out frontier.
#[derive(Debug)]
pub struct BreadthFirst<S> {
    queue: VecDeque<(NodeId, S)>,
    members: HashSet<S>,
}

impl<S: SearchState> BreadthFirst<S> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            members: HashSet::new(),
        }
    }
}

impl<S: SearchState> Default for BreadthFirst<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState, G: ?Sized> Frontier<S, G> for BreadthFirst<S> {
    fn prepare(&mut self, _goal: &G) {
        self.queue.clear();
        self.members.clear();
    }

    fn add(&mut self, node: &Node<S>) {
        self.queue.push_back((node.id(), node.state().clone()));
        self.members.insert(node.state().clone());
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (id, state) = self.queue.pop_front()?;
        self.members.remove(&state);
        Some(id)
    }

    fn contains(&self, state: &S) -> bool {
        self.members.contains(state)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn size(&self) -> usize {
        self.queue.len()
    }

    fn name(&self) -> &str {
        "breadth-first"
    }
}
