use super::Frontier;
use crate::node::{Node, NodeId};
use crate::SearchState;
use std::collections::HashSet;

/// Last-in first-out frontier.
#[derive(Debug)]
pub struct DepthFirst<S> {
    stack: Vec<(NodeId, S)>,
    members: HashSet<S>,
}

impl<S: SearchState> DepthFirst<S> {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            members: HashSet::new(),
        }
    }
}

impl<S: SearchState> Default for DepthFirst<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState, G: ?Sized> Frontier<S, G> for DepthFirst<S> {
    fn prepare(&mut self, _goal: &G) {
        self.stack.clear();
        self.members.clear();
    }

    fn add(&mut self, node: &Node<S>) {
        self.stack.push((node.id(), node.state().clone()));
        self.members.insert(node.state().clone());
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (id, state) = self.stack.pop()?;
        self.members.remove(&state);
        Some(id)
    }

    fn contains(&self, state: &S) -> bool {
        self.members.contains(state)
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn size(&self) -> usize {
        self.stack.len()
    }

    fn name(&self) -> &str {
        "depth-first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::testing::{table_with_children, Num};

    fn frontier() -> Box<dyn Frontier<Num, ()>> {
        Box::new(DepthFirst::new())
    }

    #[test]
    fn test_pops_most_recent_first() {
        let (table, ids) = table_with_children(&[3, 1, 2]);
        let mut f = frontier();
        f.prepare(&());
        for id in &ids {
            f.add(table.get(*id));
        }

        assert_eq!(f.pop(), Some(ids[2]));
        assert_eq!(f.pop(), Some(ids[1]));
        assert_eq!(f.pop(), Some(ids[0]));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn test_size_and_contains() {
        let (table, ids) = table_with_children(&[7, 8]);
        let mut f = frontier();
        f.add(table.get(ids[0]));
        f.add(table.get(ids[1]));

        assert_eq!(f.size(), 2);
        assert!(f.contains(&Num(7)));
        f.pop();
        assert_eq!(f.size(), 1);
        assert!(!f.contains(&Num(8)));
        assert_eq!(f.name(), "depth-first");
    }
}
