//! Per-run search tree.
//!
//! Every state admitted during a run gets one [`Node`] in a [`NodeTable`]. Parent
//! links are plain indices into the table, so the tree has a single owner and
//! states stay independent values.

use crate::SearchState;

/// Index of a node in its [`NodeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A state together with the bookkeeping the driver keeps for it.
#[derive(Debug, Clone)]
pub struct Node<S: SearchState> {
    id: NodeId,
    state: S,
    /// `None` only for the root
    parent: Option<NodeId>,
    /// Action that produced this state from its parent
    action: Option<S::Action>,
    path_cost: f32,
    depth: usize,
}

impl<S: SearchState> Node<S> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn action(&self) -> Option<&S::Action> {
        self.action.as_ref()
    }

    /// Accumulated cost from the root.
    pub fn path_cost(&self) -> f32 {
        self.path_cost
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Arena of nodes created during one search run.
///
/// The table is created with its root and only grows; nodes are never removed.
#[derive(Debug)]
pub struct NodeTable<S: SearchState> {
    nodes: Vec<Node<S>>,
}

impl<S: SearchState> NodeTable<S> {
    /// Creates a table whose only node is `state`, with no parent and zero cost.
    pub fn with_root(state: S) -> Self {
        Self {
            nodes: vec![Node {
                id: NodeId(0),
                state,
                parent: None,
                action: None,
                path_cost: 0.0,
                depth: 0,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Records `state` as reached from `parent` via `action`.
    ///
    /// # Panics
    ///
    /// If `parent` does not belong to this table.
    pub fn insert_child(&mut self, parent: NodeId, action: S::Action, state: S) -> NodeId {
        let parent_node = &self.nodes[parent.0];
        let path_cost = parent_node.path_cost + parent_node.state.step_cost(&action);
        let depth = parent_node.depth + 1;

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            state,
            parent: Some(parent),
            action: Some(action),
            path_cost,
            depth,
        });
        id
    }

    /// # Panics
    ///
    /// If `id` does not belong to this table.
    pub fn get(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Actions leading from the root to `id`, in root-to-goal order.
    ///
    /// Walks parent links back to the root collecting each node's generating
    /// action, then reverses.
    pub fn extract_plan(&self, id: NodeId) -> Vec<S::Action> {
        let mut plan = Vec::with_capacity(self.get(id).depth);
        let mut current = self.get(id);

        while let Some(parent) = current.parent {
            if let Some(action) = &current.action {
                plan.push(action.clone());
            }
            current = self.get(parent);
        }

        plan.reverse();
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Word(String);

    impl SearchState for Word {
        type Action = char;

        fn applicable_actions(&self, actions: &[char]) -> Vec<char> {
            actions.to_vec()
        }

        fn result(&self, action: &char) -> Self {
            let mut next = self.0.clone();
            next.push(*action);
            Word(next)
        }

        fn step_cost(&self, action: &char) -> f32 {
            if action.is_uppercase() {
                2.5
            } else {
                1.0
            }
        }
    }

    #[test]
    fn test_root_has_no_parent_and_zero_cost() {
        let table = NodeTable::with_root(Word(String::new()));
        let root = table.get(table.root());
        assert!(root.is_root());
        assert_eq!(root.path_cost(), 0.0);
        assert_eq!(root.depth(), 0);
        assert!(root.action().is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_insert_child_accumulates_cost_and_depth() {
        let mut table = NodeTable::with_root(Word(String::new()));
        let a = table.insert_child(table.root(), 'a', Word("a".into()));
        let b = table.insert_child(a, 'B', Word("aB".into()));

        let node = table.get(b);
        assert_eq!(node.parent(), Some(a));
        assert_eq!(node.action(), Some(&'B'));
        assert_eq!(node.depth(), 2);
        assert_eq!(node.path_cost(), 3.5);
        assert_eq!(b.index(), 2);
    }

    #[test]
    fn test_extract_plan_root_to_goal_order() {
        let mut table = NodeTable::with_root(Word(String::new()));
        let a = table.insert_child(table.root(), 'a', Word("a".into()));
        // sibling branch that must not leak into the plan
        let _x = table.insert_child(table.root(), 'x', Word("x".into()));
        let b = table.insert_child(a, 'b', Word("ab".into()));
        let c = table.insert_child(b, 'c', Word("abc".into()));

        assert_eq!(table.extract_plan(c), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_extract_plan_of_root_is_empty() {
        let table = NodeTable::with_root(Word("seed".into()));
        assert!(table.extract_plan(table.root()).is_empty());
    }
}
