use super::{Frontier, Heuristic};
use crate::node::{Node, NodeId};
use crate::SearchState;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::marker::PhantomData;

/// How a best-first frontier combines path cost `g` and heuristic `h`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// `f = h`
    Greedy,
    /// `f = g + h`
    AStar,
    /// `f = g + w * h`
    Weighted(f32),
}

impl Evaluation {
    pub fn f(&self, g: f32, h: f32) -> f32 {
        match self {
            Evaluation::Greedy => h,
            Evaluation::AStar => g + h,
            Evaluation::Weighted(w) => g + w * h,
        }
    }
}

/// Heap key: lowest evaluation first, then earliest insertion.
#[derive(Debug, Clone, Copy)]
struct Priority {
    f: f32,
    seq: u64,
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

#[derive(Debug)]
struct Entry<S> {
    key: Reverse<Priority>,
    id: NodeId,
    state: S,
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for Entry<S> {}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority-queue frontier ordered by a heuristic evaluation.
///
/// The heuristic is prepared with the goal whenever the frontier is. Equal
/// evaluations pop in insertion order, which keeps runs deterministic.
pub struct BestFirst<S, G: ?Sized, H> {
    heuristic: H,
    evaluation: Evaluation,
    heap: BinaryHeap<Entry<S>>,
    members: HashSet<S>,
    next_seq: u64,
    _goal: PhantomData<fn(&G)>,
}

impl<S, G, H> BestFirst<S, G, H>
where
    S: SearchState,
    G: ?Sized,
    H: Heuristic<S, G>,
{
    pub fn new(heuristic: H, evaluation: Evaluation) -> Self {
        Self {
            heuristic,
            evaluation,
            heap: BinaryHeap::new(),
            members: HashSet::new(),
            next_seq: 0,
            _goal: PhantomData,
        }
    }

    pub fn greedy(heuristic: H) -> Self {
        Self::new(heuristic, Evaluation::Greedy)
    }

    pub fn astar(heuristic: H) -> Self {
        Self::new(heuristic, Evaluation::AStar)
    }

    pub fn weighted(heuristic: H, weight: f32) -> Self {
        Self::new(heuristic, Evaluation::Weighted(weight))
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }
}

impl<S, G, H> Frontier<S, G> for BestFirst<S, G, H>
where
    S: SearchState,
    G: ?Sized,
    H: Heuristic<S, G>,
{
    fn prepare(&mut self, goal: &G) {
        self.heap.clear();
        self.members.clear();
        self.next_seq = 0;
        self.heuristic.prepare(goal);
    }

    fn add(&mut self, node: &Node<S>) {
        let h = self.heuristic.estimate(node.state());
        let f = self.evaluation.f(node.path_cost(), h);
        let seq = self.next_seq;
        self.next_seq += 1;

        self.heap.push(Entry {
            key: Reverse(Priority { f, seq }),
            id: node.id(),
            state: node.state().clone(),
        });
        self.members.insert(node.state().clone());
    }

    fn pop(&mut self) -> Option<NodeId> {
        let entry = self.heap.pop()?;
        self.members.remove(&entry.state);
        Some(entry.id)
    }

    fn contains(&self, state: &S) -> bool {
        self.members.contains(state)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn size(&self) -> usize {
        self.heap.len()
    }

    fn name(&self) -> &str {
        match self.evaluation {
            Evaluation::Greedy => "greedy",
            Evaluation::AStar => "astar",
            Evaluation::Weighted(_) => "weighted-astar",
        }
    }
}
