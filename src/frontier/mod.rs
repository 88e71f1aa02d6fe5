//! # Frontier strategies
//!
//! The frontier holds discovered states that have not been expanded yet. The
//! driver only talks to it through [`Frontier`], so the expansion order is decided
//! entirely here:
//!
//! - [`BreadthFirst`]: FIFO
//! - [`DepthFirst`]: LIFO
//! - [`BestFirst`]: lowest evaluation first, with [`Evaluation`] choosing between
//!   greedy, A* and weighted A*
//!
//! Best-first frontiers rank states with a [`Heuristic`], prepared once per run
//! with the goal.

mod best_first;
mod bfs;
mod dfs;

pub use best_first::{BestFirst, Evaluation};
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;

use crate::node::{Node, NodeId};
use crate::SearchState;

/// Ordering policy over discovered-but-unexpanded states.
///
/// Membership is by state equality. The driver never adds a state that is
/// already contained, so implementations may assume entries are unique.
pub trait Frontier<S: SearchState, G: ?Sized> {
    /// Resets the frontier for a new run against `goal`.
    fn prepare(&mut self, goal: &G);

    /// Admits a node for later removal.
    fn add(&mut self, node: &Node<S>);

    /// Removes the next node in strategy order, or `None` when empty.
    fn pop(&mut self) -> Option<NodeId>;

    fn contains(&self, state: &S) -> bool;

    fn is_empty(&self) -> bool;

    fn size(&self) -> usize;

    /// Short label used in logs.
    fn name(&self) -> &str;
}

/// Estimates the remaining cost from a state to the goal.
pub trait Heuristic<S, G: ?Sized> {
    /// Called from the owning frontier's `prepare`, before any `estimate`.
    fn prepare(&mut self, _goal: &G) {}

    fn estimate(&self, state: &S) -> f32;
}

/// Heuristic that knows nothing; turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S, G: ?Sized> Heuristic<S, G> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> f32 {
        0.0
    }
}
