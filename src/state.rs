//! # State-space contract
//!
//! The search driver never looks inside a state. Everything it needs from the
//! modelled world is expressed by two traits:
//!
//! - [`SearchState`]: value equality and hashing for deduplication, plus successor
//!   generation from a catalog of actions.
//! - [`Goal`]: the termination predicate.
//!
//! Parent links and path costs are *not* part of a state. They live in the driver's
//! per-run node table (see [`crate::node`]), so the same state value can be reused as
//! the root of any number of searches.
//!
//! ## Basic Usage
//!
//! ```
//! use graphsearch::{replay, Goal, SearchState};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct Counter(u32);
//!
//! #[derive(Debug, Clone)]
//! enum Step {
//!     Inc,
//!     Double,
//! }
//!
//! impl SearchState for Counter {
//!     type Action = Step;
//!
//!     fn applicable_actions(&self, actions: &[Step]) -> Vec<Step> {
//!         actions.to_vec()
//!     }
//!
//!     fn result(&self, action: &Step) -> Self {
//!         match action {
//!             Step::Inc => Counter(self.0 + 1),
//!             Step::Double => Counter(self.0 * 2),
//!         }
//!     }
//! }
//!
//! let goal = |c: &Counter| c.0 == 6;
//! let end = replay(&Counter(1), &[Step::Inc, Step::Inc, Step::Double]).unwrap();
//! assert!(goal.is_goal(&end));
//! ```

use crate::{Result, SearchError};
use std::fmt;
use std::hash::Hash;

/// A point in the search space.
///
/// Two independently derived states that describe the same configuration must
/// compare equal and hash identically; the driver relies on this to avoid
/// re-admitting a configuration it has already seen.
pub trait SearchState: Clone + Eq + Hash + fmt::Debug {
    /// The operation that maps one state to another.
    type Action: Clone + fmt::Debug;

    /// Returns the subset of `actions` applicable in this state, in the order the
    /// search should consider them.
    fn applicable_actions(&self, actions: &[Self::Action]) -> Vec<Self::Action>;

    /// Applies an applicable action, producing the successor state.
    fn result(&self, action: &Self::Action) -> Self;

    /// Cost of taking `action` from this state. Unit cost unless overridden.
    fn step_cost(&self, _action: &Self::Action) -> f32 {
        1.0
    }

    /// All `(action, successor)` pairs reachable in one step.
    fn successors(&self, actions: &[Self::Action]) -> Vec<(Self::Action, Self)> {
        self.applicable_actions(actions)
            .into_iter()
            .map(|action| {
                let next = self.result(&action);
                (action, next)
            })
            .collect()
    }
}

/// Termination predicate over states.
///
/// Any `Fn(&S) -> bool` closure is a goal.
pub trait Goal<S: ?Sized> {
    fn is_goal(&self, state: &S) -> bool;
}

impl<S: ?Sized, F> Goal<S> for F
where
    F: Fn(&S) -> bool,
{
    fn is_goal(&self, state: &S) -> bool {
        self(state)
    }
}

/// Replays `plan` from `initial`, returning the state it ends in.
///
/// # Errors
///
/// [`SearchError::ActionNotApplicable`] if some action is not applicable in the
/// state reached just before it.
pub fn replay<S: SearchState>(initial: &S, plan: &[S::Action]) -> Result<S> {
    let mut state = initial.clone();
    for (step, action) in plan.iter().enumerate() {
        if state
            .applicable_actions(std::slice::from_ref(action))
            .is_empty()
        {
            return Err(SearchError::ActionNotApplicable {
                step,
                action: format!("{:?}", action),
            });
        }
        state = state.result(action);
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Cell(i32);

    #[derive(Debug, Clone, PartialEq)]
    enum Move {
        Left,
        Right,
    }

    impl SearchState for Cell {
        type Action = Move;

        fn applicable_actions(&self, actions: &[Move]) -> Vec<Move> {
            actions
                .iter()
                .filter(|m| !(self.0 == 0 && **m == Move::Left))
                .cloned()
                .collect()
        }

        fn result(&self, action: &Move) -> Self {
            match action {
                Move::Left => Cell(self.0 - 1),
                Move::Right => Cell(self.0 + 1),
            }
        }
    }

    #[test]
    fn test_successors_follow_applicable_order() {
        let succ = Cell(1).successors(&[Move::Right, Move::Left]);
        assert_eq!(succ.len(), 2);
        assert_eq!(succ[0], (Move::Right, Cell(2)));
        assert_eq!(succ[1], (Move::Left, Cell(0)));
    }

    #[test]
    fn test_successors_skip_inapplicable() {
        let succ = Cell(0).successors(&[Move::Left, Move::Right]);
        assert_eq!(succ, vec![(Move::Right, Cell(1))]);
    }

    #[test]
    fn test_default_step_cost() {
        assert_eq!(Cell(3).step_cost(&Move::Left), 1.0);
    }

    #[test]
    fn test_closure_goal() {
        let goal = |c: &Cell| c.0 > 2;
        assert!(goal.is_goal(&Cell(3)));
        assert!(!goal.is_goal(&Cell(2)));
    }

    #[test]
    fn test_replay_reaches_end_state() {
        let end = replay(&Cell(0), &[Move::Right, Move::Right, Move::Left]).unwrap();
        assert_eq!(end, Cell(1));
    }

    #[test]
    fn test_replay_empty_plan_is_identity() {
        assert_eq!(replay(&Cell(5), &[]).unwrap(), Cell(5));
    }

    #[test]
    fn test_replay_rejects_inapplicable_action() {
        let result = replay(&Cell(0), &[Move::Right, Move::Left, Move::Left]);
        assert!(matches!(
            result,
            Err(SearchError::ActionNotApplicable { step: 2, .. })
        ));
    }
}
