//! # Fact-based state space
//!
//! A ready-made [`SearchState`] in which the world is a set of named facts and
//! actions are guarded by preconditions and rewrite facts through effects.
//!
//! - [`FactState`]: key/value facts; doubles as a partial description used for
//!   preconditions, effects and goals
//! - [`FactAction`]: named action with a positive cost
//! - [`FactGoal`]: satisfied when every goal fact holds
//! - [`UnsatisfiedFacts`]: heuristic counting goal facts that do not hold yet
//!
//! ## Basic Usage
//!
//! ```
//! use graphsearch::{graph_search, BreadthFirst, FactAction, FactGoal, FactState};
//!
//! let mut chop_tree = FactAction::new("chop_tree", 2.0).unwrap();
//! chop_tree.preconditions.set("has_axe", "true");
//! chop_tree.effects.set("has_wood", "true");
//!
//! let mut build_house = FactAction::new("build_house", 3.0).unwrap();
//! build_house.preconditions.set("has_wood", "true");
//! build_house.effects.set("has_house", "true");
//!
//! let mut current = FactState::new();
//! current.set("has_axe", "true");
//!
//! let mut wanted = FactState::new();
//! wanted.set("has_house", "true");
//!
//! let outcome = graph_search(
//!     &current,
//!     &[build_house, chop_tree],
//!     &FactGoal::new(wanted),
//!     &mut BreadthFirst::new(),
//! );
//! let names: Vec<_> = outcome.plan.iter().map(|a| a.name.as_str()).collect();
//! assert_eq!(names, ["chop_tree", "build_house"]);
//! ```

use crate::frontier::Heuristic;
use crate::{Goal, Result, SearchError, SearchState};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A collection of facts, each a key with a string value.
///
/// Facts are kept sorted so that equal sets of facts hash identically.
///
/// ```
/// use graphsearch::FactState;
///
/// let mut state = FactState::new();
/// state.set("door_locked", "true");
/// state.set("door_locked", "false");
///
/// assert_eq!(state.get("door_locked"), Some("false"));
/// assert_eq!(state.get("window_open"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FactState {
    facts: BTreeMap<String, String>,
}

impl FactState {
    pub fn new() -> Self {
        Self {
            facts: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.facts.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.facts.get(key).map(|s| s.as_str())
    }

    /// True if every fact in `other` holds here with the same value. Extra facts
    /// in `self` are ignored.
    pub fn satisfies(&self, other: &FactState) -> bool {
        self.unsatisfied(other) == 0
    }

    /// Number of facts in `other` that do not hold here.
    pub fn unsatisfied(&self, other: &FactState) -> usize {
        other
            .facts
            .iter()
            .filter(|(key, value)| self.facts.get(*key) != Some(*value))
            .count()
    }

    /// Overwrites or adds every fact in `effects`.
    pub fn apply_effects(&mut self, effects: &FactState) {
        for (key, value) in effects.facts.iter() {
            self.set(key.as_str(), value.as_str());
        }
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.facts
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl fmt::Display for FactState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let facts = self
            .facts
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>();
        write!(f, "{}", facts.join("\n"))
    }
}

/// An action over [`FactState`]s.
#[derive(Debug, Clone)]
pub struct FactAction {
    pub name: String,
    pub cost: f32,
    pub preconditions: FactState,
    pub effects: FactState,
}

impl FactAction {
    /// Creates an action with no preconditions and no effects.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidActionCost`] unless `cost` is positive and finite.
    pub fn new(name: impl Into<String>, cost: f32) -> Result<Self> {
        if !cost.is_finite() || cost <= 0.0 {
            return Err(SearchError::InvalidActionCost);
        }

        Ok(Self {
            name: name.into(),
            cost,
            preconditions: FactState::new(),
            effects: FactState::new(),
        })
    }

    pub fn can_perform(&self, state: &FactState) -> bool {
        state.satisfies(&self.preconditions)
    }

    pub fn apply_effects(&self, state: &mut FactState) {
        state.apply_effects(&self.effects);
    }
}

impl fmt::Display for FactAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl SearchState for FactState {
    type Action = FactAction;

    /// Applicable actions, cheapest first. Equal costs keep catalog order.
    fn applicable_actions(&self, actions: &[FactAction]) -> Vec<FactAction> {
        let mut applicable = actions
            .iter()
            .filter(|a| a.can_perform(self))
            .cloned()
            .collect::<Vec<_>>();

        applicable.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal));
        applicable
    }

    fn result(&self, action: &FactAction) -> Self {
        let mut next = self.clone();
        action.apply_effects(&mut next);
        next
    }

    fn step_cost(&self, action: &FactAction) -> f32 {
        action.cost
    }
}

/// Goal satisfied by any state in which all of its facts hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactGoal {
    facts: FactState,
}

impl FactGoal {
    pub fn new(facts: FactState) -> Self {
        Self { facts }
    }

    pub fn facts(&self) -> &FactState {
        &self.facts
    }
}

impl Goal<FactState> for FactGoal {
    fn is_goal(&self, state: &FactState) -> bool {
        state.satisfies(&self.facts)
    }
}

/// Counts goal facts not yet satisfied. Learns the goal from `prepare`.
#[derive(Debug, Clone, Default)]
pub struct UnsatisfiedFacts {
    goal: FactState,
}

impl UnsatisfiedFacts {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Heuristic<FactState, FactGoal> for UnsatisfiedFacts {
    fn prepare(&mut self, goal: &FactGoal) {
        self.goal = goal.facts().clone();
    }

    fn estimate(&self, state: &FactState) -> f32 {
        state.unsatisfied(&self.goal) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(pairs: &[(&str, &str)]) -> FactState {
        let mut state = FactState::new();
        for (k, v) in pairs {
            state.set(*k, *v);
        }
        state
    }

    fn make_action(
        name: &str,
        cost: f32,
        pre: &[(&str, &str)],
        eff: &[(&str, &str)],
    ) -> FactAction {
        let mut action = FactAction::new(name, cost).unwrap();
        action.preconditions = facts(pre);
        action.effects = facts(eff);
        action
    }

    #[test]
    fn test_set_and_get() {
        let mut state = FactState::new();
        state.set("foo", "true");
        assert_eq!(state.get("foo"), Some("true"));
        state.set("foo", "false");
        assert_eq!(state.get("foo"), Some("false"));
        assert_eq!(state.get("bar"), None);
    }

    #[test]
    fn test_satisfies() {
        let state = facts(&[("a", "true"), ("b", "false")]);

        let mut required = FactState::new();
        assert!(state.satisfies(&required));
        required.set("a", "true");
        assert!(state.satisfies(&required));
        required.set("b", "true");
        assert!(!state.satisfies(&required));
        required.set("c", "true");
        assert_eq!(state.unsatisfied(&required), 2);
    }

    #[test]
    fn test_apply_effects() {
        let mut state = facts(&[("x", "false"), ("y", "false")]);
        state.apply_effects(&facts(&[("x", "true"), ("z", "true")]));

        assert_eq!(state, facts(&[("x", "true"), ("y", "false"), ("z", "true")]));
    }

    #[test]
    fn test_equal_facts_are_equal_states() {
        let mut a = FactState::new();
        a.set("k1", "v1");
        a.set("k2", "v2");
        let mut b = FactState::new();
        b.set("k2", "v2");
        b.set("k1", "v1");

        let mut seen = std::collections::HashSet::new();
        seen.insert(a);
        assert!(seen.contains(&b));
    }

    #[test]
    fn test_display() {
        let state = facts(&[("b", "2"), ("a", "1")]);
        assert_eq!(state.to_string(), "a: 1\nb: 2");
    }

    #[test]
    fn test_invalid_action_cost() {
        assert!(matches!(
            FactAction::new("free", 0.0),
            Err(SearchError::InvalidActionCost)
        ));
        assert!(matches!(
            FactAction::new("negative", -1.0),
            Err(SearchError::InvalidActionCost)
        ));
        assert!(matches!(
            FactAction::new("infinite", f32::INFINITY),
            Err(SearchError::InvalidActionCost)
        ));
    }

    #[test]
    fn test_applicable_actions_cheapest_first() {
        let actions = vec![
            make_action("dear", 5.0, &[("start", "true")], &[("goal", "true")]),
            make_action("blocked", 1.0, &[("other", "true")], &[]),
            make_action("cheap", 1.0, &[("start", "true")], &[("goal", "true")]),
        ];
        let state = facts(&[("start", "true")]);

        let names: Vec<_> = state
            .applicable_actions(&actions)
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, ["cheap", "dear"]);
    }

    #[test]
    fn test_result_and_step_cost() {
        let action = make_action("move", 2.5, &[], &[("at", "b")]);
        let state = facts(&[("at", "a")]);

        assert_eq!(state.result(&action), facts(&[("at", "b")]));
        assert_eq!(state.step_cost(&action), 2.5);
        // source state untouched
        assert_eq!(state.get("at"), Some("a"));
    }

    #[test]
    fn test_goal_and_heuristic() {
        let goal = FactGoal::new(facts(&[("a", "1"), ("b", "2")]));
        let mut heuristic = UnsatisfiedFacts::new();
        heuristic.prepare(&goal);

        let partial = facts(&[("a", "1"), ("b", "0")]);
        assert!(!goal.is_goal(&partial));
        assert_eq!(heuristic.estimate(&partial), 1.0);

        let done = facts(&[("a", "1"), ("b", "2"), ("c", "3")]);
        assert!(goal.is_goal(&done));
        assert_eq!(heuristic.estimate(&done), 0.0);
    }
}
