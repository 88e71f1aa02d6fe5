//! # Graph search driver
//!
//! [`graph_search`] explores a state space from an initial state until a goal
//! state is removed from the frontier or the frontier runs dry. The order of
//! exploration belongs to the [`Frontier`]; the driver adds three guarantees on
//! top of any ordering:
//!
//! - a state is admitted to the frontier at most once per run, so every state is
//!   expanded at most once and finite spaces always terminate;
//! - goals are tested when a state is removed, never when it is admitted;
//! - the returned plan replays from the initial state to the goal state found.
//!
//! Duplicates are detected by state equality alone. When two paths reach the same
//! state, the first one to be admitted is kept and the later one is dropped
//! whatever its cost.
//!
//! ## Basic Usage
//!
//! ```
//! use graphsearch::{graph_search, BreadthFirst, SearchState};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct Pos(i32);
//!
//! impl SearchState for Pos {
//!     type Action = i32;
//!
//!     fn applicable_actions(&self, steps: &[i32]) -> Vec<i32> {
//!         steps.iter().copied().filter(|s| (0..=10).contains(&(self.0 + s))).collect()
//!     }
//!
//!     fn result(&self, step: &i32) -> Self {
//!         Pos(self.0 + step)
//!     }
//! }
//!
//! let goal = |p: &Pos| p.0 == 7;
//! let mut frontier = BreadthFirst::new();
//! let outcome = graph_search(&Pos(0), &[3, -1], &goal, &mut frontier);
//!
//! assert!(outcome.found);
//! assert_eq!(outcome.plan, vec![3, 3, 3, -1, -1]);
//! ```

use crate::config::SearchConfig;
use crate::frontier::{Frontier, Heuristic};
use crate::node::NodeTable;
use crate::status::{LogReporter, NullReporter, SearchContext, StatusReporter};
use crate::{Goal, Result, SearchError, SearchState};
use log::{debug, info, trace};
use std::collections::HashSet;
use std::time::Duration;

/// Counters collected during one run. Observational only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    /// States removed from the frontier (goal-tested)
    pub expanded: u64,
    /// Successor states produced by expansions, duplicates included
    pub generated: u64,
    /// States admitted to the frontier, root included
    pub admitted: u64,
    /// Successors dropped because an equal state was already seen
    pub duplicates: u64,
    pub peak_frontier: usize,
    pub elapsed: Duration,
}

/// Result of a search run: whether a goal was found and the plan reaching it.
///
/// `plan` is empty whenever `found` is false.
#[derive(Debug, Clone)]
pub struct SearchOutcome<A> {
    pub found: bool,
    pub plan: Vec<A>,
    pub stats: SearchStats,
}

impl<A> SearchOutcome<A> {
    fn found(plan: Vec<A>, stats: SearchStats) -> Self {
        Self {
            found: true,
            plan,
            stats,
        }
    }

    fn exhausted(stats: SearchStats) -> Self {
        Self {
            found: false,
            plan: Vec::new(),
            stats,
        }
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    /// The plan, or [`SearchError::NoPlanFound`] when the search failed.
    pub fn into_result(self) -> Result<Vec<A>> {
        if self.found {
            Ok(self.plan)
        } else {
            Err(SearchError::NoPlanFound)
        }
    }
}

/// Runs graph search from `initial` using every action in `actions`.
///
/// The frontier is prepared with `goal` before use, so a frontier may be reused
/// across runs. Reporting is disabled; use [`GraphSearch`] for status reports.
pub fn graph_search<S, G, F>(
    initial: &S,
    actions: &[S::Action],
    goal: &G,
    frontier: &mut F,
) -> SearchOutcome<S::Action>
where
    S: SearchState,
    G: Goal<S> + ?Sized,
    F: Frontier<S, G> + ?Sized,
{
    let ctx = SearchContext::start(None);
    run(initial, actions, goal, frontier, &ctx, &mut NullReporter)
}

fn run<S, G, F>(
    initial: &S,
    actions: &[S::Action],
    goal: &G,
    frontier: &mut F,
    ctx: &SearchContext,
    reporter: &mut dyn StatusReporter,
) -> SearchOutcome<S::Action>
where
    S: SearchState,
    G: Goal<S> + ?Sized,
    F: Frontier<S, G> + ?Sized,
{
    // The root is a fresh copy: no parent, zero cost, whatever it was used for before.
    let mut nodes = NodeTable::with_root(initial.clone());
    let mut visited: HashSet<S> = HashSet::new();
    let mut stats = SearchStats::default();

    frontier.prepare(goal);
    frontier.add(nodes.get(nodes.root()));
    visited.insert(initial.clone());
    stats.admitted = 1;
    stats.peak_frontier = frontier.size();

    debug!(
        "Starting {} search over {} actions",
        frontier.name(),
        actions.len()
    );

    while !frontier.is_empty() {
        let Some(current) = frontier.pop() else {
            break;
        };
        stats.expanded += 1;

        if ctx.should_report(stats.expanded) {
            reporter.report(&ctx.status(stats.expanded, frontier.size()));
        }

        let node = nodes.get(current);
        trace!("Expanding {:?} at depth {}", node.state(), node.depth());

        if goal.is_goal(node.state()) {
            let plan = nodes.extract_plan(current);
            stats.elapsed = ctx.elapsed();
            info!(
                "Goal reached after {} expansions, plan length {}",
                stats.expanded,
                plan.len()
            );
            reporter.report(&ctx.status(stats.expanded, frontier.size()));
            return SearchOutcome::found(plan, stats);
        }

        let successors = node.state().successors(actions);
        for (action, next) in successors {
            stats.generated += 1;

            if frontier.contains(&next) || visited.contains(&next) {
                stats.duplicates += 1;
                continue;
            }

            visited.insert(next.clone());
            let child = nodes.insert_child(current, action, next);
            frontier.add(nodes.get(child));
            stats.admitted += 1;
            stats.peak_frontier = stats.peak_frontier.max(frontier.size());
        }
    }

    stats.elapsed = ctx.elapsed();
    info!(
        "Search finished without finding a solution after {} expansions",
        stats.expanded
    );
    reporter.report(&ctx.status(stats.expanded, frontier.size()));
    SearchOutcome::exhausted(stats)
}

/// Configured search runner.
///
/// Builds the frontier named by its [`SearchConfig`] for every run and sends
/// status reports to its reporter (the `log` facade by default).
///
/// ```
/// use graphsearch::{FactAction, FactGoal, FactState, GraphSearch, SearchConfig, Strategy,
///     UnsatisfiedFacts};
///
/// let mut fetch = FactAction::new("fetch_key", 1.0).unwrap();
/// fetch.effects.set("has_key", "true");
///
/// let mut open = FactAction::new("open_door", 1.0).unwrap();
/// open.preconditions.set("has_key", "true");
/// open.effects.set("door", "open");
///
/// let mut start = FactState::new();
/// start.set("door", "closed");
///
/// let mut goal = FactState::new();
/// goal.set("door", "open");
///
/// let mut search = GraphSearch::new(SearchConfig::new(Strategy::AStar));
/// let goal = FactGoal::new(goal);
/// let outcome = search.search(&start, &[fetch, open], &goal, UnsatisfiedFacts::new());
///
/// let names: Vec<_> = outcome.plan.iter().map(|a| a.name.as_str()).collect();
/// assert_eq!(names, ["fetch_key", "open_door"]);
/// ```
pub struct GraphSearch {
    config: SearchConfig,
    reporter: Box<dyn StatusReporter>,
}

impl GraphSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_reporter(config, Box::new(LogReporter))
    }

    pub fn with_reporter(config: SearchConfig, reporter: Box<dyn StatusReporter>) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches with the configured strategy. `heuristic` is only consulted by
    /// informed strategies; pass [`ZeroHeuristic`](crate::ZeroHeuristic) otherwise.
    pub fn search<S, G, H>(
        &mut self,
        initial: &S,
        actions: &[S::Action],
        goal: &G,
        heuristic: H,
    ) -> SearchOutcome<S::Action>
    where
        S: SearchState,
        G: Goal<S> + ?Sized,
        H: Heuristic<S, G>,
    {
        let mut frontier = self.config.strategy.build_frontier::<S, G, H>(heuristic);
        self.search_with(initial, actions, goal, frontier.as_mut())
    }

    /// Searches with a caller-supplied frontier.
    pub fn search_with<S, G, F>(
        &mut self,
        initial: &S,
        actions: &[S::Action],
        goal: &G,
        frontier: &mut F,
    ) -> SearchOutcome<S::Action>
    where
        S: SearchState,
        G: Goal<S> + ?Sized,
        F: Frontier<S, G> + ?Sized,
    {
        let ctx = SearchContext::start(self.config.report_every);
        run(initial, actions, goal, frontier, &ctx, self.reporter.as_mut())
    }
}

impl Default for GraphSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
