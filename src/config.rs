//! Search configuration.
//!
//! A [`Strategy`] names a frontier; [`SearchConfig`] pairs it with reporting
//! settings. Strategies parse from short names so they can come straight from a
//! command line:
//!
//! ```
//! use graphsearch::{SearchConfig, Strategy};
//!
//! let strategy: Strategy = "wastar:2.5".parse().unwrap();
//! assert_eq!(strategy, Strategy::WeightedAStar(2.5));
//!
//! let config = SearchConfig::default()
//!     .with_strategy(strategy)
//!     .with_report_every(None);
//! assert_eq!(config.report_every, None);
//! ```

use crate::frontier::{BestFirst, BreadthFirst, DepthFirst, Frontier, Heuristic};
use crate::{Result, SearchError, SearchState};
use std::fmt;
use std::str::FromStr;

/// Weight used by `wastar` when none is given.
pub const DEFAULT_WEIGHT: f32 = 5.0;

/// Expansions between two status reports.
pub const DEFAULT_REPORT_EVERY: u64 = 10_000;

/// Frontier ordering policy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Strategy {
    #[default]
    BreadthFirst,
    DepthFirst,
    Greedy,
    AStar,
    WeightedAStar(f32),
}

impl Strategy {
    /// Weighted A* with a validated weight.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidWeight`] unless `weight` is finite and at least 1.
    pub fn weighted(weight: f32) -> Result<Self> {
        if !weight.is_finite() || weight < 1.0 {
            return Err(SearchError::InvalidWeight(weight));
        }
        Ok(Strategy::WeightedAStar(weight))
    }

    /// Whether the strategy consults a heuristic.
    pub fn is_informed(&self) -> bool {
        !matches!(self, Strategy::BreadthFirst | Strategy::DepthFirst)
    }

    /// Builds the frontier for this strategy. Uninformed strategies drop
    /// `heuristic`.
    pub fn build_frontier<'a, S, G, H>(&self, heuristic: H) -> Box<dyn Frontier<S, G> + 'a>
    where
        S: SearchState + 'a,
        G: ?Sized + 'a,
        H: Heuristic<S, G> + 'a,
    {
        match *self {
            Strategy::BreadthFirst => Box::new(BreadthFirst::<S>::new()),
            Strategy::DepthFirst => Box::new(DepthFirst::<S>::new()),
            Strategy::Greedy => Box::new(BestFirst::<S, G, H>::greedy(heuristic)),
            Strategy::AStar => Box::new(BestFirst::<S, G, H>::astar(heuristic)),
            Strategy::WeightedAStar(w) => Box::new(BestFirst::<S, G, H>::weighted(heuristic, w)),
        }
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "bfs" => Ok(Strategy::BreadthFirst),
            "dfs" => Ok(Strategy::DepthFirst),
            "greedy" => Ok(Strategy::Greedy),
            "astar" => Ok(Strategy::AStar),
            "wastar" => Strategy::weighted(DEFAULT_WEIGHT),
            _ => match name.strip_prefix("wastar:") {
                Some(weight) => weight
                    .parse::<f32>()
                    .map_err(|_| SearchError::UnknownStrategy(s.to_string()))
                    .and_then(Strategy::weighted),
                None => Err(SearchError::UnknownStrategy(s.to_string())),
            },
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "bfs"),
            Strategy::DepthFirst => write!(f, "dfs"),
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::AStar => write!(f, "astar"),
            Strategy::WeightedAStar(w) => write!(f, "wastar:{}", w),
        }
    }
}

/// Settings for a [`GraphSearch`](crate::GraphSearch) runner.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Report status every this many expansions; `None` reports only at the end.
    pub report_every: Option<u64>,
}

impl SearchConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_report_every(mut self, report_every: Option<u64>) -> Self {
        self.report_every = report_every;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            report_every: Some(DEFAULT_REPORT_EVERY),
        }
    }
}
