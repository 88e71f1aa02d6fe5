mod config;
mod error;
mod facts;
pub mod frontier;
pub mod node;
mod search;
mod state;
pub mod status;
mod visualizer;

pub use config::{SearchConfig, Strategy, DEFAULT_REPORT_EVERY, DEFAULT_WEIGHT};
pub use error::{Result, SearchError};
pub use facts::{FactAction, FactGoal, FactState, UnsatisfiedFacts};
pub use frontier::{
    BestFirst, BreadthFirst, DepthFirst, Evaluation, Frontier, Heuristic, ZeroHeuristic,
};
pub use node::{Node, NodeId, NodeTable};
pub use search::{graph_search, GraphSearch, SearchOutcome, SearchStats};
pub use state::{replay, Goal, SearchState};
pub use status::{LogReporter, NullReporter, SearchContext, SearchStatus, StatusReporter};
pub use visualizer::PlanVisualizer;
