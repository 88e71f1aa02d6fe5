use thiserror::Error;

/// Errors raised around the search driver.
///
/// The driver itself never fails: an unreachable goal is reported through
/// [`SearchOutcome`](crate::SearchOutcome). These variants cover configuration,
/// plan replay and output.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("No valid plan found to achieve the goal")]
    NoPlanFound,
    #[error("Unknown search strategy: {0}")]
    UnknownStrategy(String),
    #[error("Weight must be finite and at least 1, got {0}")]
    InvalidWeight(f32),
    #[error("Action cost must be positive")]
    InvalidActionCost,
    #[error("Action {action} is not applicable at plan step {step}")]
    ActionNotApplicable { step: usize, action: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
