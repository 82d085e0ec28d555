//! Domain Errors
//!
//! Reasons a transition was refused. The UI treats every variant as a
//! silent no-op and only logs it.

use thiserror::Error;

use crate::stages::Stage;
use crate::wizard::Step;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Trait selection must stay at {required} (currently {selected})")]
    SelectionLimit { selected: usize, required: usize },

    #[error("Trait {0} is not selected")]
    TraitNotSelected(u32),

    #[error("Stage {0:?} is not active")]
    InactiveStage(Stage),

    #[error("At least one stage must stay active")]
    LastActiveStage,

    #[error("No other active stage can absorb the weight change of {0:?}")]
    NoCounterweight(Stage),

    #[error("Feedback already recorded for candidate {0}")]
    FeedbackAlreadySet(u32),

    #[error("Step {0:?} is incomplete")]
    StepIncomplete(Step),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}
