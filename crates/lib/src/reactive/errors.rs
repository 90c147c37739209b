//! Error types for the reactive teardown contract.

use thiserror::Error;

use super::TeardownStep;

/// Errors reported by [`ReactiveLayer`](super::ReactiveLayer) implementations.
///
/// The store never builds these itself. Layers return them from a teardown
/// step and [`Store::destroy`](crate::Store::destroy) hands them back to its
/// caller untouched.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ReactiveError {
    /// A teardown step could not complete
    #[error("Teardown step '{step}' failed at '{path}': {reason}")]
    StepFailed {
        step: TeardownStep,
        path: String,
        reason: String,
    },
}

impl ReactiveError {
    /// The step that failed
    pub fn step(&self) -> TeardownStep {
        match self {
            ReactiveError::StepFailed { step, .. } => *step,
        }
    }
}

// Conversion from ReactiveError to the main Error type
impl From<ReactiveError> for crate::Error {
    fn from(err: ReactiveError) -> Self {
        crate::Error::Reactive(err)
    }
}
