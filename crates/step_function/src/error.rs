use std::{fmt::Debug, sync::Arc};

use crate::Step;

/// Failures of step-function construction.
///
/// Everything is raised synchronously at the offending call; nothing is
/// recoverable internally or retried.
#[non_exhaustive]
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error<IN: Debug, OUT: Debug> {
    /// A breakpoint with the same limit already exists with a different
    /// value. Carries the existing breakpoint (shared, not copied) and the
    /// value that was rejected.
    #[error("a step with limit {:?} already exists with a different value {:?} (rejected {rejected:?})", .existing.limit(), .existing.value())]
    DuplicateLimit {
        existing: Arc<Step<IN, OUT>>,
        rejected: OUT,
    },

    /// Bulk insertion was given collections of different lengths.
    #[error("bulk insertion needs as many limits as values (got {limits} limits and {values} values)")]
    LengthMismatch { limits: usize, values: usize },
}
