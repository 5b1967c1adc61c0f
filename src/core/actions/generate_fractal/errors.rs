use thiserror::Error;

use crate::core::actions::cancellation::Cancelled;

/// Failure of a cancel-aware fractal generation.
///
/// Cancellation is expected control flow and should not be reported to the
/// user as an error.
#[derive(Debug, PartialEq, Error)]
pub enum GenerateFractalError<E> {
    #[error("{0}")]
    Cancelled(Cancelled),
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
}
