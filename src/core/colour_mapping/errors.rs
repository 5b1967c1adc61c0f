use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GradientError {
    #[error("gradient must contain at least one colour stop")]
    Empty,
    #[error("gradient stop {index} has position {position} outside [0, 1]")]
    InvalidPosition { index: usize, position: f64 },
    #[error("gamma must be a positive finite number: {gamma}")]
    InvalidGamma { gamma: f64 },
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterationsError,
}
