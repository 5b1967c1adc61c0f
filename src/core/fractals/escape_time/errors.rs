use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EscapeTimeError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterationsError,
    #[error("multiplicity must be a positive finite number: {multiplicity}")]
    InvalidMultiplicity { multiplicity: f64 },
    #[error("julia constant must be finite: ({real}, {imag})")]
    InvalidJuliaConstant { real: f64, imag: f64 },
}
