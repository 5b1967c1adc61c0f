use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::fractal_kinds::FractalKind;

pub const DEFAULT_MULTIPLICITY: f64 = 2.0;

/// Everything the iterator needs besides the plot region.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeParams {
    kind: FractalKind,
    multiplicity: f64,
    max_iterations: u32,
    smoothing: bool,
}

impl EscapeTimeParams {
    pub fn new(
        kind: FractalKind,
        multiplicity: f64,
        max_iterations: u32,
        smoothing: bool,
    ) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterationsError);
        }

        if !multiplicity.is_finite() || multiplicity <= 0.0 {
            return Err(EscapeTimeError::InvalidMultiplicity { multiplicity });
        }

        if let FractalKind::Julia { c } = kind {
            if !c.re.is_finite() || !c.im.is_finite() {
                return Err(EscapeTimeError::InvalidJuliaConstant {
                    real: c.re,
                    imag: c.im,
                });
            }
        }

        Ok(Self {
            kind,
            multiplicity,
            max_iterations,
            smoothing,
        })
    }

    /// Classic quadratic recurrence without smoothing.
    pub fn discrete(kind: FractalKind, max_iterations: u32) -> Result<Self, EscapeTimeError> {
        Self::new(kind, DEFAULT_MULTIPLICITY, max_iterations, false)
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn multiplicity(&self) -> f64 {
        self.multiplicity
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn smoothing(&self) -> bool {
        self.smoothing
    }
}
