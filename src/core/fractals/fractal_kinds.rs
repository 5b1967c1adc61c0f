use num_complex::Complex64;

/// Selects which of `c` and `z0` comes from the pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalKind {
    /// `c` is the pixel, the orbit starts at zero.
    #[default]
    Mandelbrot,
    /// `c` is fixed, the orbit starts at the pixel.
    Julia { c: Complex64 },
}

impl FractalKind {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }

    /// Returns `(z0, c)` for the orbit of the given mapped pixel.
    #[must_use]
    pub fn orbit_start(self, pixel: Complex64) -> (Complex64, Complex64) {
        match self {
            Self::Mandelbrot => (Complex64::new(0.0, 0.0), pixel),
            Self::Julia { c } => (pixel, c),
        }
    }
}

impl std::fmt::Display for FractalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mandelbrot => f.write_str(self.display_name()),
            Self::Julia { c } => write!(f, "{} (c = {}, {})", self.display_name(), c.re, c.im),
        }
    }
}
