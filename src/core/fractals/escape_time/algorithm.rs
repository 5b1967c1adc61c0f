use std::convert::Infallible;

use num_complex::Complex64;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::plot_region::PlotRegion;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::params::EscapeTimeParams;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

pub const ESCAPE_RADIUS: f64 = 2.0;
const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Escape-time iteration of `z <- z^n + c` over a plot region.
///
/// Each pixel yields the number of steps taken before `|z|` left the escape
/// radius, or `max_iterations` when it never did. With smoothing enabled the
/// count of escaping pixels is renormalized with the log horizon so that
/// neighbouring counts blend into each other.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    region: PlotRegion,
    params: EscapeTimeParams,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = f64;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let mapped = pixel_to_complex_coords(pixel, &self.region);
        let (z0, c) = self.params.kind().orbit_start(mapped);

        Ok(self.escape_time(z0, c))
    }

    fn region(&self) -> &PlotRegion {
        &self.region
    }
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(region: PlotRegion, params: EscapeTimeParams) -> Self {
        Self { region, params }
    }

    #[must_use]
    pub fn params(&self) -> &EscapeTimeParams {
        &self.params
    }

    /// Iterates the orbit starting at `z0` and returns its raw escape value.
    #[must_use]
    pub fn escape_time(&self, z0: Complex64, c: Complex64) -> f64 {
        let max_iterations = self.params.max_iterations();
        let multiplicity = self.params.multiplicity();
        let mut z = z0;

        for iteration in 0..max_iterations {
            if z.norm_sqr() > ESCAPE_RADIUS_SQUARED {
                return if self.params.smoothing() {
                    smooth_iteration_count(iteration, z.norm(), multiplicity)
                } else {
                    f64::from(iteration)
                };
            }
            z = step(z, c, multiplicity);
        }

        f64::from(max_iterations)
    }
}

#[inline]
fn step(z: Complex64, c: Complex64, multiplicity: f64) -> Complex64 {
    if multiplicity == 2.0 {
        z * z + c
    } else {
        z.powf(multiplicity) + c
    }
}

/// Log-horizon renormalization `count + 1 - ln(ln|z|) / ln(n)`.
///
/// Falls back to the plain count when either logarithm would be undefined
/// or zero. The result is never negative. It is not capped, so a pixel that
/// escapes late may exceed `max_iterations` but never reads as interior.
#[must_use]
pub fn smooth_iteration_count(count: u32, modulus: f64, multiplicity: f64) -> f64 {
    let count = f64::from(count);
    let ln_multiplicity = multiplicity.ln();

    if modulus <= 1.0 || !modulus.is_finite() || ln_multiplicity <= 0.0 {
        return count;
    }

    let smoothed = count + 1.0 - modulus.ln().ln() / ln_multiplicity;

    smoothed.max(0.0)
}
