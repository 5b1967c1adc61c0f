//! Piecewise-linear colour gradients.

use crate::core::colour_mapping::errors::GradientError;
use crate::core::data::colour::Colour;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub colour: Colour,
}

impl GradientStop {
    #[must_use]
    pub const fn new(position: f64, colour: Colour) -> Self {
        Self { position, colour }
    }
}

/// Colour stops sorted by position, with stops at both 0 and 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Builds a gradient from stops in any order.
    ///
    /// Stops sharing a position keep their input order, so the later one
    /// wins from that position on. A missing endpoint is filled with a copy
    /// of the nearest stop.
    pub fn new(mut stops: Vec<GradientStop>) -> Result<Self, GradientError> {
        if stops.is_empty() {
            return Err(GradientError::Empty);
        }

        if let Some((index, stop)) = stops
            .iter()
            .enumerate()
            .find(|(_, stop)| !(0.0..=1.0).contains(&stop.position))
        {
            return Err(GradientError::InvalidPosition {
                index,
                position: stop.position,
            });
        }

        stops.sort_by(|a, b| a.position.total_cmp(&b.position));

        let first = stops[0];
        if first.position > 0.0 {
            stops.insert(0, GradientStop::new(0.0, first.colour));
        }

        let last = stops[stops.len() - 1];
        if last.position < 1.0 {
            stops.push(GradientStop::new(1.0, last.colour));
        }

        Ok(Self { stops })
    }

    #[must_use]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    #[must_use]
    pub fn first_colour(&self) -> Colour {
        self.stops[0].colour
    }

    #[must_use]
    pub fn last_colour(&self) -> Colour {
        self.stops[self.stops.len() - 1].colour
    }

    #[must_use]
    pub fn has_alpha(&self) -> bool {
        self.stops.iter().any(|stop| !stop.colour.is_opaque())
    }

    /// Samples the gradient at `t` after gamma correction (`t^gamma`).
    ///
    /// `t <= 0` and `t >= 1` return the end colours exactly for any gamma.
    #[must_use]
    pub fn sample(&self, t: f64, gamma: f64) -> Colour {
        // NaN lands on the first colour too
        if !(t > 0.0) {
            return self.first_colour();
        }

        if t >= 1.0 {
            return self.last_colour();
        }

        self.sample_linear(t.powf(gamma))
    }

    fn sample_linear(&self, t: f64) -> Colour {
        let upper = self.stops.partition_point(|stop| stop.position <= t);

        if upper == 0 {
            return self.first_colour();
        }

        if upper >= self.stops.len() {
            return self.last_colour();
        }

        let from = self.stops[upper - 1];
        let to = self.stops[upper];
        let fraction = (t - from.position) / (to.position - from.position);

        from.colour.lerp(to.colour, fraction)
    }
}
