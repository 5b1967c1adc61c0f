use std::convert::Infallible;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::GradientError;
use crate::core::colour_mapping::gradient::Gradient;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelFormat;

/// Colours raw escape values through a gamma-corrected gradient.
///
/// Values are normalized by `max_iterations` and clamped to `[0, 1]`.
/// Interior pixels (value `max_iterations`) always land on the last stop of
/// the gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientColourMap {
    gradient: Gradient,
    gamma: f64,
    max_iterations: u32,
}

impl GradientColourMap {
    pub fn new(gradient: Gradient, gamma: f64, max_iterations: u32) -> Result<Self, GradientError> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(GradientError::InvalidGamma { gamma });
        }

        if max_iterations == 0 {
            return Err(GradientError::ZeroMaxIterationsError);
        }

        Ok(Self {
            gradient,
            gamma,
            max_iterations,
        })
    }

    #[must_use]
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        let max_iterations = f64::from(self.max_iterations);

        if value >= max_iterations {
            return 1.0;
        }

        (value / max_iterations).clamp(0.0, 1.0)
    }
}

impl ColourMap<f64> for GradientColourMap {
    type Failure = Infallible;

    fn map(&self, value: f64) -> Result<Colour, Self::Failure> {
        Ok(self.gradient.sample(self.normalize(value), self.gamma))
    }

    fn pixel_format(&self) -> PixelFormat {
        if self.gradient.has_alpha() {
            PixelFormat::Rgba8
        } else {
            PixelFormat::Rgb8
        }
    }

    fn display_name(&self) -> &str {
        "Gradient"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::gradient::GradientStop;
    use crate::core::colour_mapping::gradients::black_to_white;

    #[test]
    fn test_gamma_must_be_positive_and_finite() {
        for gamma in [0.0, -1.0, f64::INFINITY] {
            assert_eq!(
                GradientColourMap::new(black_to_white(), gamma, 10),
                Err(GradientError::InvalidGamma { gamma })
            );
        }
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        assert_eq!(
            GradientColourMap::new(black_to_white(), 1.0, 0),
            Err(GradientError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_interior_maps_to_last_stop() {
        let mapper = GradientColourMap::new(black_to_white(), 0.3, 10).unwrap();

        assert_eq!(mapper.map(10.0), Ok(Colour::rgb(255, 255, 255)));
    }

    #[test]
    fn test_zero_maps_to_first_stop() {
        let mapper = GradientColourMap::new(black_to_white(), 0.3, 10).unwrap();

        assert_eq!(mapper.map(0.0), Ok(Colour::rgb(0, 0, 0)));
    }

    #[test]
    fn test_normalize_clamps() {
        let mapper = GradientColourMap::new(black_to_white(), 1.0, 10).unwrap();

        assert_eq!(mapper.normalize(-4.0), 0.0);
        assert_eq!(mapper.normalize(5.0), 0.5);
        assert_eq!(mapper.normalize(25.0), 1.0);
    }

    #[test]
    fn test_map_with_linear_gamma() {
        let mapper = GradientColourMap::new(black_to_white(), 1.0, 10).unwrap();

        assert_eq!(mapper.map(1.0), Ok(Colour::rgb(26, 26, 26)));
        assert_eq!(mapper.map(5.0), Ok(Colour::rgb(128, 128, 128)));
    }

    #[test]
    fn test_fractional_values_blend_between_bands() {
        let mapper = GradientColourMap::new(black_to_white(), 1.0, 100).unwrap();

        let low = mapper.map(40.0).unwrap();
        let between = mapper.map(40.5).unwrap();
        let high = mapper.map(41.0).unwrap();

        assert!(low.r < between.r || between.r < high.r);
        assert!(low.r <= between.r && between.r <= high.r);
    }

    #[test]
    fn test_pixel_format_follows_gradient_alpha() {
        let opaque = GradientColourMap::new(black_to_white(), 1.0, 10).unwrap();
        let translucent = GradientColourMap::new(
            Gradient::new(vec![
                GradientStop::new(0.0, Colour::rgba(0, 0, 0, 0)),
                GradientStop::new(1.0, Colour::rgb(255, 255, 255)),
            ])
            .unwrap(),
            1.0,
            10,
        )
        .unwrap();

        assert_eq!(opaque.pixel_format(), PixelFormat::Rgb8);
        assert_eq!(translucent.pixel_format(), PixelFormat::Rgba8);
    }
}
