use std::path::PathBuf;

use num_complex::Complex64;
use thiserror::Error;

use crate::core::colour_mapping::errors::GradientError;
use crate::core::colour_mapping::gradient::Gradient;
use crate::core::colour_mapping::gradient_colour_map::GradientColourMap;
use crate::core::colour_mapping::gradients::GradientKind;
use crate::core::data::plot_region::{PlotRegion, PlotRegionError};
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::params::{DEFAULT_MULTIPLICITY, EscapeTimeParams};
use crate::core::fractals::fractal_kinds::FractalKind;

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 1000;
pub const DEFAULT_PLOT_WIDTH: f64 = 4.0;
pub const DEFAULT_GAMMA: f64 = 0.3;
pub const DEFAULT_MAX_ITERATIONS: u32 = 350;
pub const DEFAULT_OUTPUT_PATH: &str = "out.png";

/// A configuration invariant that does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("invalid plot region: {0}")]
    Region(#[from] PlotRegionError),
    #[error("invalid iteration settings: {0}")]
    EscapeTime(#[from] EscapeTimeError),
    #[error("invalid colouring: {0}")]
    Colouring(#[from] GradientError),
}

/// Fully resolved settings for one plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub plot_width: f64,
    pub center: Complex64,
    pub multiplicity: f64,
    pub max_iterations: u32,
    /// Smoothed escape counts instead of whole iteration bands.
    pub anti_aliasing: bool,
    pub fractal: FractalKind,
    pub gamma: f64,
    /// Gradient image to colour with. `gradient_kind` is used when unset.
    pub gradient_path: Option<PathBuf>,
    pub gradient_kind: GradientKind,
    pub output_path: PathBuf,
    pub parallel: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            plot_width: DEFAULT_PLOT_WIDTH,
            center: Complex64::new(0.0, 0.0),
            multiplicity: DEFAULT_MULTIPLICITY,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            anti_aliasing: true,
            fractal: FractalKind::default(),
            gamma: DEFAULT_GAMMA,
            gradient_path: None,
            gradient_kind: GradientKind::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            parallel: true,
        }
    }
}

impl PlotConfig {
    /// Checks every invariant without touching the file system.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.region()?;
        self.escape_time_params()?;
        self.colour_map(self.gradient_kind.gradient())?;

        Ok(())
    }

    pub fn region(&self) -> Result<PlotRegion, ConfigurationError> {
        Ok(PlotRegion::new(
            self.width,
            self.height,
            self.plot_width,
            self.center,
        )?)
    }

    pub fn escape_time_params(&self) -> Result<EscapeTimeParams, ConfigurationError> {
        Ok(EscapeTimeParams::new(
            self.fractal,
            self.multiplicity,
            self.max_iterations,
            self.anti_aliasing,
        )?)
    }

    pub fn algorithm(&self) -> Result<EscapeTimeAlgorithm, ConfigurationError> {
        Ok(EscapeTimeAlgorithm::new(
            self.region()?,
            self.escape_time_params()?,
        ))
    }

    pub fn colour_map(&self, gradient: Gradient) -> Result<GradientColourMap, ConfigurationError> {
        Ok(GradientColourMap::new(
            gradient,
            self.gamma,
            self.max_iterations,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlotConfig::default();

        assert_eq!((config.width, config.height), (1000, 1000));
        assert_eq!(config.plot_width, 4.0);
        assert_eq!(config.center, Complex64::new(0.0, 0.0));
        assert_eq!(config.multiplicity, 2.0);
        assert_eq!(config.gamma, 0.3);
        assert_eq!(config.max_iterations, 350);
        assert!(config.anti_aliasing);
        assert_eq!(config.fractal, FractalKind::Mandelbrot);
        assert_eq!(config.gradient_path, None);
        assert_eq!(config.output_path, PathBuf::from("out.png"));
        assert!(config.parallel);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_region_follows_config() {
        let config = PlotConfig {
            width: 200,
            height: 100,
            plot_width: 2.0,
            center: Complex64::new(-0.5, 0.25),
            ..PlotConfig::default()
        };

        let region = config.region().unwrap();

        assert_eq!(region.xmin(), -1.5);
        assert_eq!(region.ymin(), -0.25);
        assert_eq!(region.d_it(), 0.01);
    }

    #[test]
    fn test_zero_resolution_is_rejected() {
        let config = PlotConfig {
            height: 0,
            ..PlotConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigurationError::Region(
                PlotRegionError::InvalidResolution {
                    width: 1000,
                    height: 0
                }
            ))
        );
    }

    #[test]
    fn test_non_positive_plot_width_is_rejected() {
        let config = PlotConfig {
            plot_width: -1.0,
            ..PlotConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::Region(
                PlotRegionError::InvalidPlotWidth { .. }
            ))
        ));
    }

    #[test]
    fn test_zero_iterations_is_rejected() {
        let config = PlotConfig {
            max_iterations: 0,
            ..PlotConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigurationError::EscapeTime(
                EscapeTimeError::ZeroMaxIterationsError
            ))
        );
    }

    #[test]
    fn test_bad_multiplicity_is_rejected() {
        let config = PlotConfig {
            multiplicity: 0.0,
            ..PlotConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::EscapeTime(
                EscapeTimeError::InvalidMultiplicity { .. }
            ))
        ));
    }

    #[test]
    fn test_bad_gamma_is_rejected() {
        let config = PlotConfig {
            gamma: f64::NAN,
            ..PlotConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::Colouring(GradientError::InvalidGamma { .. }))
        ));
    }

    #[test]
    fn test_error_message_names_the_invariant() {
        let config = PlotConfig {
            width: 0,
            ..PlotConfig::default()
        };

        let message = config.validate().unwrap_err().to_string();

        assert_eq!(
            message,
            "invalid plot region: resolution must be positive: 0x1000"
        );
    }

    #[test]
    fn test_algorithm_uses_fractal_kind() {
        let config = PlotConfig {
            fractal: FractalKind::Julia {
                c: Complex64::new(-0.4, 0.6),
            },
            anti_aliasing: false,
            ..PlotConfig::default()
        };

        let algorithm = config.algorithm().unwrap();

        assert_eq!(algorithm.params().kind(), config.fractal);
        assert!(!algorithm.params().smoothing());
    }
}
