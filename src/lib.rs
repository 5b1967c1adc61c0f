mod adapters;
mod controllers;
mod core;
mod presenters;
mod storage;

pub use crate::controllers::plot::{PlotController, PlotError};
pub use crate::controllers::plot_config::{
    ConfigurationError, DEFAULT_GAMMA, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS,
    DEFAULT_OUTPUT_PATH, DEFAULT_PLOT_WIDTH, DEFAULT_WIDTH, PlotConfig,
};
pub use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_fractal::errors::GenerateFractalError;
pub use crate::core::actions::generate_fractal::generate_fractal::{
    generate_fractal, generate_fractal_cancelable,
};
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    generate_fractal_parallel_rayon, generate_fractal_parallel_rayon_cancelable,
};
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer, generate_pixel_buffer_cancelable,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::colour_mapping::errors::GradientError;
pub use crate::core::colour_mapping::gradient::{Gradient, GradientStop};
pub use crate::core::colour_mapping::gradient_colour_map::GradientColourMap;
pub use crate::core::colour_mapping::gradients::{GradientKind, black_to_white, flame};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::iteration_results::{IterationResults, IterationResultsError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError, PixelFormat};
pub use crate::core::data::plot_region::{PlotRegion, PlotRegionError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::escape_time::algorithm::{
    ESCAPE_RADIUS, EscapeTimeAlgorithm, smooth_iteration_count,
};
pub use crate::core::fractals::escape_time::errors::EscapeTimeError;
pub use crate::core::fractals::escape_time::params::{DEFAULT_MULTIPLICITY, EscapeTimeParams};
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
pub use crate::presenters::file::image_file::ImageFilePresenter;
pub use crate::storage::load_gradient::{GradientLoadError, load_gradient};
