use std::convert::Infallible;
use std::time::Instant;

use thiserror::Error;

use crate::controllers::plot_config::{ConfigurationError, PlotConfig};
use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal_cancelable;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer_cancelable,
};
use crate::core::colour_mapping::gradient::Gradient;
use crate::core::data::iteration_results::{IterationResults, IterationResultsError};
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    IterationResults(#[from] IterationResultsError),
    #[error("rendering failed: {0}")]
    Render(GeneratePixelBufferError<Infallible>),
    /// Stopped by a [`CancelToken`]. Nothing from the interrupted pass is kept.
    #[error("plot {0}")]
    Cancelled(Cancelled),
    #[error("nothing to render, call compute first")]
    NotComputed,
    #[error("nothing to save, call render first")]
    NotRendered,
    #[error(transparent)]
    Present(#[from] PresentError),
}

impl From<GenerateFractalError<Infallible>> for PlotError {
    fn from(err: GenerateFractalError<Infallible>) -> Self {
        match err {
            GenerateFractalError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            GenerateFractalError::Algorithm(never) => match never {},
        }
    }
}

impl From<GeneratePixelBufferError<Infallible>> for PlotError {
    fn from(err: GeneratePixelBufferError<Infallible>) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            other => Self::Render(other),
        }
    }
}

/// Runs one plot through compute, render and save.
pub struct PlotController<P: FilePresenterPort> {
    config: PlotConfig,
    presenter: P,
    results: Option<IterationResults>,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> PlotController<P> {
    pub fn new(config: PlotConfig, presenter: P) -> Result<Self, PlotError> {
        config.validate()?;

        Ok(Self {
            config,
            presenter,
            results: None,
            buffer: None,
        })
    }

    pub fn results(&self) -> Option<&IterationResults> {
        self.results.as_ref()
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Computes the raw escape value of every pixel.
    pub fn compute(&mut self) -> Result<&IterationResults, PlotError> {
        self.compute_cancelable(&NeverCancel)
    }

    /// Like [`compute`](Self::compute), stopping with [`PlotError::Cancelled`]
    /// once `cancel` fires. Earlier results and images are dropped either way.
    pub fn compute_cancelable<C: CancelToken>(
        &mut self,
        cancel: &C,
    ) -> Result<&IterationResults, PlotError> {
        let region = self.config.region()?;
        let algorithm = self.config.algorithm()?;
        self.results = None;
        self.buffer = None;

        log::info!("Computing...");
        log::debug!(
            "{} at {}x{}, {} iterations, parallel: {}",
            self.config.fractal,
            region.width(),
            region.height(),
            self.config.max_iterations,
            self.config.parallel
        );

        let start = Instant::now();
        let values = if self.config.parallel {
            generate_fractal_parallel_rayon_cancelable(&algorithm, cancel)
        } else {
            generate_fractal_cancelable(&algorithm, cancel)
        }
        .inspect_err(|_| log::warn!("Computing cancelled after {:?}", start.elapsed()))?;

        log::info!("Computed {} pixels in {:?}", values.len(), start.elapsed());

        let results = self
            .results
            .insert(IterationResults::new(&region, self.config.max_iterations, values)?);

        Ok(results)
    }

    /// Colours the computed values with `gradient`.
    pub fn render(&mut self, gradient: Gradient) -> Result<&PixelBuffer, PlotError> {
        self.render_cancelable(gradient, &NeverCancel)
    }

    pub fn render_cancelable<C: CancelToken>(
        &mut self,
        gradient: Gradient,
        cancel: &C,
    ) -> Result<&PixelBuffer, PlotError> {
        let results = self.results.as_ref().ok_or(PlotError::NotComputed)?;
        let colour_map = self.config.colour_map(gradient)?;
        self.buffer = None;

        log::info!("Rendering...");
        let start = Instant::now();
        let buffer = generate_pixel_buffer_cancelable(
            results.values(),
            &colour_map,
            results.width(),
            results.height(),
            cancel,
        )?;
        log::info!("Rendered {:?} image in {:?}", buffer.format(), start.elapsed());

        Ok(self.buffer.insert(buffer))
    }

    /// Writes the rendered image to the configured output path.
    pub fn save(&self) -> Result<(), PlotError> {
        let buffer = self.buffer.as_ref().ok_or(PlotError::NotRendered)?;
        let path = &self.config.output_path;

        log::info!("Saving to {}...", path.display());
        let start = Instant::now();
        self.presenter.present(buffer, path)?;
        log::info!("Saved in {:?}", start.elapsed());

        Ok(())
    }

    pub fn run(&mut self, gradient: Gradient) -> Result<(), PlotError> {
        self.run_cancelable(gradient, &NeverCancel)
    }

    /// Compute, render and save. A cancelled run writes nothing.
    pub fn run_cancelable<C: CancelToken>(
        &mut self,
        gradient: Gradient,
        cancel: &C,
    ) -> Result<(), PlotError> {
        self.compute_cancelable(cancel)?;
        self.render_cancelable(gradient, cancel)?;
        self.save()
    }
}
