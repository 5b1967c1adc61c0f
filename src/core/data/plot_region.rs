use num_complex::Complex64;
use thiserror::Error;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PlotRegionError {
    #[error("resolution must be positive: {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },
    #[error("plot width must be a positive finite number: {plot_width}")]
    InvalidPlotWidth { plot_width: f64 },
    #[error("plot center must be finite: ({real}, {imag})")]
    InvalidCenter { real: f64, imag: f64 },
}

/// The part of the complex plane covered by the output image.
///
/// The plot width spans the image horizontally, the vertical extent follows
/// from the aspect ratio so that pixels stay square.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlotRegion {
    width: u32,
    height: u32,
    plot_width: f64,
    center: Complex64,
    xmin: f64,
    ymin: f64,
    d_it: f64,
}

impl PlotRegion {
    pub fn new(
        width: u32,
        height: u32,
        plot_width: f64,
        center: Complex64,
    ) -> Result<Self, PlotRegionError> {
        if width == 0 || height == 0 {
            return Err(PlotRegionError::InvalidResolution { width, height });
        }

        if !plot_width.is_finite() || plot_width <= 0.0 {
            return Err(PlotRegionError::InvalidPlotWidth { plot_width });
        }

        if !center.re.is_finite() || !center.im.is_finite() {
            return Err(PlotRegionError::InvalidCenter {
                real: center.re,
                imag: center.im,
            });
        }

        let plot_height = plot_width * f64::from(height) / f64::from(width);

        Ok(Self {
            width,
            height,
            plot_width,
            center,
            xmin: center.re - plot_width / 2.0,
            ymin: center.im - plot_height / 2.0,
            d_it: plot_width / f64::from(width),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.plot_width
    }

    #[must_use]
    pub fn center(&self) -> Complex64 {
        self.center
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Distance in the complex plane between two neighbouring pixels.
    #[must_use]
    pub fn d_it(&self) -> f64 {
        self.d_it
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
