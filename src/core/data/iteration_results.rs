use thiserror::Error;

use crate::core::data::plot_region::PlotRegion;
use crate::core::data::point::Point;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IterationResultsError {
    #[error("region holds {region_size} pixels but {values} iteration values were supplied")]
    SizeMismatch { region_size: usize, values: usize },
}

/// Raw escape-time output, one value per pixel in row-major order.
///
/// Values are whole numbers when smoothing is off and fractional otherwise.
/// Interior pixels hold exactly `max_iterations`.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationResults {
    width: u32,
    height: u32,
    max_iterations: u32,
    values: Vec<f64>,
}

impl IterationResults {
    pub fn new(
        region: &PlotRegion,
        max_iterations: u32,
        values: Vec<f64>,
    ) -> Result<Self, IterationResultsError> {
        if values.len() != region.size() {
            return Err(IterationResultsError::SizeMismatch {
                region_size: region.size(),
                values: values.len(),
            });
        }

        Ok(Self {
            width: region.width(),
            height: region.height(),
            max_iterations,
            values,
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
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, pixel: Point) -> Option<f64> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return None;
        }

        self.values
            .get(pixel.y as usize * self.width as usize + pixel.x as usize)
            .copied()
    }

    #[must_use]
    pub fn is_interior(&self, pixel: Point) -> bool {
        self.get(pixel)
            .is_some_and(|value| value == f64::from(self.max_iterations))
    }
}
