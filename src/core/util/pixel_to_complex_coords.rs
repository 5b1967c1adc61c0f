use num_complex::Complex64;

use crate::core::data::plot_region::PlotRegion;
use crate::core::data::point::Point;

/// Maps a pixel to its point in the complex plane.
///
/// Column `x` and row `y` step by `d_it` from `(xmin, ymin)`. Callers only
/// pass pixels inside the region, the mapping itself is defined everywhere.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, region: &PlotRegion) -> Complex64 {
    debug_assert!(region.contains_point(pixel));

    Complex64::new(
        region.xmin() + f64::from(pixel.x) * region.d_it(),
        region.ymin() + f64::from(pixel.y) * region.d_it(),
    )
}
