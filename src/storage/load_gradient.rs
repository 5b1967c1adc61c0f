use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::colour_mapping::errors::GradientError;
use crate::core::colour_mapping::gradient::{Gradient, GradientStop};
use crate::core::data::colour::Colour;

#[derive(Debug, Error)]
pub enum GradientLoadError {
    #[error("failed to read gradient image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("gradient image {path} has no pixels")]
    EmptyImage { path: PathBuf },
    #[error("invalid gradient in {path}: {source}")]
    Gradient {
        path: PathBuf,
        #[source]
        source: GradientError,
    },
}

/// Loads a gradient from the first row of an image.
///
/// Pixel `x` of a `w` pixel wide row becomes a stop at `x / (w - 1)`. Images
/// without an alpha channel produce opaque stops.
pub fn load_gradient(path: impl AsRef<Path>) -> Result<Gradient, GradientLoadError> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| GradientLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let has_alpha = image.color().has_alpha();
    let pixels = image.to_rgba8();
    let width = pixels.width();

    if width == 0 || pixels.height() == 0 {
        return Err(GradientLoadError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    if width == 1 {
        log::warn!(
            "gradient image {} is one pixel wide, padding to a constant gradient",
            path.display()
        );
    }

    let stops = (0..width)
        .map(|x| {
            let [r, g, b, a] = pixels.get_pixel(x, 0).0;
            let alpha = if has_alpha { a } else { u8::MAX };
            GradientStop::new(stop_position(x, width), Colour::rgba(r, g, b, alpha))
        })
        .collect();

    log::debug!("loaded {} gradient stops from {}", width, path.display());

    Gradient::new(stops).map_err(|source| GradientLoadError::Gradient {
        path: path.to_path_buf(),
        source,
    })
}

fn stop_position(x: u32, width: u32) -> f64 {
    if width <= 1 {
        return 0.0;
    }

    f64::from(x) / f64::from(width - 1)
}
