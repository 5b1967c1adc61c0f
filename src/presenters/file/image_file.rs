use std::borrow::Cow;
use std::path::Path;

use image::{ExtendedColorType, ImageFormat};

use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelFormat};

/// Writes pixel buffers to disk, picking the encoder from the file extension.
#[derive(Debug, Default)]
pub struct ImageFilePresenter {}

impl ImageFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

fn supports_alpha(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png
            | ImageFormat::Tiff
            | ImageFormat::Tga
            | ImageFormat::WebP
            | ImageFormat::Qoi
            | ImageFormat::Bmp
            | ImageFormat::Ico
            | ImageFormat::Avif
    )
}

impl FilePresenterPort for ImageFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), PresentError> {
        let path = filepath.as_ref();
        let format = ImageFormat::from_path(path).map_err(|_| PresentError::UnknownFormat {
            path: path.to_path_buf(),
        })?;

        let (data, colour_type) = match buffer.format() {
            PixelFormat::Rgb8 => (Cow::Borrowed(buffer.buffer().as_slice()), ExtendedColorType::Rgb8),
            PixelFormat::Rgba8 if supports_alpha(format) => {
                (Cow::Borrowed(buffer.buffer().as_slice()), ExtendedColorType::Rgba8)
            }
            PixelFormat::Rgba8 => {
                log::debug!("{:?} has no alpha channel, dropping alpha", format);
                (Cow::Owned(rgba_to_rgb(buffer.buffer())), ExtendedColorType::Rgb8)
            }
        };

        image::save_buffer_with_format(
            path,
            &data,
            buffer.width(),
            buffer.height(),
            colour_type,
            format,
        )
        .map_err(|source| PresentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
