use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError, PixelFormat};
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum GeneratePixelBufferError<E> {
    /// The operation was cancelled before completion.
    #[error("{0}")]
    Cancelled(Cancelled),
    #[error("colour map error: {0}")]
    ColourMap(#[source] E),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Generates a pixel buffer by mapping input values to colours.
///
/// `input` is row-major and must hold exactly `width * height` values.
/// For cancel-aware generation, use [`generate_pixel_buffer_cancelable`].
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    T: Copy,
    CMap: ColourMap<T>,
{
    generate_pixel_buffer_cancelable(input, mapper, width, height, &NeverCancel)
}

/// Generates a pixel buffer with cancellation support.
///
/// Streams colour bytes into a preallocated buffer and checks
/// `cancel.is_cancelled()` every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
/// Returns [`GeneratePixelBufferError::Cancelled`] if cancellation was
/// requested, no partial buffer is produced.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: &[T],
    mapper: &CMap,
    width: u32,
    height: u32,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    T: Copy,
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let format = mapper.pixel_format();
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * format.channels());

    for (i, &value) in input.iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let colour = mapper.map(value).map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.extend_from_slice(&[colour.r, colour.g, colour.b]);
        if format == PixelFormat::Rgba8 {
            buffer.push(colour.a);
        }
    }

    Ok(PixelBuffer::from_data(width, height, format, buffer)?)
}
