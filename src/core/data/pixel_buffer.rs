use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PixelFormat {
    #[default]
    Rgb8,
    Rgba8,
}

impl PixelFormat {
    #[must_use]
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

fn buffer_size(width: u32, height: u32, format: PixelFormat) -> usize {
    width as usize * height as usize * format.channels()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of {width}x{height} buffer", .pixel.x, .pixel.y)]
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    #[error("expected buffer size {expected} does not match buffer size {buffer_size}")]
    BoundsMismatch { expected: usize, buffer_size: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Final 8-bit image, row-major with the origin at the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    format: PixelFormat,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
            buffer: vec![0; buffer_size(width, height, format)],
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        format: PixelFormat,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = buffer_size(width, height, format);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            format,
            buffer,
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
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn offset(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        let index = pixel.y as usize * self.width as usize + pixel.x as usize;
        Ok(index * self.format.channels())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.offset(pixel)?;
        let channels = &self.buffer[index..index + self.format.channels()];

        Ok(match self.format {
            PixelFormat::Rgb8 => Colour::rgb(channels[0], channels[1], channels[2]),
            PixelFormat::Rgba8 => Colour::rgba(channels[0], channels[1], channels[2], channels[3]),
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.offset(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
        if self.format == PixelFormat::Rgba8 {
            self.buffer[index + 3] = colour.a;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(10, 10, PixelFormat::Rgb8);

        assert_eq!(buffer.width(), 10);
        assert_eq!(buffer.height(), 10);
        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_rgba_buffer_size() {
        let buffer = PixelBuffer::new(100, 50, PixelFormat::Rgba8);

        assert_eq!(buffer.buffer_size(), 20000); // 100 * 50 * 4
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(2, 2, PixelFormat::Rgb8, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), Ok(Colour::rgb(0, 0, 255)));
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(2, 2, PixelFormat::Rgb8, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_rgb_sized_data_is_too_small_for_rgba() {
        let result = PixelBuffer::from_data(2, 2, PixelFormat::Rgba8, vec![0; 12]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected: 16,
                buffer_size: 12
            }
        );
    }

    #[test]
    fn test_set_pixel_valid() {
        let mut buffer = PixelBuffer::new(3, 3, PixelFormat::Rgb8);
        let result = buffer.set_pixel(Point { x: 1, y: 1 }, Colour::rgb(255, 0, 0));

        assert!(result.is_ok());
        assert_eq!(&buffer.buffer()[12..15], &[255, 0, 0]);
    }

    #[test]
    fn test_set_pixel_bottom_right_corner_rgba() {
        let mut buffer = PixelBuffer::new(3, 3, PixelFormat::Rgba8);
        let result = buffer.set_pixel(Point { x: 2, y: 2 }, Colour::rgba(0, 0, 255, 7));

        assert!(result.is_ok());
        assert_eq!(&buffer.buffer()[32..36], &[0, 0, 255, 7]);
        assert_eq!(buffer.pixel(Point { x: 2, y: 2 }), Ok(Colour::rgba(0, 0, 255, 7)));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 3, PixelFormat::Rgb8);
        let result = buffer.set_pixel(Point { x: 5, y: 1 }, Colour::rgb(255, 0, 0));

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 5, y: 1 },
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn test_pixel_reads_back_set_values() {
        let mut buffer = PixelBuffer::new(2, 2, PixelFormat::Rgb8);

        buffer.set_pixel(Point { x: 0, y: 0 }, Colour::rgb(255, 0, 0)).unwrap();
        buffer.set_pixel(Point { x: 1, y: 0 }, Colour::rgb(0, 255, 0)).unwrap();
        buffer.set_pixel(Point { x: 0, y: 1 }, Colour::rgb(0, 0, 255)).unwrap();
        buffer.set_pixel(Point { x: 1, y: 1 }, Colour::rgb(255, 255, 0)).unwrap();

        let expected: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 0, // (1,1) yellow
        ];

        assert_eq!(buffer.buffer(), &expected);
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }), Ok(Colour::rgb(255, 255, 0)));
    }

    #[test]
    fn test_error_message() {
        let err = PixelBufferError::PixelOutsideBounds {
            pixel: Point { x: 4, y: 1 },
            width: 3,
            height: 2,
        };

        assert_eq!(err.to_string(), "pixel at x:4, y:1 outside of 3x2 buffer");
    }
}
