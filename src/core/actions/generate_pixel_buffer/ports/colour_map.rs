use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelFormat;
use std::error::Error;

pub trait ColourMap<T> {
    type Failure: Error;

    fn map(&self, value: T) -> Result<Colour, Self::Failure>;

    fn pixel_format(&self) -> PixelFormat;

    fn display_name(&self) -> &str;
}
