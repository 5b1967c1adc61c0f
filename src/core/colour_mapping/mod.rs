pub mod errors;
pub mod gradient;
pub mod gradient_colour_map;
pub mod gradients;
