pub mod colour;
pub mod iteration_results;
pub mod pixel_buffer;
pub mod plot_region;
pub mod point;
