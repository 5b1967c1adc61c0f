pub mod plot;
pub mod plot_config;
pub mod ports;
