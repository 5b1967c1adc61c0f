pub mod load_gradient;
