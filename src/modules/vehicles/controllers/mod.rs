pub mod vehicle_controller;

pub use vehicle_controller::{configure, get_makes, get_models, get_years, vehicle_value};
