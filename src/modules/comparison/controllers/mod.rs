pub mod comparison_controller;

pub use comparison_controller::{compare, configure};
