//! Leasewise vehicle buy-vs-lease calculator
//!
//! This library provides the comparison arithmetic, the placeholder pricing helpers
//! and the vehicle data proxy served by the `leasewise` binary.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::comparison;
pub use modules::pricing;
pub use modules::vehicles;
