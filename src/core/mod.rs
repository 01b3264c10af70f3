pub mod calendar;
pub mod error;
pub mod telemetry;

pub use calendar::{current_year, FIRST_MODEL_YEAR};
pub use error::{AppError, Result};
