pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{DownPaymentRequest, DownPaymentSplit, PriceEstimate, PriceEstimateRequest};
pub use services::{DownPaymentCalculator, PriceEstimator, PriceRange};
