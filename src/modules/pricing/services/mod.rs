pub mod down_payment;
pub mod price_estimator;

pub use down_payment::DownPaymentCalculator;
pub use price_estimator::{PriceEstimator, PriceRange};
