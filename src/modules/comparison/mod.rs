pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{
    ChartData, ChartDataset, ComparisonInput, ComparisonResult, Recommendation, MAX_AMOUNT,
    MAX_RATE_PCT, MAX_TERM_MONTHS,
};
pub use services::{ComparisonCalculator, LoanCalculator};
