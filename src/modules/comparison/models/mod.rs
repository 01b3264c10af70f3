pub mod comparison_input;
pub mod comparison_result;

pub use comparison_input::{ComparisonInput, MAX_AMOUNT, MAX_RATE_PCT, MAX_TERM_MONTHS};
pub use comparison_result::{ChartData, ChartDataset, ComparisonResult, Recommendation};
