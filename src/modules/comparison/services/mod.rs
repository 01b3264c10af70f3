pub mod comparison_calculator;
pub mod loan_calculator;

pub use comparison_calculator::ComparisonCalculator;
pub use loan_calculator::LoanCalculator;
