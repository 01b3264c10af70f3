use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Longest loan or lease term accepted, in months
pub const MAX_TERM_MONTHS: u32 = 600;

/// Largest price or payment accepted
pub const MAX_AMOUNT: Decimal = dec!(1000000000);

/// Largest annual rate accepted for the loan APR and the investment return, in percent
pub const MAX_RATE_PCT: Decimal = dec!(100);

/// Buy-vs-lease scenario.
///
/// Rates are annual percentages (`4.5` means 4.5 %). Missing JSON fields take the
/// defaults of a typical $30,000 purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonInput {
    /// Purchase price of the vehicle
    pub car_price: Decimal,

    /// Buyer's down payment, financed remainder is `car_price - down_payment`
    pub down_payment: Decimal,

    /// Loan term in months; also the horizon of the comparison
    pub loan_term_months: u32,

    /// Loan APR in percent
    pub interest_rate: Decimal,

    /// Length of one lease in months
    pub lease_term_months: u32,

    /// Monthly lease payment
    pub lease_payment: Decimal,

    /// Down payment due at the start of every lease
    pub lease_down_payment: Decimal,

    /// Expected annual return on invested savings, in percent
    pub investment_return: Decimal,

    /// Annual depreciation of the vehicle, in percent
    pub annual_depreciation: Decimal,
}

impl Default for ComparisonInput {
    fn default() -> Self {
        Self {
            car_price: dec!(30000),
            down_payment: dec!(3000),
            loan_term_months: 60,
            interest_rate: dec!(4.5),
            lease_term_months: 36,
            lease_payment: dec!(400),
            lease_down_payment: dec!(2000),
            investment_return: dec!(8),
            annual_depreciation: dec!(15),
        }
    }
}

impl ComparisonInput {
    pub fn validate(&self) -> Result<()> {
        if self.car_price <= Decimal::ZERO {
            return Err(AppError::validation("Car price must be positive"));
        }

        Self::validate_amount("Car price", self.car_price)?;

        if self.down_payment < Decimal::ZERO {
            return Err(AppError::validation("Down payment cannot be negative"));
        }

        if self.down_payment > self.car_price {
            return Err(AppError::validation(format!(
                "Down payment ({}) cannot exceed car price ({})",
                self.down_payment, self.car_price
            )));
        }

        Self::validate_term("Loan term", self.loan_term_months)?;
        Self::validate_term("Lease term", self.lease_term_months)?;

        if self.interest_rate < Decimal::ZERO || self.interest_rate > MAX_RATE_PCT {
            return Err(AppError::validation(format!(
                "Interest rate must be between 0% and {}%",
                MAX_RATE_PCT
            )));
        }

        if self.lease_payment < Decimal::ZERO {
            return Err(AppError::validation("Lease payment cannot be negative"));
        }
        Self::validate_amount("Lease payment", self.lease_payment)?;

        if self.lease_down_payment < Decimal::ZERO {
            return Err(AppError::validation("Lease down payment cannot be negative"));
        }
        Self::validate_amount("Lease down payment", self.lease_down_payment)?;

        if self.investment_return <= -MAX_RATE_PCT || self.investment_return > MAX_RATE_PCT {
            return Err(AppError::validation(format!(
                "Investment return must be greater than -{}% and at most {}%",
                MAX_RATE_PCT, MAX_RATE_PCT
            )));
        }

        if self.annual_depreciation < Decimal::ZERO || self.annual_depreciation > dec!(100) {
            return Err(AppError::validation(
                "Annual depreciation must be between 0% and 100%",
            ));
        }

        Ok(())
    }

    fn validate_amount(name: &str, amount: Decimal) -> Result<()> {
        if amount > MAX_AMOUNT {
            return Err(AppError::validation(format!(
                "{} cannot exceed {}",
                name, MAX_AMOUNT
            )));
        }
        Ok(())
    }

    fn validate_term(name: &str, months: u32) -> Result<()> {
        if months == 0 {
            return Err(AppError::validation(format!(
                "{} must be at least one month",
                name
            )));
        }

        if months > MAX_TERM_MONTHS {
            return Err(AppError::validation(format!(
                "{} cannot exceed {} months",
                name, MAX_TERM_MONTHS
            )));
        }

        Ok(())
    }
}
